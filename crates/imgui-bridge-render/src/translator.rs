//! Draw-data translation into host primitives.
//!
//! For each draw list, vertices are transformed into the host format once,
//! then commands are walked in order. Each command not yet consumed starts a
//! batch and greedily absorbs every later unconsumed command with the same
//! render state (texture, callback, vertex offset, bit-exact clip rectangle),
//! concatenating their index ranges in command order. Callback commands are
//! never merged: they run in place and stop the look-ahead, so no draw is
//! hoisted across a callback.

use glam::Affine2;
use imgui_bridge_core::{BridgeOptions, DrawData, DrawList};

use crate::brush::{BrushCache, TextureResolver};
use crate::sink::DrawSink;
use crate::transform::transform_clip_rect;
use crate::vertex::{HostIndex, HostVertex};

/// Counters from one translation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslateStats {
    /// Draw lists visited.
    pub lists: usize,
    /// Commands visited across all lists.
    pub commands: usize,
    /// Host primitives emitted.
    pub batches: usize,
    /// User callbacks invoked.
    pub callbacks: usize,
    /// Commands skipped because they referenced data outside their list.
    pub skipped: usize,
}

/// Converts [`DrawData`] snapshots into host draw primitives.
///
/// Scratch buffers are kept between frames to avoid per-frame allocation.
#[derive(Debug)]
pub struct DrawTranslator {
    merge_batches: bool,
    used_commands: Vec<bool>,
    vertices: Vec<HostVertex>,
    indices: Vec<HostIndex>,
    batch_indices: Vec<HostIndex>,
    brush: BrushCache,
}

impl Default for DrawTranslator {
    fn default() -> Self {
        Self::new(&BridgeOptions::default())
    }
}

impl DrawTranslator {
    /// Creates a translator configured from `options`.
    pub fn new(options: &BridgeOptions) -> Self {
        Self {
            merge_batches: options.merge_batches,
            used_commands: Vec::with_capacity(options.command_capacity),
            vertices: Vec::new(),
            indices: Vec::new(),
            batch_indices: Vec::new(),
            brush: BrushCache::default(),
        }
    }

    /// Enables or disables batch merging.
    pub fn set_merge_batches(&mut self, merge: bool) {
        self.merge_batches = merge;
    }

    /// Emits `draw_data` into `sink` at `layer`, transforming vertices by `transform`.
    ///
    /// An invalid snapshot emits nothing.
    pub fn translate(
        &mut self,
        draw_data: &DrawData,
        transform: &Affine2,
        layer: i32,
        textures: &dyn TextureResolver,
        sink: &mut dyn DrawSink,
    ) -> TranslateStats {
        let mut stats = TranslateStats::default();
        if !draw_data.valid {
            return stats;
        }

        self.brush.reset();
        for list in &draw_data.draw_lists {
            self.translate_list(list, transform, layer, textures, sink, &mut stats);
        }

        log::trace!(
            "translated {} lists: {} commands into {} batches ({} callbacks, {} skipped)",
            stats.lists,
            stats.commands,
            stats.batches,
            stats.callbacks,
            stats.skipped
        );
        stats
    }

    fn translate_list(
        &mut self,
        list: &DrawList,
        transform: &Affine2,
        layer: i32,
        textures: &dyn TextureResolver,
        sink: &mut dyn DrawSink,
        stats: &mut TranslateStats,
    ) {
        stats.lists += 1;
        stats.commands += list.cmd_buffer.len();

        self.vertices.clear();
        self.vertices.extend(
            list.vtx_buffer
                .iter()
                .map(|vert| HostVertex::from_draw_vert(vert, transform)),
        );

        self.indices.clear();
        self.indices
            .extend(list.idx_buffer.iter().map(|&idx| HostIndex::from(idx)));

        self.used_commands.clear();
        self.used_commands.resize(list.cmd_buffer.len(), false);

        for i in 0..list.cmd_buffer.len() {
            if self.used_commands[i] {
                continue;
            }
            self.used_commands[i] = true;

            let cmd = &list.cmd_buffer[i];
            if let Some(callback) = &cmd.user_callback {
                callback(list, cmd);
                stats.callbacks += 1;
                continue;
            }

            self.batch_indices.clear();
            self.append_command_indices(list, i, stats);

            if self.merge_batches {
                for k in i + 1..list.cmd_buffer.len() {
                    if self.used_commands[k] {
                        continue;
                    }
                    let other = &list.cmd_buffer[k];
                    if other.is_callback() {
                        break;
                    }
                    if cmd.shares_render_state(other) {
                        self.append_command_indices(list, k, stats);
                        self.used_commands[k] = true;
                    }
                }
            }

            if self.batch_indices.is_empty() {
                continue;
            }

            let Some(vertices) = self.vertices.get(cmd.vtx_offset as usize..) else {
                log::warn!(
                    "draw command {i} vertex offset {} exceeds {} vertices, skipping",
                    cmd.vtx_offset,
                    self.vertices.len()
                );
                stats.skipped += 1;
                continue;
            };

            let brush = self.brush.resolve(cmd.texture_id, textures);
            let clip = transform_clip_rect(transform, cmd.clip_rect);

            sink.push_clip(clip);
            sink.draw_custom_verts(layer, &brush, vertices, &self.batch_indices);
            sink.pop_clip();
            stats.batches += 1;
        }
    }

    /// Appends command `index`'s index range to the current batch.
    fn append_command_indices(&mut self, list: &DrawList, index: usize, stats: &mut TranslateStats) {
        if let Err(err) = list.validate_command(index) {
            log::warn!("skipping malformed draw command: {err}");
            stats.skipped += 1;
            return;
        }
        let range = list.cmd_buffer[index].index_range();
        self.batch_indices.extend_from_slice(&self.indices[range]);
    }
}
