//! Owned per-frame draw snapshot.

use glam::Vec2;

use crate::draw::{DrawList, FrameDrawData};

/// One frame's renderable output, detached from the library's transient buffers.
///
/// Built once per frame right after the library finishes layout, and read
/// later by the host's paint pass. Each capture replaces the previous
/// snapshot entirely.
#[derive(Debug, Clone, Default)]
pub struct DrawData {
    /// False when the library produced no renderable content.
    pub valid: bool,
    pub total_idx_count: usize,
    pub total_vtx_count: usize,
    pub draw_lists: Vec<DrawList>,
    pub display_pos: Vec2,
    pub display_size: Vec2,
    pub framebuffer_scale: Vec2,
}

impl DrawData {
    /// Takes ownership of a frame's draw output.
    ///
    /// Vertex, index, and command buffers are moved out of `source` and its
    /// lists are left empty. Scalar fields are copied.
    pub fn capture(source: &mut FrameDrawData) -> Self {
        let draw_lists: Vec<DrawList> = source
            .cmd_lists
            .iter_mut()
            .map(DrawList::take_from)
            .collect();

        log::trace!(
            "captured draw data: {} lists, {} vertices, {} indices",
            draw_lists.len(),
            source.total_vtx_count,
            source.total_idx_count
        );

        Self {
            valid: source.valid,
            total_idx_count: source.total_idx_count,
            total_vtx_count: source.total_vtx_count,
            draw_lists,
            display_pos: source.display_pos,
            display_size: source.display_size,
            framebuffer_scale: source.framebuffer_scale,
        }
    }

    /// Returns true if there are no draw lists.
    pub fn is_empty(&self) -> bool {
        self.draw_lists.is_empty()
    }

    /// Returns the captured draw lists in submission order.
    pub fn draw_lists(&self) -> &[DrawList] {
        &self.draw_lists
    }

    /// Total number of commands across all lists.
    pub fn total_cmd_count(&self) -> usize {
        self.draw_lists.iter().map(|list| list.cmd_buffer.len()).sum()
    }
}
