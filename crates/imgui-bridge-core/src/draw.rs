//! Draw buffers produced by the immediate-mode library.
//!
//! A frame's output is a [`FrameDrawData`] holding one [`DrawList`] per
//! batch unit. Each list owns a vertex buffer, an index buffer, and an
//! ordered command buffer whose [`DrawCmd`]s reference ranges of both.

use std::fmt;
use std::mem;
use std::ops::Range;
use std::rc::Rc;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

use crate::error::{BridgeError, Result};

/// Index type used by the library's index buffers.
pub type DrawIdx = u16;

/// Host code invoked in place of a draw for callback commands.
pub type DrawCallback = Rc<dyn Fn(&DrawList, &DrawCmd)>;

/// A single library vertex: position, texture coordinate, and packed RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct DrawVert {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub col: u32,
}

impl DrawVert {
    /// Creates a vertex.
    pub fn new(pos: Vec2, uv: Vec2, col: u32) -> Self {
        Self {
            pos: pos.to_array(),
            uv: uv.to_array(),
            col,
        }
    }

    /// Returns the position as a vector.
    pub fn position(&self) -> Vec2 {
        Vec2::from_array(self.pos)
    }

    /// Returns the texture coordinate as a vector.
    pub fn tex_coord(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }
}

/// Opaque texture handle carried by draw commands. Zero is the null handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub usize);

impl TextureId {
    /// The null texture handle.
    pub const NULL: Self = Self(0);

    /// Returns true for the null handle.
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

crate::bridge_flags! {
    /// Flags describing how a draw list was built.
    pub struct DrawListFlags: u32 {
        /// Lines are anti-aliased.
        const ANTI_ALIASED_LINES = 1 << 0;
        /// Lines are anti-aliased using textures where possible.
        const ANTI_ALIASED_LINES_USE_TEX = 1 << 1;
        /// Filled shapes are anti-aliased.
        const ANTI_ALIASED_FILL = 1 << 2;
        /// Vertex offsets may be non-zero.
        const ALLOW_VTX_OFFSET = 1 << 3;
    }
}

/// One draw call within a [`DrawList`].
#[derive(Clone)]
pub struct DrawCmd {
    /// Clip rectangle as `(min_x, min_y, max_x, max_y)` in library space.
    pub clip_rect: Vec4,
    /// Texture to sample.
    pub texture_id: TextureId,
    /// First vertex this command's indices are relative to.
    pub vtx_offset: u32,
    /// First index of this command in the list's index buffer.
    pub idx_offset: u32,
    /// Number of indices drawn.
    pub elem_count: u32,
    /// Host code to run instead of drawing.
    pub user_callback: Option<DrawCallback>,
}

impl DrawCmd {
    /// Creates a drawable command.
    pub fn new(
        clip_rect: Vec4,
        texture_id: TextureId,
        vtx_offset: u32,
        idx_offset: u32,
        elem_count: u32,
    ) -> Self {
        Self {
            clip_rect,
            texture_id,
            vtx_offset,
            idx_offset,
            elem_count,
            user_callback: None,
        }
    }

    /// Creates a callback-only command.
    pub fn callback(clip_rect: Vec4, callback: DrawCallback) -> Self {
        Self {
            clip_rect,
            texture_id: TextureId::NULL,
            vtx_offset: 0,
            idx_offset: 0,
            elem_count: 0,
            user_callback: Some(callback),
        }
    }

    /// Returns true if this command runs host code instead of drawing.
    pub fn is_callback(&self) -> bool {
        self.user_callback.is_some()
    }

    /// Range of this command in the list's index buffer.
    pub fn index_range(&self) -> Range<usize> {
        let start = self.idx_offset as usize;
        start..start + self.elem_count as usize
    }

    /// Returns true if both commands can be drawn by a single host draw call.
    ///
    /// Texture, callback, and vertex offset must match and the clip rectangles
    /// must be bit-for-bit identical.
    pub fn shares_render_state(&self, other: &Self) -> bool {
        let same_callback = match (&self.user_callback, &other.user_callback) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        };
        self.texture_id == other.texture_id
            && same_callback
            && self.vtx_offset == other.vtx_offset
            && clip_bits(self.clip_rect) == clip_bits(other.clip_rect)
    }
}

fn clip_bits(rect: Vec4) -> [u32; 4] {
    rect.to_array().map(f32::to_bits)
}

impl fmt::Debug for DrawCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawCmd")
            .field("clip_rect", &self.clip_rect)
            .field("texture_id", &self.texture_id)
            .field("vtx_offset", &self.vtx_offset)
            .field("idx_offset", &self.idx_offset)
            .field("elem_count", &self.elem_count)
            .field("user_callback", &self.user_callback.is_some())
            .finish()
    }
}

/// One batch unit of a frame: vertices, indices, and the commands drawing them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vtx_buffer: Vec<DrawVert>,
    pub idx_buffer: Vec<DrawIdx>,
    pub cmd_buffer: Vec<DrawCmd>,
    pub flags: DrawListFlags,
}

impl DrawList {
    /// Creates an empty draw list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the buffers out of `source`, leaving its buffers empty.
    ///
    /// Flags are copied; no vertex or index is duplicated.
    pub fn take_from(source: &mut DrawList) -> Self {
        Self {
            vtx_buffer: mem::take(&mut source.vtx_buffer),
            idx_buffer: mem::take(&mut source.idx_buffer),
            cmd_buffer: mem::take(&mut source.cmd_buffer),
            flags: source.flags,
        }
    }

    /// Returns true if the list has nothing to draw or call.
    pub fn is_empty(&self) -> bool {
        self.cmd_buffer.is_empty()
    }

    /// Checks that command `index` references ranges inside this list.
    pub fn validate_command(&self, index: usize) -> Result<()> {
        let Some(cmd) = self.cmd_buffer.get(index) else {
            return Err(BridgeError::CommandOutOfRange {
                command: index,
                reason: format!("list has {} commands", self.cmd_buffer.len()),
            });
        };
        if cmd.is_callback() {
            return Ok(());
        }
        let range = cmd.index_range();
        if range.end > self.idx_buffer.len() {
            return Err(BridgeError::CommandOutOfRange {
                command: index,
                reason: format!(
                    "indices {}..{} exceed index buffer of {}",
                    range.start,
                    range.end,
                    self.idx_buffer.len()
                ),
            });
        }
        if cmd.elem_count > 0 && cmd.vtx_offset as usize >= self.vtx_buffer.len() {
            return Err(BridgeError::CommandOutOfRange {
                command: index,
                reason: format!(
                    "vertex offset {} exceeds vertex buffer of {}",
                    cmd.vtx_offset,
                    self.vtx_buffer.len()
                ),
            });
        }
        Ok(())
    }
}

/// The library's transient per-frame draw output.
///
/// Only valid until the library begins its next frame; take a
/// [`DrawData`](crate::DrawData) snapshot to keep it.
#[derive(Debug, Clone, Default)]
pub struct FrameDrawData {
    /// Whether the frame produced renderable content.
    pub valid: bool,
    pub total_vtx_count: usize,
    pub total_idx_count: usize,
    pub cmd_lists: Vec<DrawList>,
    /// Top-left of the library's display rectangle.
    pub display_pos: Vec2,
    pub display_size: Vec2,
    pub framebuffer_scale: Vec2,
}

impl FrameDrawData {
    /// Creates an empty, valid frame covering `display_size` at the origin.
    pub fn new(display_size: Vec2) -> Self {
        Self {
            valid: true,
            display_size,
            framebuffer_scale: Vec2::ONE,
            ..Self::default()
        }
    }

    /// Appends a draw list and updates the totals.
    pub fn push_list(&mut self, list: DrawList) {
        self.total_vtx_count += list.vtx_buffer.len();
        self.total_idx_count += list.idx_buffer.len();
        self.cmd_lists.push(list);
    }
}
