//! Host vertex format.

use bytemuck::{Pod, Zeroable};
use glam::Affine2;
use imgui_bridge_core::DrawVert;

/// Index type of the host's custom-vertex draw elements.
pub type HostIndex = u32;

const COL32_R_SHIFT: u32 = 0;
const COL32_G_SHIFT: u32 = 8;
const COL32_B_SHIFT: u32 = 16;
const COL32_A_SHIFT: u32 = 24;

/// A vertex in the host's custom-vertex format.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct HostVertex {
    /// `[u, v, 1, 1]`; the last two channels are the host's tiling factors.
    pub tex_coords: [f32; 4],
    /// Position in host screen space.
    pub position: [f32; 2],
    /// 8-bit RGBA color.
    pub color: [u8; 4],
}

impl HostVertex {
    /// Converts a library vertex, moving its position through `transform`.
    ///
    /// The texture coordinate and color are carried over unchanged.
    #[inline]
    pub fn from_draw_vert(vert: &DrawVert, transform: &Affine2) -> Self {
        let position = transform.transform_point2(vert.position());
        Self {
            tex_coords: [vert.uv[0], vert.uv[1], 1.0, 1.0],
            position: position.to_array(),
            color: unpack_color(vert.col),
        }
    }

    /// Views a vertex slice as raw bytes for upload.
    pub fn as_bytes(vertices: &[HostVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Unpacks a library color into `[r, g, b, a]` bytes.
///
/// Red lives in the lowest byte and alpha in the highest.
#[inline]
pub fn unpack_color(col: u32) -> [u8; 4] {
    [
        ((col >> COL32_R_SHIFT) & 0xFF) as u8,
        ((col >> COL32_G_SHIFT) & 0xFF) as u8,
        ((col >> COL32_B_SHIFT) & 0xFF) as u8,
        ((col >> COL32_A_SHIFT) & 0xFF) as u8,
    ]
}
