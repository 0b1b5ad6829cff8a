//! Draw translation for imgui-bridge.
//!
//! This crate turns an owned [`DrawData`](imgui_bridge_core::DrawData)
//! snapshot into host-native draw primitives:
//! - Vertex conversion into the host [`HostVertex`] format through an affine transform
//! - Greedy batch merging of commands that share render state
//! - Texture handle resolution into host [`Brush`]es
//! - Clip push/pop around every emitted primitive via a [`DrawSink`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod brush;
pub mod error;
pub mod sink;
pub mod transform;
pub mod translator;
pub mod vertex;

pub use brush::{Brush, BrushDrawType, BrushImageType, ResourceHandle, TextureInfo, TextureRegistry, TextureResolver};
pub use error::{RenderError, RenderResult};
pub use sink::{ClipRect, CustomVertsElement, DrawElement, DrawElementList, DrawSink};
pub use transform::{paint_transform, transform_clip_rect};
pub use translator::{DrawTranslator, TranslateStats};
pub use vertex::{unpack_color, HostIndex, HostVertex};
