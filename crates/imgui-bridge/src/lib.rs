//! imgui-bridge: hosts an immediate-mode GUI inside a retained-mode application.
//!
//! The immediate-mode library produces a fresh set of draw lists every frame
//! and expects input through an event queue. A retained-mode host instead
//! paints widgets from a tree and routes raw input through a dispatch chain.
//! This crate connects the two.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::rc::Rc;
//!
//! use imgui_bridge::*;
//!
//! fn frame(host: &Rc<dyn HostApplication>, frame: &mut FrameDrawData) -> Result<()> {
//!     let mut overlay = Overlay::new(OverlayArgs::new(), host)?;
//!
//!     // After the library finishes its frame, take its draw output.
//!     overlay.set_draw_data(frame);
//!
//!     // During the host paint pass, emit host draw elements.
//!     let mut elements = DrawElementList::new();
//!     let geometry = PaintGeometry::new(Vec2::ZERO, Vec2::new(1280.0, 720.0));
//!     overlay.paint(&geometry, 0, &TextureRegistry::new(), &mut elements);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`DrawData`] - an owned snapshot of one frame's draw lists
//! - [`DrawTranslator`] - converts a snapshot into host primitives, merging batches
//! - [`InputBridge`] - a host input pre-processor feeding the library's I/O queue
//! - [`Overlay`] - the host widget that owns the snapshot and the bridge registration

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Key tables are long by nature
#![allow(clippy::too_many_lines)]

pub mod host;
pub mod input;
pub mod keys;
pub mod overlay;
#[cfg(feature = "winit")]
pub mod winit_keys;

// Re-export core types
pub use imgui_bridge_core::{
    current_context_id, Affine2, BackendFlags, BridgeError, BridgeOptions, ConfigFlags,
    ContextHandle, DrawCallback, DrawCmd, DrawData, DrawIdx, DrawList, DrawVert, FrameDrawData,
    InputEvent, Io, Key, MouseButton, MouseCursor, Result, TextureId, Vec2, Vec4,
    MOUSE_POS_OUT_OF_BOUNDS,
};

// Re-export render types
pub use imgui_bridge_render::{
    Brush, ClipRect, DrawElement, DrawElementList, DrawSink, DrawTranslator, HostIndex,
    HostVertex, ResourceHandle, TextureInfo, TextureRegistry, TextureResolver, TranslateStats,
};

pub use host::{
    AnalogInputEvent, HostApplication, HostCursor, HostInputEvent, HostKey, InputPreProcessor,
    KeyEvent, ModifierKeys, OverlayId, PaintGeometry, PointerButton, PointerEvent, Reply,
    SharedPreProcessor, Visibility,
};
pub use input::InputBridge;
pub use keys::{convert_cursor, convert_key, convert_mouse_button};
pub use overlay::{Overlay, OverlayArgs};
