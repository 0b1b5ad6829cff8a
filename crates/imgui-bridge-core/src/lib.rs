//! Core data model for imgui-bridge.
//!
//! This crate holds the library-side half of the bridge:
//! - [`FrameDrawData`] and [`DrawList`] buffers as produced by the immediate-mode library
//! - The owned per-frame [`DrawData`] snapshot taken out of those buffers
//! - The library I/O state ([`Io`]) that input is queued into
//! - The shared [`ContextHandle`] with scoped activation
//! - Configuration ([`BridgeOptions`]) and error types

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Options structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod draw;
pub mod error;
pub mod flags;
pub mod io;
pub mod options;
pub mod snapshot;
pub mod state;

pub use draw::{DrawCallback, DrawCmd, DrawIdx, DrawList, DrawListFlags, DrawVert, FrameDrawData, TextureId};
pub use error::{BridgeError, Result};
pub use io::{
    BackendFlags, ConfigFlags, InputEvent, Io, Key, MouseButton, MouseCursor,
    MOUSE_POS_OUT_OF_BOUNDS,
};
pub use options::BridgeOptions;
pub use snapshot::DrawData;
pub use state::{current_context_id, ContextHandle, ContextId, ContextState, ScopedContext};

// Re-export glam types for convenience
pub use glam::{Affine2, Vec2, Vec4};
