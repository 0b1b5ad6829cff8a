//! Rendering error types.

use thiserror::Error;

/// Errors reported when checking recorded draw output.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A clip was popped with no matching push.
    #[error("clip popped without a matching push at element {element}")]
    PopWithoutPush { element: usize },

    /// Clips were left pushed at the end of the element list.
    #[error("{depth} clip(s) left pushed at end of frame")]
    UnbalancedClip { depth: usize },
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
