use thiserror::Error;

/// Errors raised by the canvas engine.
///
/// Empty undo/redo is not an error; those calls are silent no-ops.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Export was requested before the surface received a non-zero size.
    #[error("drawing surface has zero area; size it before exporting")]
    NotSized,
    /// A width limit in the config is zero, negative, or not finite.
    #[error("invalid canvas config: {field} must be a positive number, got {value}")]
    InvalidWidth { field: &'static str, value: f32 },
    #[error("invalid canvas config: {0}")]
    Config(#[from] serde_json::Error),
}
