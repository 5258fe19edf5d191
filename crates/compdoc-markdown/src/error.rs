//! Render error types.

/// Render error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The print order names a category that is unknown or missing from the
    /// component descriptor.
    #[error("Configuration error: unknown print order node '{0}'")]
    UnknownNode(String),

    /// The render task panicked or was cancelled.
    #[error("Render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
