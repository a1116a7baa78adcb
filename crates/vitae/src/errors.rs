use thiserror::Error;

/// Library-level error type.
///
/// Only the orchestration paths are fallible: the pure pipeline stages
/// (extraction, layout, encoding) are total over all string inputs and never
/// construct this. Collaborator implementations use the string variants;
/// `Internal` covers infrastructure failures such as a lost blocking task.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("External renderer error: {0}")]
    Renderer(String),

    #[error("Text generation error: {0}")]
    Generation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
