// Domain types shared by every pipeline stage.
// Pure data; construction and invariants live in the extract/layout modules.

pub mod draw;
pub mod resume;

pub use draw::{DrawCommand, LayoutResult, Rgb};
pub use resume::{ResumeDocument, PLACEHOLDER_NAME};
