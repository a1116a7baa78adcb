// PDF production: draw commands → content-stream text → complete document
// bytes. No I/O, no failure paths; unsafe characters were sanitized by the
// layout engine before they reach this module.

pub mod content;
pub mod writer;

pub use content::build_content_stream;
pub use writer::encode_pdf;
