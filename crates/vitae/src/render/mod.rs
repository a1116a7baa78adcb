// Render orchestration: external rich renderer first, the built-in fallback
// pipeline second. The fallback path always produces bytes.

pub mod orchestrator;

pub use orchestrator::{render_fallback_pdf, render_resume, RichRenderer};
