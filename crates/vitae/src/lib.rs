//! vitae — structured-text-to-PDF resume rendering.
//!
//! Takes free-form resume text, parses it into a structured document, lays
//! it out on a single fixed-size page, and serializes a minimal PDF byte
//! stream from scratch, with no PDF library involved. An external rich
//! renderer and an external text generator plug in as optional collaborator
//! traits; every collaborator failure degrades to the deterministic
//! built-in pipeline.
//!
//! Pipeline: [`extract_resume_sections`] → [`layout_resume`] →
//! [`build_content_stream`] → [`encode_pdf`], composed by
//! [`render_fallback_pdf`] and orchestrated (with the optional external
//! renderer) by [`render_resume`].

pub mod compose;
pub mod errors;
pub mod extract;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod render;

pub use compose::{
    build_generation_prompt, fallback_resume_text, generate_resume_text, skills_from_value,
    ProfileSnapshot, TextGenerator,
};
pub use errors::RenderError;
pub use extract::extract_resume_sections;
pub use layout::{default_geometry, layout_resume, PageGeometry};
pub use model::{DrawCommand, LayoutResult, ResumeDocument, Rgb};
pub use pdf::{build_content_stream, encode_pdf};
pub use render::{render_fallback_pdf, render_resume, RichRenderer};
