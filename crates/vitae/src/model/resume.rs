use serde::{Deserialize, Serialize};

/// Name used when the input text contains no usable first line.
pub const PLACEHOLDER_NAME: &str = "Professional Candidate";

/// Structured extraction of a free-form resume text into named sections.
///
/// Invariants (upheld by `extract::extract_resume_sections`, never re-checked
/// downstream): every string field is trimmed; `skills` carries no duplicate
/// (case-sensitive, post-trim) entries and no empty strings; `name` is
/// non-empty, falling back to [`PLACEHOLDER_NAME`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub name: String,
    pub target_role: String,
    pub summary: String,
    /// Ordered experience items, one bullet each.
    pub experience: Vec<String>,
    /// Ordered education items, one bullet each.
    pub education: Vec<String>,
    /// Unique skill tokens in first-seen order.
    pub skills: Vec<String>,
}
