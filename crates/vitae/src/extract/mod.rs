// Text → structure: the section extractor and the list normalizers it feeds.
// Every function here is total: malformed input degrades to placeholders,
// never to an error.

pub mod lists;
pub mod sections;

pub use lists::{bullet_items, skill_items};
pub use sections::extract_resume_sections;
