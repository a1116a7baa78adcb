//! Prompt and template constants for resume text composition.

/// Prompt handed to the external text generator. Placeholders are filled by
/// `build_generation_prompt`.
pub const RESUME_PROMPT_TEMPLATE: &str = "\
Create a professional resume:
Name: {name}
Education: {education}
Experience: {experience}
Target Role: {target_role}
Skills: {skills}
";

/// Canned summary used by the deterministic template fallback.
pub const FALLBACK_SUMMARY: &str =
    "Results-driven professional with practical experience and a focus on measurable outcomes.";

/// Skill line shown when the profile has no skills yet.
pub const FALLBACK_SKILLS_HINT: &str = "Add your key skills in profile.";

/// Target position shown when the profile names no role.
pub const FALLBACK_ROLE: &str = "Professional Role";
