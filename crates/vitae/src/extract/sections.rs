//! Text Section Extractor — parses a loosely-structured resume text blob
//! into a [`ResumeDocument`].
//!
//! Labeled blocks are located by a case-insensitive line-start `<label>:`
//! match and captured greedily up to the next `Word(s):` header line or end
//! of input. Unlabeled text still produces a usable document: the first
//! non-empty line is the name, the second doubles as the summary.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::lists::{bullet_items, skill_items};
use crate::model::{ResumeDocument, PLACEHOLDER_NAME};

/// A line of 1–40 letters/spaces followed by a colon opens a new section.
static HEADER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[A-Za-z ]{1,40}:").unwrap());

static TARGET_ROLE: Lazy<Regex> = Lazy::new(|| label_pattern(&["Target Position", "Target Role"]));
static SUMMARY: Lazy<Regex> =
    Lazy::new(|| label_pattern(&["Professional Summary", "Summary", "Profile"]));
static EXPERIENCE: Lazy<Regex> = Lazy::new(|| label_pattern(&["Experience", "Work Experience"]));
static EDUCATION: Lazy<Regex> = Lazy::new(|| label_pattern(&["Education"]));
static SKILLS: Lazy<Regex> =
    Lazy::new(|| label_pattern(&["Core Skills", "Skills", "Technical Skills"]));

fn label_pattern(labels: &[&str]) -> Regex {
    let alternation = labels
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?mi)^(?:{alternation})\s*:\s*")).unwrap()
}

/// Extracts the five labeled sections (plus name and summary fallbacks)
/// from arbitrary resume text. Total: any input, including the empty
/// string, yields a valid document.
pub fn extract_resume_sections(text: &str) -> ResumeDocument {
    // Normalize every line-break sequence to '\n' so the line-start anchors
    // behave identically for \n, \r\n, and bare-\r input.
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let non_empty: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let name = non_empty
        .first()
        .map(|line| line.to_string())
        .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());

    let target_role = section_text(&text, &TARGET_ROLE).unwrap_or_default();

    let mut summary = section_text(&text, &SUMMARY).unwrap_or_default();
    if summary.is_empty() && non_empty.len() >= 2 {
        summary = non_empty[1].to_string();
    }

    let experience = bullet_items(&section_text(&text, &EXPERIENCE).unwrap_or_default());
    let education = bullet_items(&section_text(&text, &EDUCATION).unwrap_or_default());
    let skills = skill_items(&section_text(&text, &SKILLS).unwrap_or_default());

    ResumeDocument {
        name,
        target_role,
        summary,
        experience,
        education,
        skills,
    }
}

/// Returns the trimmed text between the first match of `label` and the next
/// section header (or end of input). `None` when the label never occurs.
fn section_text(text: &str, label: &Regex) -> Option<String> {
    let matched = label.find(text)?;
    let rest = &text[matched.end()..];

    // A header match at offset 0 only counts when the label's own line ended
    // there; the remainder of a `Label: value` line is content, even if it
    // happens to contain a colon.
    let at_line_start = text[..matched.end()].ends_with('\n');
    let end = HEADER_LINE
        .find_iter(rest)
        .map(|header| header.start())
        .find(|&start| start > 0 || at_line_start)
        .unwrap_or(rest.len());

    Some(rest[..end].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── labeled extraction ──────────────────────────────────────────────────

    #[test]
    fn test_labeled_sections_with_skill_dedup() {
        let doc = extract_resume_sections(
            "Jane Doe\n\nTarget Role: Backend Engineer\n\nSkills: Go, SQL, Go, Docker",
        );
        assert_eq!(doc.name, "Jane Doe");
        assert_eq!(doc.target_role, "Backend Engineer");
        assert_eq!(
            doc.skills,
            vec!["Go", "SQL", "Docker"],
            "duplicate removed, order preserved"
        );
    }

    #[test]
    fn test_label_matching_is_case_insensitive() {
        let doc = extract_resume_sections("Jane Doe\nTARGET ROLE: Platform Lead\nskills: Rust");
        assert_eq!(doc.target_role, "Platform Lead");
        assert_eq!(doc.skills, vec!["Rust"]);
    }

    #[test]
    fn test_section_captures_until_next_header() {
        let text = "Jane Doe\nProfessional Summary:\nTen years building storage engines.\n\
                    Focus on reliability.\nEducation:\nBSc Computer Science";
        let doc = extract_resume_sections(text);
        assert_eq!(
            doc.summary,
            "Ten years building storage engines.\nFocus on reliability."
        );
        assert_eq!(doc.education, vec!["BSc Computer Science"]);
    }

    #[test]
    fn test_same_line_value_with_inner_colon_is_content() {
        let doc = extract_resume_sections("Jane Doe\nExperience: Acme: Staff Engineer");
        assert_eq!(doc.experience, vec!["Acme: Staff Engineer"]);
    }

    #[test]
    fn test_experience_lines_become_bullets() {
        let text = "Jane Doe\nWork Experience:\n- Built a billing pipeline\n- Led the v2 migration\nSkills: Go";
        let doc = extract_resume_sections(text);
        assert_eq!(
            doc.experience,
            vec!["Built a billing pipeline", "Led the v2 migration"]
        );
    }

    // ── fallbacks ───────────────────────────────────────────────────────────

    #[test]
    fn test_empty_input_gets_placeholder_name() {
        let doc = extract_resume_sections("");
        assert_eq!(doc.name, PLACEHOLDER_NAME);
        assert!(doc.target_role.is_empty());
        assert!(doc.summary.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_whitespace_only_input_gets_placeholder_name() {
        let doc = extract_resume_sections("  \n\t\n  ");
        assert_eq!(doc.name, PLACEHOLDER_NAME);
    }

    #[test]
    fn test_summary_falls_back_to_second_line() {
        let doc = extract_resume_sections("Jane Doe\nSeasoned backend engineer.\n");
        assert_eq!(doc.summary, "Seasoned backend engineer.");
    }

    #[test]
    fn test_summary_fallback_applies_even_to_header_lines() {
        // No Summary label anywhere: the second non-empty line is used as-is,
        // even when it is itself a labeled header.
        let doc = extract_resume_sections("Jane Doe\n\nTarget Role: Backend Engineer");
        assert_eq!(doc.summary, "Target Role: Backend Engineer");
    }

    #[test]
    fn test_single_line_input_has_no_summary() {
        let doc = extract_resume_sections("Jane Doe");
        assert_eq!(doc.name, "Jane Doe");
        assert!(doc.summary.is_empty());
    }

    #[test]
    fn test_unbulletable_section_becomes_whole_blob_item() {
        let doc = extract_resume_sections("Jane Doe\nEducation:\n-- **\nSkills: Go");
        assert_eq!(doc.education, vec!["-- **"]);
    }

    #[test]
    fn test_adjacent_headers_leave_section_empty() {
        let doc = extract_resume_sections("Jane Doe\nExperience:\nSkills: Go");
        assert!(doc.experience.is_empty());
        assert_eq!(doc.skills, vec!["Go"]);
    }

    // ── line-break handling ─────────────────────────────────────────────────

    #[test]
    fn test_crlf_input_parses_identically() {
        let unix = extract_resume_sections("Jane Doe\nSkills: Go, SQL\n");
        let dos = extract_resume_sections("Jane Doe\r\nSkills: Go, SQL\r\n");
        assert_eq!(unix, dos);
    }

    // ── invariants ──────────────────────────────────────────────────────────

    #[test]
    fn test_skills_never_contain_duplicates_or_empties() {
        let inputs = [
            "",
            "Name\nSkills: ,,a,,a, ,b",
            "Skills: |||",
            "x\ny\nSkills:   ",
        ];
        for input in inputs {
            let doc = extract_resume_sections(input);
            let mut sorted = doc.skills.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), doc.skills.len(), "duplicates in {input:?}");
            assert!(
                doc.skills.iter().all(|s| !s.trim().is_empty()),
                "empty skill in {input:?}"
            );
        }
    }
}
