//! Profile Composer — turns a stored profile snapshot into raw resume text.
//!
//! The text either comes from an injected external generator or, whenever
//! that collaborator is absent, fails, or returns nothing, from a
//! deterministic template whose labeled blocks round-trip cleanly through
//! the section extractor.

pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::compose::prompts::{
    FALLBACK_ROLE, FALLBACK_SKILLS_HINT, FALLBACK_SUMMARY, RESUME_PROMPT_TEMPLATE,
};
use crate::errors::RenderError;

/// The profile fields resume text is composed from. Persistence-free; the
/// caller loads these from wherever it keeps user profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub name: String,
    pub education: String,
    pub experience: String,
    pub target_role: String,
    pub skills: Vec<String>,
}

/// An optional external text-generation collaborator. Receives the built
/// prompt, returns generated resume text; failures and empty output are
/// recovered by the template fallback.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, RenderError>;
}

/// Normalizes a loosely-typed skills value: either a JSON array of strings
/// or a JSON-encoded string of one. Anything else yields an empty list.
pub fn skills_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => collect_strings(items),
        Value::String(s) if !s.is_empty() => match serde_json::from_str::<Value>(s) {
            Ok(Value::Array(items)) => collect_strings(&items),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn collect_strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fills the generation prompt template from a profile snapshot.
pub fn build_generation_prompt(profile: &ProfileSnapshot) -> String {
    RESUME_PROMPT_TEMPLATE
        .replace("{name}", &profile.name)
        .replace("{education}", &profile.education)
        .replace("{experience}", &profile.experience)
        .replace("{target_role}", &profile.target_role)
        .replace("{skills}", &profile.skills.join(", "))
}

/// Builds the deterministic template resume text: uppercased name plus the
/// labeled blocks the section extractor recognizes, joined by blank lines.
pub fn fallback_resume_text(profile: &ProfileSnapshot) -> String {
    let skill_line = if profile.skills.is_empty() {
        FALLBACK_SKILLS_HINT.to_string()
    } else {
        profile.skills.join(", ")
    };
    let role_line = if profile.target_role.is_empty() {
        FALLBACK_ROLE
    } else {
        profile.target_role.as_str()
    };

    [
        profile.name.to_uppercase(),
        format!("Target Position: {role_line}"),
        format!("Professional Summary:\n{FALLBACK_SUMMARY}"),
        format!("Education:\n{}", profile.education),
        format!("Experience:\n{}", profile.experience),
        format!("Core Skills:\n{skill_line}"),
    ]
    .join("\n\n")
}

/// Produces raw resume text for a profile, preferring `generator` when one
/// is supplied. Never fails: any collaborator problem degrades to the
/// deterministic template.
pub async fn generate_resume_text(
    profile: &ProfileSnapshot,
    generator: Option<&dyn TextGenerator>,
) -> String {
    if let Some(generator) = generator {
        let prompt = build_generation_prompt(profile);
        match generator.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                info!("external generator produced resume text");
                return text.trim().to_string();
            }
            Ok(_) => warn!("text generator returned empty output, using template"),
            Err(e) => warn!("text generator failed ({e}), using template"),
        }
    }
    fallback_resume_text(profile)
}
