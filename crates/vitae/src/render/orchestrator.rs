//! Resume Render Orchestrator — TryExternalRenderer → TryFallbackRenderer →
//! Done.
//!
//! The external renderer is an injected collaborator: absence, failure, or
//! empty output all fall through to the built-in pipeline
//! (extract → layout → content stream → encode), which is total over any
//! input text. The CPU-bound fallback runs via `tokio::task::spawn_blocking`
//! so it never stalls the async executor.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::RenderError;
use crate::extract::extract_resume_sections;
use crate::layout::geometry::default_geometry;
use crate::layout::layout_resume;
use crate::model::ResumeDocument;
use crate::pdf::{build_content_stream, encode_pdf};

/// An optional external rich-rendering collaborator (e.g. an HTML-to-PDF
/// pipeline). Implementations receive the raw text plus the structured
/// document as template context and may fail freely; every failure is
/// recovered by the fallback renderer.
#[async_trait]
pub trait RichRenderer: Send + Sync {
    async fn render(&self, text: &str, doc: &ResumeDocument) -> Result<Bytes, RenderError>;
}

/// Renders `text` to PDF bytes, preferring `renderer` when one is supplied.
///
/// The only surfaced error is a lost fallback task; callers should treat it
/// as "serve the raw text instead". External-renderer failures never escape.
pub async fn render_resume(
    text: &str,
    renderer: Option<&dyn RichRenderer>,
) -> Result<Bytes, RenderError> {
    if let Some(renderer) = renderer {
        let doc = extract_resume_sections(text);
        match renderer.render(text, &doc).await {
            Ok(bytes) if !bytes.is_empty() => {
                debug!(bytes = bytes.len(), "external renderer produced output");
                return Ok(bytes);
            }
            Ok(_) => warn!("external renderer returned empty output, using fallback"),
            Err(e) => warn!("external renderer failed ({e}), using fallback"),
        }
    }

    let owned = text.to_string();
    let bytes = tokio::task::spawn_blocking(move || render_fallback_pdf(&owned))
        .await
        .map_err(|e| anyhow::anyhow!("fallback render task failed: {e}"))?;
    Ok(bytes)
}

/// The built-in pipeline: extract → layout → content stream → encode.
///
/// Total and deterministic: the same text always yields byte-identical
/// output, and even empty input produces a valid placeholder document.
pub fn render_fallback_pdf(text: &str) -> Bytes {
    let geometry = default_geometry();
    let doc = extract_resume_sections(text);
    let layout = layout_resume(&doc, &geometry);
    if layout.truncated {
        warn!("resume content truncated to fit a single page");
    }
    let stream = build_content_stream(&layout.commands, &geometry);
    encode_pdf(&stream)
}
