//! Text Layout Engine — turns a [`ResumeDocument`] into positioned draw
//! commands that fit one fixed-size page.
//!
//! The cursor starts near the top of the page and moves down by
//! `font_size + 5` after every drawn line. Sections render in a fixed order;
//! once the cursor drops below the minimum margin the rest of the body is
//! skipped and the result is marked truncated. Layout never fails; overflow
//! truncates instead.

use crate::layout::geometry::PageGeometry;
use crate::layout::sanitize::encode_text;
use crate::layout::wrap::wrap_line;
use crate::model::{DrawCommand, LayoutResult, ResumeDocument, Rgb};

/// Shown in gray under a section title when the section has no items.
const EMPTY_SECTION_TEXT: &str = "Not provided.";
/// Appended near the page bottom when content did not fit.
const TRUNCATION_NOTE: &str = "Some content was omitted to fit the single-page limit.";

/// Fixed section order: title, then the document field rendered under it.
fn sections(doc: &ResumeDocument) -> [(&'static str, Vec<&str>); 4] {
    let summary: Vec<&str> = if doc.summary.is_empty() {
        Vec::new()
    } else {
        vec![doc.summary.as_str()]
    };
    [
        ("Professional Summary", summary),
        ("Core Skills", doc.skills.iter().map(String::as_str).collect()),
        (
            "Experience",
            doc.experience.iter().map(String::as_str).collect(),
        ),
        (
            "Education",
            doc.education.iter().map(String::as_str).collect(),
        ),
    ]
}

/// Lays out `doc` on a single page described by `geo`.
pub fn layout_resume(doc: &ResumeDocument, geo: &PageGeometry) -> LayoutResult {
    let mut commands = Vec::new();
    let mut y = geo.cursor_start_y;
    let mut truncated = false;

    push_line(
        &mut commands,
        &mut y,
        &doc.name,
        geo.margin_x,
        geo.fonts.name,
        geo.palette.header_contrast,
    );
    if !doc.target_role.is_empty() {
        push_line(
            &mut commands,
            &mut y,
            &doc.target_role,
            geo.margin_x,
            geo.fonts.role,
            geo.palette.header_muted,
        );
    }

    'sections: for (title, items) in sections(doc) {
        y -= geo.section_gap;
        if y < geo.min_y {
            truncated = true;
            break;
        }
        push_line(
            &mut commands,
            &mut y,
            &title.to_uppercase(),
            geo.margin_x,
            geo.fonts.title,
            geo.palette.header,
        );

        if items.is_empty() {
            if y < geo.min_y {
                truncated = true;
                break;
            }
            push_line(
                &mut commands,
                &mut y,
                EMPTY_SECTION_TEXT,
                geo.margin_x,
                geo.fonts.body,
                geo.palette.muted,
            );
            continue;
        }

        for item in items {
            for (i, sub) in wrap_line(item, geo.wrap_width).iter().enumerate() {
                if y < geo.min_y {
                    truncated = true;
                    break 'sections;
                }
                let text = if i == 0 {
                    format!("- {sub}")
                } else {
                    format!("  {sub}")
                };
                push_line(
                    &mut commands,
                    &mut y,
                    &text,
                    geo.margin_x,
                    geo.fonts.body,
                    geo.palette.body,
                );
            }
        }
    }

    if y < geo.note_threshold_y {
        commands.push(DrawCommand {
            text: encode_text(TRUNCATION_NOTE),
            x: geo.margin_x,
            y: geo.note_y,
            font_size: geo.fonts.note,
            color: geo.palette.muted,
        });
    }

    LayoutResult {
        commands,
        truncated,
    }
}

/// Emits one encoded line at the cursor and advances it by `font_size + 5`.
fn push_line(
    commands: &mut Vec<DrawCommand>,
    y: &mut i32,
    text: &str,
    x: i32,
    font_size: u32,
    color: Rgb,
) {
    commands.push(DrawCommand {
        text: encode_text(text),
        x,
        y: *y,
        font_size,
        color,
    });
    *y -= font_size as i32 + 5;
}
