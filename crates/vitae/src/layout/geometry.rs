//! Page geometry and color constants — the single configuration table for
//! everything the layout engine and content-stream builder position or tint.
//!
//! All coordinates are page units on a US-letter page (612×792), origin at
//! the bottom-left. Content is drawn top-down from `cursor_start_y`; body
//! emission stops below `min_y`, and a truncation note is added whenever the
//! final cursor lands under `note_threshold_y`.

use serde::{Deserialize, Serialize};

use crate::model::Rgb;

pub const PAGE_WIDTH: i32 = 612;
pub const PAGE_HEIGHT: i32 = 792;

/// The filled banner behind the name and target role at the top of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderBand {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Fixed palette. `header` doubles as the band fill and the section-title
/// color; the contrast pair sits on the band itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub header: Rgb,
    pub header_contrast: Rgb,
    pub header_muted: Rgb,
    pub body: Rgb,
    pub muted: Rgb,
}

/// Font sizes per line role. Every drawn line advances the cursor by its
/// font size plus 5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontSizes {
    pub name: u32,
    pub role: u32,
    pub title: u32,
    pub body: u32,
    pub note: u32,
}

/// Layout parameters for the single resume page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width: i32,
    pub page_height: i32,
    /// Left edge of all text lines.
    pub margin_x: i32,
    /// Baseline of the first drawn line (the name).
    pub cursor_start_y: i32,
    /// Body lines are never drawn below this baseline.
    pub min_y: i32,
    /// A final cursor under this value triggers the omission note.
    pub note_threshold_y: i32,
    /// Fixed baseline of the omission note, under `min_y`.
    pub note_y: i32,
    /// Word-wrap width for body text, in characters.
    pub wrap_width: usize,
    /// Extra vertical gap inserted before each section title. Keeps titles
    /// clear of the header band when the target-role line is absent.
    pub section_gap: i32,
    pub band: HeaderBand,
    pub palette: Palette,
    pub fonts: FontSizes,
}

/// Returns the default page geometry: US letter, 40-unit side margin,
/// 88-character body wrap, dark slate header.
pub fn default_geometry() -> PageGeometry {
    PageGeometry {
        page_width: PAGE_WIDTH,
        page_height: PAGE_HEIGHT,
        margin_x: 40,
        cursor_start_y: 770,
        min_y: 80,
        note_threshold_y: 120,
        note_y: 64,
        wrap_width: 88,
        section_gap: 10,
        band: HeaderBand {
            x: 18,
            y: 740,
            width: 576,
            height: 52,
        },
        palette: Palette {
            header: Rgb::new(0.13, 0.23, 0.34),
            header_contrast: Rgb::new(1.0, 1.0, 1.0),
            header_muted: Rgb::new(0.85, 0.89, 0.95),
            body: Rgb::new(0.15, 0.15, 0.15),
            muted: Rgb::new(0.55, 0.55, 0.55),
        },
        fonts: FontSizes {
            name: 20,
            role: 11,
            title: 10,
            body: 10,
            note: 8,
        },
    }
}
