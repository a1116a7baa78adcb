use serde::{Deserialize, Serialize};

/// An RGB color with components in `[0, 1]`, matching the content-stream
/// `rg` operator's operand range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// One positioned, styled text-paint instruction for page rendering.
///
/// `text` is already sanitized and escaped for embedding in a PDF string
/// literal; the encoder never re-inspects it. Coordinates are page units
/// with the origin at the bottom-left of a 612x792 page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font_size: u32,
    pub color: Rgb,
}

/// Output of a single layout run. Produced fresh per render call; pure data.
///
/// `truncated` is set the moment the vertical cursor drops below the page's
/// minimum margin and body emission stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult {
    pub commands: Vec<DrawCommand>,
    pub truncated: bool,
}
