//! Content-stream rendering: the header band plus one `BT..ET` text block
//! per draw command, newline-joined.

use crate::layout::geometry::PageGeometry;
use crate::model::{DrawCommand, Rgb};

/// Renders `commands` into the page's content-stream instruction text.
///
/// The band rectangle is painted first so every text line draws on top of
/// it. Command text is embedded verbatim; it was escaped upstream.
pub fn build_content_stream(commands: &[DrawCommand], geo: &PageGeometry) -> String {
    let mut stream = String::new();

    let band = &geo.band;
    stream.push_str("q\n");
    push_fill_color(&mut stream, geo.palette.header);
    stream.push_str(&format!(
        "{} {} {} {} re\n",
        band.x, band.y, band.width, band.height
    ));
    stream.push_str("f\nQ");

    for cmd in commands {
        stream.push_str("\nBT\n");
        stream.push_str(&format!("/F1 {} Tf\n", cmd.font_size));
        push_fill_color(&mut stream, cmd.color);
        stream.push_str(&format!("{} {} Td\n", cmd.x, cmd.y));
        stream.push_str(&format!("({}) Tj\n", cmd.text));
        stream.push_str("ET");
    }
    stream
}

fn push_fill_color(stream: &mut String, color: Rgb) {
    stream.push_str(&format!(
        "{:.2} {:.2} {:.2} rg\n",
        color.r, color.g, color.b
    ));
}
