//! Text safety for the PDF content stream.
//!
//! The built-in font covers a single-byte Latin character set, so drawn text
//! is reduced to printable ASCII: tabs expand, carriage returns vanish,
//! common typographic punctuation is approximated, and everything else is
//! NFKD-decomposed to its ASCII base characters or dropped. Escaping then
//! makes the result safe inside a PDF string literal.

use unicode_normalization::UnicodeNormalization;

/// Transliterates `text` to printable ASCII.
///
/// Characters with no usable equivalent are dropped, never an error.
pub fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push_str("    "),
            '\u{00A0}' => out.push(' '),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2010}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => out.push('-'),
            '\u{2022}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            c if c.is_ascii_control() => {} // includes '\r'
            c if c.is_ascii() => out.push(c),
            c => {
                for d in c.nfkd() {
                    if d.is_ascii() && !d.is_ascii_control() {
                        out.push(d);
                    }
                }
            }
        }
    }
    out
}

/// Escapes the characters with special meaning inside a PDF string literal.
pub fn escape_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            c => out.push(c),
        }
    }
    out
}

/// Sanitize-then-escape, the full encoding applied to every drawn line.
pub fn encode_text(text: &str) -> String {
    escape_pdf_text(&sanitize_text(text))
}
