//! PDF Document Encoder — serializes a finished content stream into a
//! complete, spec-minimal single-page PDF.
//!
//! Five fixed objects (Catalog, Pages, Page, Contents, Font) are written in
//! one forward pass; each object's byte offset is recorded immediately
//! before it is emitted and nothing is mutated afterwards, so the
//! cross-reference table is exact. Output carries no timestamps: identical
//! input produces identical bytes.

use bytes::Bytes;

use crate::layout::geometry::{PAGE_HEIGHT, PAGE_WIDTH};

/// Number of real objects in the document (the xref also lists the fixed
/// free entry for object 0).
const OBJECT_COUNT: usize = 5;

/// Serializes `content_stream` into complete PDF bytes.
///
/// Total over all ASCII input; unencodable characters must have been
/// sanitized upstream by the layout engine.
pub fn encode_pdf(content_stream: &str) -> Bytes {
    let mut pdf: Vec<u8> = Vec::with_capacity(content_stream.len() + 1024);
    pdf.extend_from_slice(b"%PDF-1.4\n");
    // Conventional binary-marker comment line.
    pdf.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

    let bodies: [String; OBJECT_COUNT] = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>"
        ),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content_stream.len(),
            content_stream
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut offsets: Vec<usize> = Vec::with_capacity(OBJECT_COUNT);
    for (i, body) in bodies.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_start = pdf.len();
    pdf.extend_from_slice(b"xref\n");
    pdf.extend_from_slice(format!("0 {}\n", OBJECT_COUNT + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }

    pdf.extend_from_slice(b"trailer\n");
    pdf.extend_from_slice(format!("<< /Size {} /Root 1 0 R >>\n", OBJECT_COUNT + 1).as_bytes());
    pdf.extend_from_slice(b"startxref\n");
    pdf.extend_from_slice(format!("{xref_start}\n").as_bytes());
    pdf.extend_from_slice(b"%%EOF\n");

    Bytes::from(pdf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const STREAM: &str = "q\n0.13 0.23 0.34 rg\n18 740 576 52 re\nf\nQ\nBT\n/F1 20 Tf\n1.00 1.00 1.00 rg\n40 770 Td\n(Jane Doe) Tj\nET";

    /// Reads the decimal offset following `startxref`.
    fn startxref_offset(pdf: &[u8]) -> usize {
        let text = String::from_utf8_lossy(pdf);
        let tail = text
            .rsplit_once("startxref\n")
            .expect("startxref keyword missing")
            .1;
        tail.lines().next().unwrap().trim().parse().unwrap()
    }

    #[test]
    fn test_output_begins_with_pdf_header() {
        let pdf = encode_pdf(STREAM);
        assert!(pdf.starts_with(b"%PDF-1.4\n"));
        assert!(pdf.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_startxref_points_at_the_xref_keyword() {
        let pdf = encode_pdf(STREAM);
        let offset = startxref_offset(&pdf);
        assert_eq!(
            &pdf[offset..offset + 4],
            b"xref",
            "startxref must land exactly on the xref section"
        );
    }

    #[test]
    fn test_xref_offsets_land_on_their_objects() {
        let pdf = encode_pdf(STREAM);
        let xref_start = startxref_offset(&pdf);
        let table = String::from_utf8_lossy(&pdf[xref_start..]);
        let mut lines = table.lines();
        assert_eq!(lines.next(), Some("xref"));
        assert_eq!(lines.next(), Some("0 6"));
        assert_eq!(lines.next(), Some("0000000000 65535 f "));

        for object_number in 1..=5 {
            let row = lines.next().expect("xref row missing");
            let offset: usize = row[..10].parse().unwrap();
            assert_eq!(&row[10..], " 00000 n ");
            let expected = format!("{object_number} 0 obj\n");
            assert_eq!(
                &pdf[offset..offset + expected.len()],
                expected.as_bytes(),
                "offset for object {object_number} is wrong"
            );
        }
    }

    #[test]
    fn test_declared_length_matches_stream_body_exactly() {
        let pdf = encode_pdf(STREAM);
        let text = String::from_utf8_lossy(&pdf);
        let declared: usize = text
            .split_once("/Length ")
            .unwrap()
            .1
            .split_whitespace()
            .next()
            .unwrap()
            .parse()
            .unwrap();
        let body_start = text.find("stream\n").unwrap() + "stream\n".len();
        let body_end = text.find("\nendstream").unwrap();
        assert_eq!(declared, body_end - body_start);
        assert_eq!(declared, STREAM.len());
    }

    #[test]
    fn test_every_object_is_closed() {
        let pdf = encode_pdf(STREAM);
        let text = String::from_utf8_lossy(&pdf);
        assert_eq!(text.matches(" 0 obj\n").count(), 5);
        assert_eq!(text.matches("endobj").count(), 5);
        assert!(text.contains("trailer\n<< /Size 6 /Root 1 0 R >>"));
    }

    #[test]
    fn test_trailer_names_catalog_as_root() {
        let pdf = encode_pdf(STREAM);
        let text = String::from_utf8_lossy(&pdf);
        assert!(text.contains("/Root 1 0 R"));
        assert!(text.contains("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>"));
    }

    #[test]
    fn test_output_is_byte_identical_across_calls() {
        assert_eq!(encode_pdf(STREAM), encode_pdf(STREAM));
    }

    #[test]
    fn test_empty_stream_still_forms_a_document() {
        let pdf = encode_pdf("");
        assert!(pdf.starts_with(b"%PDF-1.4\n"));
        let offset = startxref_offset(&pdf);
        assert_eq!(&pdf[offset..offset + 4], b"xref");
        assert!(String::from_utf8_lossy(&pdf).contains("/Length 0 >>"));
    }

    #[test]
    fn test_document_survives_a_write_to_disk() {
        let pdf = encode_pdf(STREAM);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&pdf).unwrap();
        let read_back = std::fs::read(file.path()).unwrap();
        assert_eq!(read_back, pdf.as_ref());
    }
}
