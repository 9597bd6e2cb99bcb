//! Minimal single-font PDF writer.
//!
//! Lays plain text out on A4 pages with the built-in Helvetica font, one
//! wrapped paragraph per input line. Geometry is kept in millimetres and only
//! converted to points when the content streams are written.

use std::fmt::Write as _;

/// Points per millimetre
const PT_PER_MM: f64 = 72.0 / 25.4;

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Helvetica advance widths for WinAnsi 128..=255; unassigned slots use the bullet width
const HELVETICA_HIGH_WIDTHS: [u16; 128] = [
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350, // 0x80
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

/// Width used for control bytes, which the encoder never emits
const DEFAULT_WIDTH: u16 = 556;

/// Page geometry, in millimetres unless noted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    /// Distance from the bottom edge that triggers a page break
    pub margin_bottom: f64,
    /// Inner padding on both sides of each line
    pub cell_padding: f64,
    pub line_height: f64,
    /// In points
    pub font_size: f64,
}

impl Default for PdfLayout {
    /// A4 portrait, Helvetica 12pt, 8 mm lines
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin_left: 10.0,
            margin_right: 10.0,
            margin_top: 10.0,
            margin_bottom: 15.0,
            cell_padding: 1.0,
            line_height: 8.0,
            font_size: 12.0,
        }
    }
}

impl PdfLayout {
    fn text_width(&self) -> f64 {
        self.page_width - self.margin_left - self.margin_right - 2.0 * self.cell_padding
    }

    fn font_size_mm(&self) -> f64 {
        self.font_size / PT_PER_MM
    }

    fn page_break_trigger(&self) -> f64 {
        self.page_height - self.margin_bottom
    }
}

#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Characters with no WinAnsi encoding, left out of the document
    pub dropped_chars: usize,
}

/// Render text into a PDF document
pub fn render_pdf(text: &str, layout: &PdfLayout) -> RenderedPdf {
    let mut dropped_chars = 0;
    let mut lines: Vec<Vec<u8>> = Vec::new();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (encoded, dropped) = encode_win_ansi(line);
        dropped_chars += dropped;
        lines.extend(wrap_line(&encoded, layout.text_width(), layout.font_size_mm()));
    }

    let pages = paginate(&lines, layout);
    let bytes = write_document(&pages, layout);

    RenderedPdf {
        bytes,
        page_count: pages.len(),
        dropped_chars,
    }
}

/// Encode a string as WinAnsi bytes, dropping what cannot be represented
fn encode_win_ansi(text: &str) -> (Vec<u8>, usize) {
    let mut bytes = Vec::with_capacity(text.len());
    let mut dropped = 0;

    for c in text.chars() {
        match win_ansi_byte(c) {
            Some(b) => bytes.push(b),
            None => dropped += 1,
        }
    }

    (bytes, dropped)
}

fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match c {
        '\t' => Some(b' '),
        ' '..='~' => Some(code as u8),
        '\u{A0}'..='\u{FF}' => Some(code as u8),
        '€' => Some(0x80),
        '‚' => Some(0x82),
        'ƒ' => Some(0x83),
        '„' => Some(0x84),
        '…' => Some(0x85),
        '†' => Some(0x86),
        '‡' => Some(0x87),
        'ˆ' => Some(0x88),
        '‰' => Some(0x89),
        'Š' => Some(0x8A),
        '‹' => Some(0x8B),
        'Œ' => Some(0x8C),
        'Ž' => Some(0x8E),
        '‘' => Some(0x91),
        '’' => Some(0x92),
        '“' => Some(0x93),
        '”' => Some(0x94),
        '•' => Some(0x95),
        '–' => Some(0x96),
        '—' => Some(0x97),
        '˜' => Some(0x98),
        '™' => Some(0x99),
        'š' => Some(0x9A),
        '›' => Some(0x9B),
        'œ' => Some(0x9C),
        'ž' => Some(0x9E),
        'Ÿ' => Some(0x9F),
        _ => None,
    }
}

fn char_width(byte: u8) -> u16 {
    match byte {
        32..=126 => HELVETICA_WIDTHS[(byte - 32) as usize],
        128..=255 => HELVETICA_HIGH_WIDTHS[(byte - 128) as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Width of encoded text in millimetres
fn string_width(bytes: &[u8], font_size_mm: f64) -> f64 {
    let units: u32 = bytes.iter().map(|b| char_width(*b) as u32).sum();
    units as f64 * font_size_mm / 1000.0
}

/// Greedy wrap at spaces; words wider than a line are split between characters.
/// An empty input still yields one (blank) line.
fn wrap_line(line: &[u8], max_width: f64, font_size_mm: f64) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    let mut last_space: Option<usize> = None;
    let mut width = 0.0;

    while i < line.len() {
        let byte = line[i];
        if byte == b' ' {
            last_space = Some(i);
        }
        width += char_width(byte) as f64 * font_size_mm / 1000.0;

        if width > max_width {
            match last_space {
                Some(space) if space > start => {
                    out.push(line[start..space].to_vec());
                    i = space + 1;
                }
                _ => {
                    // A single glyph wider than the line still has to go somewhere
                    let end = if i == start { i + 1 } else { i };
                    out.push(line[start..end].to_vec());
                    i = end;
                }
            }
            start = i;
            last_space = None;
            width = 0.0;
            continue;
        }

        i += 1;
    }

    if start < line.len() || out.is_empty() {
        out.push(line[start..].to_vec());
    }

    out
}

/// A line of text positioned on a page, top-left origin in millimetres
struct PlacedLine<'a> {
    y_top: f64,
    bytes: &'a [u8],
}

fn paginate<'a>(lines: &'a [Vec<u8>], layout: &PdfLayout) -> Vec<Vec<PlacedLine<'a>>> {
    let mut pages: Vec<Vec<PlacedLine<'a>>> = vec![Vec::new()];
    let mut y = layout.margin_top;

    for line in lines {
        if y + layout.line_height > layout.page_break_trigger() {
            pages.push(Vec::new());
            y = layout.margin_top;
        }
        if let Some(page) = pages.last_mut() {
            page.push(PlacedLine { y_top: y, bytes: line });
        }
        y += layout.line_height;
    }

    pages
}

fn content_stream(lines: &[PlacedLine<'_>], layout: &PdfLayout) -> Vec<u8> {
    let x = (layout.margin_left + layout.cell_padding) * PT_PER_MM;
    let mut stream = Vec::new();

    for line in lines.iter().filter(|line| !line.bytes.is_empty()) {
        let baseline = line.y_top + 0.5 * layout.line_height + 0.3 * layout.font_size_mm();
        let y = (layout.page_height - baseline) * PT_PER_MM;

        stream.extend_from_slice(
            format!("BT /F1 {:.2} Tf {:.2} {:.2} Td (", layout.font_size, x, y).as_bytes(),
        );
        escape_string(line.bytes, &mut stream);
        stream.extend_from_slice(b") Tj ET\n");
    }

    stream
}

/// Escape bytes for a PDF literal string, keeping the output 7-bit clean
fn escape_string(bytes: &[u8], out: &mut Vec<u8>) {
    for &b in bytes {
        match b {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(b);
            }
            0x20..=0x7E => out.push(b),
            _ => out.extend_from_slice(format!("\\{:03o}", b).as_bytes()),
        }
    }
}

fn write_document(pages: &[Vec<PlacedLine<'_>>], layout: &PdfLayout) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    // 1: catalog, 2: page tree, 3: font, then a page + content pair per page
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 4 + 2 * i).collect();
    let kids = page_ids
        .iter()
        .fold(String::new(), |mut acc, id| {
            let _ = write!(acc, "{} 0 R ", id);
            acc
        });

    push_object(&mut buf, &mut offsets, b"<< /Type /Catalog /Pages 2 0 R >>");
    push_object(
        &mut buf,
        &mut offsets,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.trim_end(),
            pages.len()
        )
        .as_bytes(),
    );
    push_object(
        &mut buf,
        &mut offsets,
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );

    let media_box = format!(
        "[0 0 {:.2} {:.2}]",
        layout.page_width * PT_PER_MM,
        layout.page_height * PT_PER_MM
    );

    for (page, page_id) in pages.iter().zip(&page_ids) {
        push_object(
            &mut buf,
            &mut offsets,
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox {} /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                media_box,
                page_id + 1
            )
            .as_bytes(),
        );

        let stream = content_stream(page, layout);
        let mut body = format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
        body.extend_from_slice(&stream);
        body.extend_from_slice(b"\nendstream");
        push_object(&mut buf, &mut offsets, &body);
    }

    let xref_offset = buf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1);
    for offset in &offsets {
        let _ = writeln!(xref, "{:010} 00000 n ", offset);
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        offsets.len() + 1,
        xref_offset
    );
    buf.extend_from_slice(xref.as_bytes());

    buf
}

/// Append the next numbered object, recording its byte offset for the xref table
fn push_object(buf: &mut Vec<u8>, offsets: &mut Vec<usize>, body: &[u8]) {
    offsets.push(buf.len());
    let id = offsets.len();
    buf.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
    buf.extend_from_slice(body);
    buf.extend_from_slice(b"\nendobj\n");
}
