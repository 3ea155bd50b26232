//! Text measurement and line breaking for the built-in Helvetica font.

use folio_render_core::utils::PT_PER_MM;

/// Helvetica advance widths in 1/1000 em, indexed by WinAnsi byte.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 256] = [
    278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
    278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 350,
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Width of WinAnsi-encoded `text` in millimetres at `font_size` points.
pub fn text_width_mm(text: &[u8], font_size: f32) -> f32 {
    let units: u32 = text
        .iter()
        .map(|&b| HELVETICA_WIDTHS[b as usize] as u32)
        .sum();
    units as f32 * font_size / 1000.0 / PT_PER_MM
}

/// Breaks `text` into lines no wider than `max_width` millimetres.
///
/// Explicit newlines always break. Lines break at spaces where possible; a
/// word wider than a whole line is split between characters. A split line
/// always takes at least one character, so a non-positive `max_width` yields
/// one character per line.
pub fn wrap_lines(text: &[u8], max_width: f32, font_size: f32) -> Vec<Vec<u8>> {
    let fits = |line: &[u8], extra: &[u8]| {
        text_width_mm(line, font_size) + text_width_mm(extra, font_size) <= max_width
    };

    let mut lines = Vec::new();
    for paragraph in text.split(|&b| b == b'\n') {
        let paragraph = paragraph.strip_suffix(b"\r").unwrap_or(paragraph);
        let mut line: Vec<u8> = Vec::new();

        for word in paragraph.split(|&b| b == b' ') {
            if !line.is_empty() {
                let mut spaced = Vec::with_capacity(word.len() + 1);
                spaced.push(b' ');
                spaced.extend_from_slice(word);
                if fits(&line, &spaced) {
                    line.extend_from_slice(&spaced);
                    continue;
                }
                lines.push(std::mem::take(&mut line));
            }

            if fits(&[], word) {
                line.extend_from_slice(word);
                continue;
            }
            for &b in word {
                if !line.is_empty() && !fits(&line, &[b]) {
                    lines.push(std::mem::take(&mut line));
                }
                line.push(b);
            }
        }
        lines.push(line);
    }
    lines
}
