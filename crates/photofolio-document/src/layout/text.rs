// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text encoding and metrics for the PDF base-14 Helvetica faces.
//
// Built-in fonts are declared with /WinAnsiEncoding and are not embedded, so
// text is written as Windows-1252 bytes and measured with the Adobe AFM
// advance widths (units of 1/1000 em) for those same bytes.

use encoding_rs::WINDOWS_1252;
use printpdf::BuiltinFont;

/// Substitute for characters WinAnsi cannot represent.
const REPLACEMENT: u8 = b'?';

/// Helvetica advance widths for WinAnsi codes 0x20..=0xFF.
///
/// Codes with no glyph in WinAnsi are zero; the encoder never emits them.
#[rustfmt::skip]
const HELVETICA: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,   // 0x70
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,     // 0x80
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,    // 0x90
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

/// Helvetica-Bold advance widths for WinAnsi codes 0x20..=0xFF.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,   // 0x70
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,     // 0x80
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,    // 0x90
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // 0xF0
];

/// Encode `text` as the WinAnsi bytes a built-in font is shown with.
///
/// Every character yields exactly one byte. Control characters and anything
/// outside Windows-1252 become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut buf = [0u8; 4];
    text.chars()
        .map(|ch| {
            if ch.is_control() {
                return REPLACEMENT;
            }
            let (bytes, _, unmappable) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
            match bytes.as_ref() {
                [byte] if !unmappable => *byte,
                _ => REPLACEMENT,
            }
        })
        .collect()
}

fn advance(table: &[u16; 224], byte: u8) -> u16 {
    match byte {
        0x20..=0xFF => table[usize::from(byte) - 0x20],
        _ => 0,
    }
}

/// Width of `text` set in `font` at `size` points, in points.
///
/// Only the two Helvetica weights used on album pages have their own
/// tables; other faces are measured as regular Helvetica.
pub fn text_width(text: &str, font: BuiltinFont, size: f32) -> f32 {
    let table = match font {
        BuiltinFont::HelveticaBold => &HELVETICA_BOLD,
        _ => &HELVETICA,
    };
    let units: u32 = encode_win_ansi(text)
        .into_iter()
        .map(|byte| u32::from(advance(table, byte)))
        .sum();
    units as f32 * size / 1000.0
}

/// Left edge that centres `text` on a line of `line_width` points.
pub fn centered_x(text: &str, font: BuiltinFont, size: f32, line_width: f32) -> f32 {
    (line_width - text_width(text, font, size)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_half_an_em_wide() {
        // Both weights share 556 for figures, so page labels measure alike.
        assert!((text_width("12", BuiltinFont::Helvetica, 20.0) - 22.24).abs() < 1e-4);
        assert!((text_width("12", BuiltinFont::HelveticaBold, 20.0) - 22.24).abs() < 1e-4);
    }

    #[test]
    fn bold_is_wider_for_lowercase() {
        let regular = text_width("album", BuiltinFont::Helvetica, 12.0);
        let bold = text_width("album", BuiltinFont::HelveticaBold, 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn umlauts_encode_to_single_latin1_bytes() {
        assert_eq!(encode_win_ansi("Über"), vec![0xDC, b'b', b'e', b'r']);
        assert_eq!(encode_win_ansi("Straße"), b"Stra\xDFe".to_vec());
    }

    #[test]
    fn windows_1252_punctuation_is_kept() {
        assert_eq!(encode_win_ansi("\u{201E}€\u{201C}"), vec![0x84, 0x80, 0x93]);
    }

    #[test]
    fn unencodable_and_control_characters_become_question_marks() {
        assert_eq!(encode_win_ansi("a\u{3042}b"), b"a?b".to_vec());
        assert_eq!(encode_win_ansi("x\ty\u{81}"), b"x?y?".to_vec());
    }

    #[test]
    fn latin1_letters_use_their_afm_widths() {
        // Udieresis 722, b 556, e 556, r 333.
        let width = text_width("Über", BuiltinFont::Helvetica, 10.0);
        assert!((width - 21.67).abs() < 1e-4);
        // germandbls is 611 in both weights.
        assert!((text_width("ß", BuiltinFont::HelveticaBold, 10.0) - 6.11).abs() < 1e-4);
    }

    #[test]
    fn replacement_is_measured_like_a_question_mark() {
        let substituted = text_width("\u{3042}", BuiltinFont::Helvetica, 12.0);
        assert_eq!(substituted, text_width("?", BuiltinFont::Helvetica, 12.0));
    }

    #[test]
    fn centred_text_has_equal_margins() {
        let line = 595.0;
        let x = centered_x("Image PDF", BuiltinFont::HelveticaBold, 24.0, line);
        let width = text_width("Image PDF", BuiltinFont::HelveticaBold, 24.0);
        assert!((x - (line - x - width)).abs() < 1e-3);
    }

    #[test]
    fn empty_text_centres_on_the_midline() {
        assert_eq!(centered_x("", BuiltinFont::Helvetica, 12.0, 100.0), 50.0);
    }
}
