// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph metrics for the standard Times faces, plus the text clean-up that
// keeps drawn strings inside the fonts' single-byte encoding.

use darrow_core::error::{DarrowError, Result};
use printpdf::BuiltinFont;

/// Advance widths (1/1000 em) for Times-Roman, codes 32..=126.
#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

/// Advance widths (1/1000 em) for Times-Bold, codes 32..=126.
#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

/// Width used for anything outside the ASCII table.
const FALLBACK_WIDTH: u16 = 500;

/// Width of `text` in points when set in `font` at `size` points.
///
/// Only the two Times faces are measured; any other builtin font is treated
/// as Times-Roman.
pub fn text_width(text: &str, font: BuiltinFont, size: f32) -> f32 {
    let table = match font {
        BuiltinFont::TimesBold => &TIMES_BOLD,
        _ => &TIMES_ROMAN,
    };
    let units: u32 = text
        .chars()
        .map(|ch| match ch as u32 {
            code @ 32..=126 => u32::from(table[(code - 32) as usize]),
            _ => u32::from(FALLBACK_WIDTH),
        })
        .sum();
    units as f32 * size / 1000.0
}

/// Reduce `text` to the printable ASCII the standard fonts are drawn with.
///
/// Typographic punctuation and Latin-1 letters and symbols are spelled out
/// in ASCII; `\r\n` becomes `\n` and line breaks are kept. Anything else is
/// rejected rather than drawn as mojibake.
pub fn normalize_for_pdf(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push('\n'),
            '\t' => out.push(' '),
            ' '..='~' => out.push(ch),
            c if c.is_control() => {}
            c => match ascii_spelling(c) {
                Some(spelled) => out.push_str(spelled),
                None => return Err(DarrowError::UnencodableText(c)),
            },
        }
    }
    Ok(out)
}

/// ASCII stand-in for a non-ASCII character, if there is a sensible one.
#[rustfmt::skip]
fn ascii_spelling(ch: char) -> Option<&'static str> {
    let spelled = match ch {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' | '\u{00AB}' | '\u{00BB}' => "\"",
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2212}' => "-",
        '\u{2014}' | '\u{2015}' => "--",
        '\u{2026}' => "...",
        '\u{2022}' | '\u{00B7}' => "*",
        '\u{00A0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' | '\u{202F}' => " ",
        '\u{200B}' | '\u{FEFF}' | '\u{00AD}' => "",

        '§' => "Sec.", '¶' => "Para.",
        '©' => "(c)", '®' => "(R)", '™' => "(TM)",
        '°' => " deg", '±' => "+/-", '×' => "x", '÷' => "/",
        '¼' => "1/4", '½' => "1/2", '¾' => "3/4",
        '¹' => "1", '²' => "2", '³' => "3", 'ª' => "a", 'º' => "o",
        '¢' => "c", '£' => "GBP", '¥' => "JPY", '€' => "EUR",
        '¡' => "!", '¿' => "?", '¦' => "|", '¬' => "-", 'µ' => "u",

        'À'..='Å' => "A", 'Æ' => "AE", 'Ç' => "C", 'È'..='Ë' => "E",
        'Ì'..='Ï' => "I", 'Ð' => "D", 'Ñ' => "N", 'Ò'..='Ö' | 'Ø' => "O",
        'Ù'..='Ü' => "U", 'Ý' => "Y", 'Þ' => "Th", 'ß' => "ss",
        'à'..='å' => "a", 'æ' => "ae", 'ç' => "c", 'è'..='ë' => "e",
        'ì'..='ï' => "i", 'ð' => "d", 'ñ' => "n", 'ò'..='ö' | 'ø' => "o",
        'ù'..='ü' => "u", 'ý' | 'ÿ' => "y", 'þ' => "th",
        _ => return None,
    };
    Some(spelled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_and_letters_match_afm() {
        assert_eq!(text_width(" ", BuiltinFont::TimesRoman, 1000.0), 250.0);
        assert_eq!(text_width("W", BuiltinFont::TimesRoman, 1000.0), 944.0);
        assert_eq!(text_width("W", BuiltinFont::TimesBold, 1000.0), 1000.0);
    }

    #[test]
    fn width_scales_with_size() {
        let at_12 = text_width("Agreement", BuiltinFont::TimesRoman, 12.0);
        let at_24 = text_width("Agreement", BuiltinFont::TimesRoman, 24.0);
        assert!((at_24 - 2.0 * at_12).abs() < 0.001);
    }

    #[test]
    fn bold_is_wider_than_roman() {
        let text = "CERTIFICATE OF INCORPORATION";
        assert!(
            text_width(text, BuiltinFont::TimesBold, 12.0)
                > text_width(text, BuiltinFont::TimesRoman, 12.0)
        );
    }

    #[test]
    fn typographic_punctuation_is_flattened() {
        let out = normalize_for_pdf("\u{201C}Company\u{201D} \u{2014} it\u{2019}s\u{2026}").unwrap();
        assert_eq!(out, "\"Company\" -- it's...");
    }

    #[test]
    fn latin1_is_spelled_in_ascii() {
        assert_eq!(
            normalize_for_pdf("Société Générale § 5 naïve, 50 €").unwrap(),
            "Societe Generale Sec. 5 naive, 50 EUR"
        );
    }

    #[test]
    fn output_is_printable_ascii() {
        let out = normalize_for_pdf("Ærø ½ © Straße\u{00A0}\u{00AD}x").unwrap();
        assert_eq!(out, "AEro 1/2 (c) Strasse x");
        assert!(out.chars().all(|c| c == '\n' || (' '..='~').contains(&c)));
    }

    #[test]
    fn line_breaks_survive() {
        assert_eq!(
            normalize_for_pdf("ARTICLE FIRST: NAME\r\n\r\nThis corporation\tshall exist.").unwrap(),
            "ARTICLE FIRST: NAME\n\nThis corporation shall exist."
        );
    }

    #[test]
    fn characters_without_spelling_are_rejected() {
        let err = normalize_for_pdf("Holdings \u{4E2D}\u{6587}").unwrap_err();
        assert!(matches!(err, DarrowError::UnencodableText('\u{4E2D}')));
    }
}
