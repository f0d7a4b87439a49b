//! Digit transliteration between ASCII and Devanagari numerals.

use crate::Language;

/// Devanagari numerals `०` to `९`, indexed by digit value
const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Replaces ASCII digits with Devanagari numerals. Every other character,
/// including separators and decimal points, is passed through unchanged.
///
/// # Example
///
/// ```
/// use bikram_sambat::to_devanagari_digits;
///
/// assert_eq!(to_devanagari_digits("12,34,567.89"), "१२,३४,५६७.८९");
/// ```
pub fn to_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => DEVANAGARI_DIGITS[digit as usize],
            None => c,
        })
        .collect()
}

/// Replaces Devanagari numerals with ASCII digits.
pub fn to_ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            DEVANAGARI_DIGITS
                .iter()
                .zip('0'..='9')
                .find_map(|(&devanagari, ascii)| (devanagari == c).then_some(ascii))
                .unwrap_or(c)
        })
        .collect()
}

/// Renders digits for `language`: Devanagari for Nepali, unchanged for English.
pub fn localize_digits(text: &str, language: Language) -> String {
    match language {
        Language::Nepali => to_devanagari_digits(text),
        Language::English => text.to_owned(),
    }
}
