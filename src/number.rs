//! Nepali number formatting: South-Asian digit grouping, monetary amounts and
//! numbers in words.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{Language, default_language, localize_digits, to_ascii_digits};

/// Error type for number formatting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberFormatError {
    /// Input is not a plain non-negative decimal number.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Integer part has more groups than there are scale words.
    #[error("Number with {digits} integer digits is too large to write in words")]
    TooLargeForWords { digits: usize },
}

/// A number accepted by [`NepaliNumberFormat::format`].
///
/// The variant decides the default precision: integers render without
/// decimals, everything else with two.
#[derive(Debug, Clone, PartialEq, From)]
pub enum NumberInput {
    Integer(i128),
    Decimal(f64),
    /// Decimal text; Devanagari digits are accepted.
    DecimalString(String),
}

macro_rules! integer_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NumberInput {
                fn from(value: $ty) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f32> for NumberInput {
    fn from(value: f32) -> Self {
        Self::Decimal(f64::from(value))
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        Self::DecimalString(value.to_owned())
    }
}

impl NumberInput {
    const fn default_decimal_digits(&self) -> usize {
        match self {
            Self::Integer(_) => 0,
            Self::Decimal(_) | Self::DecimalString(_) => 2,
        }
    }
}

impl fmt::Display for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::DecimalString(value) => f.write_str(&to_ascii_digits(value)),
        }
    }
}

/// Localized words used when spelling numbers out.
struct NumberWords {
    hundred: &'static str,
    /// Scale of each group above the units group: 10^3, 10^5, ... 10^17
    scales: [&'static str; 8],
    point: &'static str,
    rupees: &'static str,
    paisa: &'static str,
}

const ENGLISH_WORDS: NumberWords = NumberWords {
    hundred: "hundred",
    scales: [
        "thousand", "lakh", "crore", "arab", "kharab", "nil", "padam", "sankha",
    ],
    point: "point",
    rupees: "rupees",
    paisa: "paisa",
};

const NEPALI_WORDS: NumberWords = NumberWords {
    hundred: "सय",
    scales: ["हजार", "लाख", "करोड", "अरब", "खरब", "नील", "पद्म", "शंख"],
    point: "दशमलव",
    rupees: "रुपैयाँ",
    paisa: "पैसा",
};

const fn words_for(language: Language) -> &'static NumberWords {
    match language {
        Language::Nepali => &NEPALI_WORDS,
        Language::English => &ENGLISH_WORDS,
    }
}

/// Number formatter configuration.
///
/// The language is captured from [`default_language`] when the formatter is
/// built; changing the default afterwards does not affect it.
///
/// # Example
///
/// ```
/// use bikram_sambat::{Language, NepaliNumberFormat};
///
/// let format = NepaliNumberFormat::new()
///     .with_language(Language::English)
///     .with_decimal_digits(2);
///
/// assert_eq!(format.format(123456789.6548).unwrap(), "12,34,56,789.65");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NepaliNumberFormat {
    in_words: bool,
    #[serde(alias = "is_monetory")]
    monetary: bool,
    decimal_digits: Option<usize>,
    symbol: Option<String>,
    symbol_on_left: bool,
    hide_comma: bool,
    space_between_amount_and_symbol: bool,
    include_decimal_if_zero: bool,
    language: Language,
}

impl Default for NepaliNumberFormat {
    fn default() -> Self {
        Self {
            in_words: false,
            monetary: false,
            decimal_digits: None,
            symbol: None,
            symbol_on_left: true,
            hide_comma: false,
            space_between_amount_and_symbol: true,
            include_decimal_if_zero: true,
            language: default_language(),
        }
    }
}

impl NepaliNumberFormat {
    /// Creates a formatter with default options in the current default language.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spells the number out in words instead of grouped digits.
    pub const fn with_in_words(mut self, in_words: bool) -> Self {
        self.in_words = in_words;
        self
    }

    /// Renders the number as an amount of rupees and paisa.
    pub const fn with_monetary(mut self, monetary: bool) -> Self {
        self.monetary = monetary;
        self
    }

    /// Sets the number of fraction digits kept.
    pub const fn with_decimal_digits(mut self, decimal_digits: usize) -> Self {
        self.decimal_digits = Some(decimal_digits);
        self
    }

    /// Sets a currency symbol placed next to the amount.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub const fn with_symbol_on_left(mut self, symbol_on_left: bool) -> Self {
        self.symbol_on_left = symbol_on_left;
        self
    }

    pub const fn with_hide_comma(mut self, hide_comma: bool) -> Self {
        self.hide_comma = hide_comma;
        self
    }

    pub const fn with_space_between_amount_and_symbol(mut self, space: bool) -> Self {
        self.space_between_amount_and_symbol = space;
        self
    }

    /// Keeps an all-zero fraction (`57.00`) instead of dropping it (`57`).
    pub const fn with_include_decimal_if_zero(mut self, include: bool) -> Self {
        self.include_decimal_if_zero = include;
        self
    }

    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub const fn in_words(&self) -> bool {
        self.in_words
    }

    pub const fn monetary(&self) -> bool {
        self.monetary
    }

    pub const fn decimal_digits(&self) -> Option<usize> {
        self.decimal_digits
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Formats a number.
    ///
    /// # Errors
    /// Returns `NumberFormatError::InvalidNumber` if the input is not a plain
    /// non-negative decimal number, and `NumberFormatError::TooLargeForWords`
    /// if it is too large to spell out.
    pub fn format(&self, number: impl Into<NumberInput>) -> Result<String, NumberFormatError> {
        let number = number.into();
        let decimal_digits = self
            .decimal_digits
            .unwrap_or_else(|| number.default_decimal_digits());
        let text = number.to_string();
        let (integer, fraction) = split_number(&text)?;
        let fraction = fit_fraction(fraction, decimal_digits);
        let fraction = (!fraction.is_empty()
            && (self.include_decimal_if_zero || fraction.bytes().any(|b| b != b'0')))
        .then_some(fraction.as_str());

        let amount = if self.in_words {
            self.spell(integer, fraction)?
        } else {
            self.group(integer, fraction)
        };
        let amount = localize_digits(amount.trim_end(), self.language);
        Ok(self.place_symbol(amount))
    }

    /// Formats an optional number; an absent number renders as an empty string.
    ///
    /// # Errors
    /// See [`NepaliNumberFormat::format`].
    pub fn format_opt<N: Into<NumberInput>>(
        &self,
        number: Option<N>,
    ) -> Result<String, NumberFormatError> {
        number.map_or_else(|| Ok(String::new()), |number| self.format(number))
    }

    fn group(&self, integer: &str, fraction: Option<&str>) -> String {
        let integer = if self.hide_comma {
            integer.to_owned()
        } else {
            lakh_groups(integer).join(",")
        };
        let words = words_for(self.language);
        match (self.monetary, fraction) {
            (false, None) => integer,
            (false, Some(fraction)) => format!("{integer}.{fraction}"),
            (true, None) => format!("{integer} {}", words.rupees),
            (true, Some(fraction)) => {
                format!("{integer} {} {fraction} {}", words.rupees, words.paisa)
            }
        }
    }

    fn spell(&self, integer: &str, fraction: Option<&str>) -> Result<String, NumberFormatError> {
        let words = words_for(self.language);
        let groups = lakh_groups(integer);
        if groups.len() > words.scales.len() + 1 {
            return Err(NumberFormatError::TooLargeForWords {
                digits: integer.len(),
            });
        }

        let mut parts = Vec::with_capacity(groups.len());
        for (index, group) in groups.iter().rev().enumerate() {
            if group.bytes().all(|b| b == b'0') {
                continue;
            }
            if index == 0 {
                parts.push(spell_units(group, words.hundred));
            } else {
                parts.push(format!(
                    "{} {}",
                    strip_leading_zeros(group),
                    words.scales[index - 1]
                ));
            }
        }
        parts.reverse();
        let mut spelled = if parts.is_empty() {
            "0".to_owned()
        } else {
            parts.join(" ")
        };

        let fraction = fraction.map(strip_leading_zeros);
        match (self.monetary, fraction) {
            (false, None) => {}
            (false, Some(fraction)) => {
                spelled = format!("{spelled} {} {fraction}", words.point);
            }
            (true, None) => spelled = format!("{spelled} {}", words.rupees),
            (true, Some(fraction)) => {
                spelled = format!("{spelled} {} {fraction} {}", words.rupees, words.paisa);
            }
        }
        Ok(spelled)
    }

    fn place_symbol(&self, amount: String) -> String {
        let Some(symbol) = &self.symbol else {
            return amount;
        };
        let space = if self.space_between_amount_and_symbol {
            " "
        } else {
            ""
        };
        if self.symbol_on_left {
            format!("{symbol}{space}{amount}")
        } else {
            format!("{amount}{space}{symbol}")
        }
    }
}

/// Splits decimal text into integer and fraction digits. The integer part has
/// its leading zeros removed (an empty integer part reads as `0`).
fn split_number(text: &str) -> Result<(&str, &str), NumberFormatError> {
    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(integer) || !is_digits(fraction) || (integer.is_empty() && fraction.is_empty())
    {
        tracing::debug!(input = text, "rejected non-numeric input");
        return Err(NumberFormatError::InvalidNumber(text.to_owned()));
    }
    Ok((strip_leading_zeros(integer), fraction))
}

/// Right-pads or truncates fraction digits to exactly `digits` characters.
fn fit_fraction(fraction: &str, digits: usize) -> String {
    fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(digits)
        .collect()
}

fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}

/// Splits ASCII digits into South-Asian groups, most significant first: the
/// last three digits, then pairs (`123456789` -> `12`, `34`, `56`, `789`).
fn lakh_groups(integer: &str) -> Vec<&str> {
    if integer.len() <= 3 {
        return vec![integer];
    }
    let (head, units) = integer.split_at(integer.len() - 3);
    let mut groups = Vec::with_capacity(head.len() / 2 + 2);
    let mut start = head.len() % 2;
    if start == 1 {
        groups.push(&head[..1]);
    }
    while start < head.len() {
        groups.push(&head[start..start + 2]);
        start += 2;
    }
    groups.push(units);
    groups
}

/// Spells the units group: `<d> hundred <rest>` for three digits, else the
/// bare number.
fn spell_units(group: &str, hundred: &str) -> String {
    if group.len() != 3 {
        return strip_leading_zeros(group).to_owned();
    }
    let (first, rest) = group.split_at(1);
    let mut parts = Vec::with_capacity(3);
    if first != "0" {
        parts.push(first);
        parts.push(hundred);
    }
    if rest != "00" {
        parts.push(strip_leading_zeros(rest));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> NepaliNumberFormat {
        NepaliNumberFormat::new().with_language(Language::English)
    }

    fn nepali() -> NepaliNumberFormat {
        NepaliNumberFormat::new().with_language(Language::Nepali)
    }

    #[test]
    fn test_decimal_defaults() {
        let format = english().with_decimal_digits(2);
        assert_eq!(format.format(57.0).unwrap(), "57.00");
        assert_eq!(format.format(123456789.6548).unwrap(), "12,34,56,789.65");
    }

    #[test]
    fn test_default_precision_follows_input_type() {
        let format = english();
        assert_eq!(format.format(1234).unwrap(), "1,234");
        assert_eq!(format.format(1234.5).unwrap(), "1,234.50");
        assert_eq!(format.format("1234.5").unwrap(), "1,234.50");
        assert_eq!(format.format(1234u64).unwrap(), "1,234");
    }

    #[test]
    fn test_lakh_grouping() {
        let format = english();
        let cases = [
            (0, "0"),
            (7, "7"),
            (123, "123"),
            (1234, "1,234"),
            (12345, "12,345"),
            (123456, "1,23,456"),
            (1234567, "12,34,567"),
            (12345678, "1,23,45,678"),
            (123456789, "12,34,56,789"),
        ];
        for (number, expected) in cases {
            assert_eq!(format.format(number).unwrap(), expected, "{number}");
        }
    }

    #[test]
    fn test_leading_zeros_are_dropped() {
        let format = english();
        assert_eq!(format.format("0012").unwrap(), "12.00");
        assert_eq!(format.format(".5").unwrap(), "0.50");
    }

    #[test]
    fn test_hide_comma() {
        let format = english().with_hide_comma(true);
        assert_eq!(format.format(123456789).unwrap(), "123456789");
        assert_eq!(format.format(1234.5).unwrap(), "1234.50");
    }

    #[test]
    fn test_zero_fraction_suppression() {
        let format = english()
            .with_decimal_digits(2)
            .with_include_decimal_if_zero(false);
        assert_eq!(format.format(123.001).unwrap(), "123");
        assert_eq!(format.format(57.0).unwrap(), "57");
        assert_eq!(format.format(57.5).unwrap(), "57.50");
    }

    #[test]
    fn test_fraction_is_truncated_not_rounded() {
        let format = english().with_decimal_digits(2);
        assert_eq!(format.format(0.999).unwrap(), "0.99");
        assert_eq!(format.format("1.005").unwrap(), "1.00");

        let format = english().with_decimal_digits(4);
        assert_eq!(format.format(1.5).unwrap(), "1.5000");
    }

    #[test]
    fn test_nepali_digits() {
        let format = nepali().with_decimal_digits(2);
        assert_eq!(format.format(123456789.6548).unwrap(), "१२,३४,५६,७८९.६५");
        assert_eq!(format.format("१२३४").unwrap(), "१,२३४.००");
    }

    #[test]
    fn test_monetary_digits() {
        let format = english().with_monetary(true);
        assert_eq!(format.format(1234).unwrap(), "1,234 rupees");
        assert_eq!(format.format(1234.5).unwrap(), "1,234 rupees 50 paisa");
    }

    #[test]
    fn test_words_english() {
        let format = english().with_in_words(true).with_decimal_digits(0);
        assert_eq!(
            format.format(123456789).unwrap(),
            "12 crore 34 lakh 56 thousand 7 hundred 89"
        );
        assert_eq!(format.format(100).unwrap(), "1 hundred");
        assert_eq!(format.format(89).unwrap(), "89");
        assert_eq!(format.format(0).unwrap(), "0");
        assert_eq!(format.format(1200000).unwrap(), "12 lakh");
        assert_eq!(format.format(1005).unwrap(), "1 thousand 5");
    }

    #[test]
    fn test_words_full_ladder() {
        let format = english().with_in_words(true);
        assert_eq!(
            format.format(101_010_101_010_101_101_u64).unwrap(),
            "1 sankha 1 padam 1 nil 1 kharab 1 arab 1 crore 1 lakh 1 thousand 1 hundred 1"
        );
    }

    #[test]
    fn test_words_too_large() {
        let format = english().with_in_words(true);
        assert_eq!(
            format.format(100_000_000_000_000_000_000i128),
            Err(NumberFormatError::TooLargeForWords { digits: 21 })
        );
    }

    #[test]
    fn test_words_monetary_english() {
        let format = english()
            .with_in_words(true)
            .with_monetary(true)
            .with_decimal_digits(2);
        assert_eq!(
            format.format(123456789.6548).unwrap(),
            "12 crore 34 lakh 56 thousand 7 hundred 89 rupees 65 paisa"
        );
        assert_eq!(format.format(10.05).unwrap(), "10 rupees 5 paisa");
    }

    #[test]
    fn test_words_monetary_nepali() {
        let format = nepali()
            .with_in_words(true)
            .with_monetary(true)
            .with_decimal_digits(2);
        assert_eq!(
            format.format(123456789.6548).unwrap(),
            "१२ करोड ३४ लाख ५६ हजार ७ सय ८९ रुपैयाँ ६५ पैसा"
        );
    }

    #[test]
    fn test_words_with_fraction() {
        let format = english().with_in_words(true);
        assert_eq!(format.format(1500.25).unwrap(), "1 thousand 5 hundred point 25");
    }

    #[test]
    fn test_symbol_placement() {
        let format = english().with_symbol("Rs.");
        assert_eq!(format.format(1000).unwrap(), "Rs. 1,000");

        let format = english()
            .with_symbol("/-")
            .with_symbol_on_left(false)
            .with_space_between_amount_and_symbol(false);
        assert_eq!(format.format(1000).unwrap(), "1,000/-");

        let format = nepali().with_symbol("रु.").with_in_words(true).with_monetary(true);
        assert_eq!(format.format(1000).unwrap(), "रु. १ हजार रुपैयाँ");
    }

    #[test]
    fn test_invalid_numbers() {
        let format = english();
        for input in ["12a3", "", ".", "-5", "1e5", "1.2.3", " 12", "NaN"] {
            assert_eq!(
                format.format(input),
                Err(NumberFormatError::InvalidNumber(input.to_owned())),
                "{input:?}"
            );
        }
        assert!(matches!(
            format.format(-5),
            Err(NumberFormatError::InvalidNumber(_))
        ));
        assert!(matches!(
            format.format(f64::NAN),
            Err(NumberFormatError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_absent_input_is_empty() {
        let format = english();
        assert_eq!(format.format_opt(None::<i32>).unwrap(), "");
        assert_eq!(format.format_opt(Some(1234)).unwrap(), "1,234");
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "in_words": true,
            "is_monetory": true,
            "decimal_digits": 2,
            "language": "english"
        }"#;
        let format: NepaliNumberFormat = serde_json::from_str(json).unwrap();
        assert!(format.in_words());
        assert!(format.monetary());
        assert_eq!(format.decimal_digits(), Some(2));
        assert_eq!(format.symbol(), None);
        assert_eq!(format.format(5.5).unwrap(), "5 rupees 50 paisa");

        let result: Result<NepaliNumberFormat, _> = serde_json::from_str(r#"{"colour": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        let e = NumberFormatError::InvalidNumber("12a3".to_owned());
        assert_eq!(e.to_string(), "Invalid number: 12a3");
    }

    #[test]
    fn test_lakh_groups() {
        assert_eq!(lakh_groups("1"), vec!["1"]);
        assert_eq!(lakh_groups("1234"), vec!["1", "234"]);
        assert_eq!(lakh_groups("123456"), vec!["1", "23", "456"]);
        assert_eq!(lakh_groups("1234567"), vec!["12", "34", "567"]);
    }
}
