//! Parser for the ISO 8601-like BS date-time text form.
//!
//! ```text
//! [+-]YYYY[YY]-MM-DD[(T| )HH[:MM[:SS[(.|,)fff...]]][ ][Z|(+|-)HH[:MM]]]
//! ```
//!
//! Every separator inside the date and the time is optional. The year takes
//! the longest digit run (six, five, then four digits) that lets the rest of
//! the text match. Fraction digits past the microsecond are dropped and any
//! zone designator is ignored. The whole text must match, so surrounding
//! whitespace is rejected.

use crate::consts::{
    DATE_SEPARATOR, DATE_TIME_SEPARATOR, FRACTION_DIGITS, ISO_DATE_TIME_SEPARATOR, TIME_SEPARATOR,
};
use crate::{NepaliDateTime, ParseError};

const YEAR_DIGITS: [usize; 3] = [6, 5, 4];

/// Fields matched by the grammar, before range checks.
#[derive(Debug, Default, PartialEq, Eq)]
struct Fields {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
    microsecond: u16,
}

/// Parses `text` into a [`NepaliDateTime`].
pub(crate) fn parse(text: &str) -> Result<NepaliDateTime, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let invalid = || ParseError::InvalidFormat(text.to_owned());
    let fields = YEAR_DIGITS
        .iter()
        .find_map(|&digits| match_fields(text, digits))
        .ok_or_else(invalid)?;

    NepaliDateTime::new(fields.year, fields.month, fields.day)
        .and_then(|value| value.merge_time(fields.hour, fields.minute, fields.second))
        .and_then(|value| value.with_subsec(fields.millisecond, fields.microsecond))
        .map_err(|_| invalid())
}

/// Matches the whole of `text` with a year of exactly `year_digits` digits.
fn match_fields(text: &str, year_digits: usize) -> Option<Fields> {
    let mut cursor = Cursor::new(text);
    let mut fields = Fields::default();

    let negative = match cursor.peek() {
        Some(b'-') => {
            cursor.bump();
            true
        }
        Some(b'+') => {
            cursor.bump();
            false
        }
        _ => false,
    };
    let year = i32::try_from(cursor.number(year_digits)?).ok()?;
    fields.year = if negative { -year } else { year };

    cursor.eat(DATE_SEPARATOR);
    fields.month = u8::try_from(cursor.number(2)?).ok()?;
    cursor.eat(DATE_SEPARATOR);
    fields.day = u8::try_from(cursor.number(2)?).ok()?;

    if cursor.eat(ISO_DATE_TIME_SEPARATOR) || cursor.eat(DATE_TIME_SEPARATOR) {
        match_time(&mut cursor, &mut fields)?;
        match_zone(&mut cursor)?;
    }

    cursor.is_done().then_some(fields)
}

fn match_time(cursor: &mut Cursor<'_>, fields: &mut Fields) -> Option<()> {
    fields.hour = u8::try_from(cursor.number(2)?).ok()?;

    let mark = cursor.pos;
    let separated = cursor.eat(TIME_SEPARATOR);
    let Some(minute) = cursor.number(2) else {
        if separated {
            return None;
        }
        cursor.pos = mark;
        return Some(());
    };
    fields.minute = u8::try_from(minute).ok()?;

    let mark = cursor.pos;
    let separated = cursor.eat(TIME_SEPARATOR);
    let Some(second) = cursor.number(2) else {
        if separated {
            return None;
        }
        cursor.pos = mark;
        return Some(());
    };
    fields.second = u8::try_from(second).ok()?;

    if cursor.eat('.') || cursor.eat(',') {
        let fraction = cursor.digit_run();
        if fraction.is_empty() {
            return None;
        }
        let padded: String = fraction
            .chars()
            .chain(std::iter::repeat('0'))
            .take(FRACTION_DIGITS)
            .collect();
        let (millisecond, microsecond) = padded.split_at(FRACTION_DIGITS / 2);
        fields.millisecond = millisecond.parse().ok()?;
        fields.microsecond = microsecond.parse().ok()?;
    }
    Some(())
}

/// Consumes an optional zone designator: ` Z`, `Z`, `+05`, ` -05:45`, `+0545`.
fn match_zone(cursor: &mut Cursor<'_>) -> Option<()> {
    let mark = cursor.pos;
    cursor.eat(' ');
    match cursor.peek() {
        Some(b'z' | b'Z') => {
            cursor.bump();
        }
        Some(b'+' | b'-') => {
            cursor.bump();
            cursor.number(2)?;
            let separated = cursor.eat(TIME_SEPARATOR);
            if cursor.number(2).is_none() && separated {
                return None;
            }
        }
        _ => cursor.pos = mark,
    }
    Some(())
}

/// Byte cursor over ASCII grammar input.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.text[self.pos..].starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Reads exactly `count` ASCII digits, leaving the cursor in place on failure.
    fn number(&mut self, count: usize) -> Option<u32> {
        let digits = self.text.get(self.pos..self.pos + count)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.pos += count;
        digits.parse().ok()
    }

    /// Reads every consecutive ASCII digit.
    fn digit_run(&mut self) -> &'a str {
        let rest = &self.text[self.pos..];
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        self.pos += len;
        &rest[..len]
    }

    fn is_done(&self) -> bool {
        self.pos == self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(text: &str) -> Option<Fields> {
        YEAR_DIGITS
            .iter()
            .find_map(|&digits| match_fields(text, digits))
    }

    #[test]
    fn test_date_only() {
        let f = fields("2081-01-15").unwrap();
        assert_eq!((f.year, f.month, f.day), (2081, 1, 15));
        assert_eq!((f.hour, f.minute, f.second), (0, 0, 0));
    }

    #[test]
    fn test_compact_forms() {
        let f = fields("20810115").unwrap();
        assert_eq!((f.year, f.month, f.day), (2081, 1, 15));

        let f = fields("20810115T103045").unwrap();
        assert_eq!((f.hour, f.minute, f.second), (10, 30, 45));

        let f = fields("2081-01-15T1030").unwrap();
        assert_eq!((f.hour, f.minute, f.second), (10, 30, 0));
    }

    #[test]
    fn test_longest_year_wins() {
        let f = fields("+207601-01-01").unwrap();
        assert_eq!(f.year, 207_601);

        let f = fields("-0005-01-01").unwrap();
        assert_eq!(f.year, -5);

        let f = fields("12345-06-07").unwrap();
        assert_eq!((f.year, f.month, f.day), (12345, 6, 7));
    }

    #[test]
    fn test_fraction() {
        let f = fields("2081-01-01 10:30:45.123456789").unwrap();
        assert_eq!((f.millisecond, f.microsecond), (123, 456));

        let f = fields("2081-01-01 10:30:45,5").unwrap();
        assert_eq!((f.millisecond, f.microsecond), (500, 0));

        let f = fields("2081-01-01 10:30:45.0001").unwrap();
        assert_eq!((f.millisecond, f.microsecond), (0, 100));

        assert_eq!(fields("2081-01-01 10:30:45."), None);
    }

    #[test]
    fn test_zone_designators_are_ignored() {
        for text in [
            "2081-01-01T10:30Z",
            "2081-01-01T10:30 z",
            "2081-01-01T10:30+05:45",
            "2081-01-01T10:30 -0545",
            "2081-01-01T10+05",
        ] {
            let f = fields(text).unwrap_or_else(|| panic!("{text} should match"));
            assert_eq!(f.hour, 10, "{text}");
        }
    }

    #[test]
    fn test_rejects_partial_matches() {
        for text in [
            "2081-1-1",
            "2081-01",
            "2081-01-01T",
            "2081-01-01T1",
            "2081-01-01T10:",
            "2081-01-01T10:30:",
            "2081-01-01+05:45",
            "2081-01-01T10:30+05:",
            "2081-01-01T10:30 extra",
            "२०८१-०१-०१",
            "12a3",
        ] {
            assert_eq!(fields(text), None, "{text} should not match");
        }
    }

    #[test]
    fn test_parse_range_checks() {
        assert_eq!(
            parse("2076-13-40"),
            Err(ParseError::InvalidFormat("2076-13-40".to_owned()))
        );
        assert_eq!(
            parse("2081-01-01T24:00"),
            Err(ParseError::InvalidFormat("2081-01-01T24:00".to_owned()))
        );
        assert_eq!(parse("  "), Err(ParseError::EmptyInput));
        assert_eq!(parse(""), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        for text in [" 2081-01-01", "2081-01-01 ", "\t2081-01-01T10:30\n"] {
            assert_eq!(
                parse(text),
                Err(ParseError::InvalidFormat(text.to_owned())),
                "{text:?}"
            );
        }
        assert!(parse("2081-01-01").is_ok());
    }
}
