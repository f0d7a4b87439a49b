//! Bikram Sambat calendar table.
//!
//! BS month lengths are set by almanac rather than by rule, so every
//! supported year carries its twelve month lengths explicitly. Year anchors
//! are derived from [`ANCHOR_AD`] and the cumulative year lengths, which keeps
//! the covered range contiguous by construction.

use std::ops::RangeInclusive;

use jiff::Span;
use jiff::civil::Date;

use crate::ConversionError;
use crate::consts::{ANCHOR_AD, BAISAKH, CHAITRA, MAX_BS_YEAR, MIN_BS_YEAR};

/// BS years covered by the calendar table.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = MIN_BS_YEAR..=MAX_BS_YEAR;

const YEAR_COUNT: usize = (MAX_BS_YEAR - MIN_BS_YEAR + 1) as usize;

/// Month lengths, Baisakh through Chaitra, for each year from `MIN_BS_YEAR`.
#[rustfmt::skip]
const MONTH_LENGTHS: [[u8; 12]; YEAR_COUNT] = [
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1970
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 30, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1980
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1990
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30],
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30],
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30],
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
];

/// Days from `ANCHOR_AD` to the first day of each covered year. The extra
/// trailing entry is the day count of the whole table.
const YEAR_OFFSETS: [i32; YEAR_COUNT + 1] = year_offsets();

const fn year_offsets() -> [i32; YEAR_COUNT + 1] {
    let mut offsets = [0; YEAR_COUNT + 1];
    let mut year = 0;
    while year < YEAR_COUNT {
        let mut length = 0;
        let mut month = 0;
        while month < MONTH_LENGTHS[year].len() {
            length += MONTH_LENGTHS[year][month] as i32;
            month += 1;
        }
        offsets[year + 1] = offsets[year] + length;
        year += 1;
    }
    offsets
}

fn year_index(year: i32) -> Result<usize, ConversionError> {
    if !SUPPORTED_YEARS.contains(&year) {
        tracing::debug!(year, "BS year outside calendar table");
        return Err(ConversionError::YearOutOfRange { year });
    }
    usize::try_from(year - MIN_BS_YEAR).map_err(|_| ConversionError::YearOutOfRange { year })
}

fn month_lengths(year: i32) -> Result<[u8; 12], ConversionError> {
    Ok(MONTH_LENGTHS[year_index(year)?])
}

/// Returns the number of days in `month` of BS `year`.
///
/// # Errors
/// Returns `ConversionError::YearOutOfRange` outside [`SUPPORTED_YEARS`] and
/// `ConversionError::InvalidMonth` if `month` is not in `1..=12`.
pub fn month_length(year: i32, month: u8) -> Result<u8, ConversionError> {
    if !(BAISAKH..=CHAITRA).contains(&month) {
        return Err(ConversionError::InvalidMonth { month });
    }
    let lengths = month_lengths(year)?;
    Ok(lengths[usize::from(month - BAISAKH)])
}

/// Returns the number of days in BS `year`.
///
/// # Errors
/// Returns `ConversionError::YearOutOfRange` outside [`SUPPORTED_YEARS`].
pub fn year_length(year: i32) -> Result<u16, ConversionError> {
    Ok(month_lengths(year)?.iter().map(|&days| u16::from(days)).sum())
}

/// Returns the Gregorian date of the first day of BS `year`.
///
/// # Errors
/// Returns `ConversionError::YearOutOfRange` outside [`SUPPORTED_YEARS`].
pub fn epoch_anchor(year: i32) -> Result<Date, ConversionError> {
    let offset = YEAR_OFFSETS[year_index(year)?];
    shift(ANCHOR_AD, offset)
}

/// Days in months of `year` that precede `month`.
pub(crate) fn days_before_month(year: i32, month: u8) -> Result<i32, ConversionError> {
    month_length(year, month)?;
    let lengths = month_lengths(year)?;
    Ok(lengths[..usize::from(month - BAISAKH)]
        .iter()
        .map(|&days| i32::from(days))
        .sum())
}

/// Finds the covered year containing the day `offset` days after
/// `ANCHOR_AD`. Returns the year with the remaining offset into it.
pub(crate) fn locate_year(offset: i32) -> Option<(i32, i32)> {
    if offset < 0 || offset >= YEAR_OFFSETS[YEAR_COUNT] {
        return None;
    }
    let index = YEAR_OFFSETS.partition_point(|&start| start <= offset) - 1;
    let year = MIN_BS_YEAR + i32::try_from(index).ok()?;
    Some((year, offset - YEAR_OFFSETS[index]))
}

/// Walks the months of `year`, returning `(month, day)` for a day offset
/// into that year.
pub(crate) fn locate_month(year: i32, mut offset: i32) -> Result<(u8, u8), ConversionError> {
    for (month, length) in (BAISAKH..=CHAITRA).zip(month_lengths(year)?) {
        let length = i32::from(length);
        if offset < length {
            let day = u8::try_from(offset + 1)
                .map_err(|e| ConversionError::Gregorian(e.to_string()))?;
            return Ok((month, day));
        }
        offset -= length;
    }
    Err(ConversionError::YearOutOfRange { year })
}

/// Adds `days` to a Gregorian date.
pub(crate) fn shift(date: Date, days: i32) -> Result<Date, ConversionError> {
    Span::new()
        .try_days(days)
        .and_then(|span| date.checked_add(span))
        .map_err(|e| ConversionError::Gregorian(e.to_string()))
}

/// Whole days from `from` to `to` (negative if `to` is earlier).
pub(crate) fn days_between(from: Date, to: Date) -> Result<i32, ConversionError> {
    to.since(from)
        .map(|span| span.get_days())
        .map_err(|e| ConversionError::Gregorian(e.to_string()))
}
