//! Conversion between Bikram Sambat and Gregorian dates.

use jiff::civil::{Date, DateTime, Time};

use crate::consts::{ANCHOR_AD, MAX_BS_YEAR, MIN_BS_YEAR, MIN_DAY};
use crate::{NepaliDateTime, table};

/// Error type for calendar conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// BS year outside the calendar table.
    #[error("BS year {year} is outside the calendar table ({}-{})", MIN_BS_YEAR, MAX_BS_YEAR)]
    YearOutOfRange { year: i32 },

    /// Month outside Baisakh..=Chaitra.
    #[error("Invalid month: {month} (must be 1-12)")]
    InvalidMonth { month: u8 },

    /// Day beyond the length of its month in the calendar table.
    #[error("Invalid day {day} for BS month {year}-{month:02} (has {max} days)")]
    InvalidDay { year: i32, month: u8, day: u8, max: u8 },

    /// Gregorian date outside the range the calendar table covers.
    #[error("AD date {date} is outside the calendar table")]
    DateOutOfRange { date: Date },

    /// Gregorian arithmetic failed.
    #[error("Gregorian arithmetic failed: {0}")]
    Gregorian(String),
}

/// Converts a BS date to its Gregorian date.
///
/// # Errors
/// Returns `ConversionError` if the year is outside the calendar table or the
/// month/day does not exist in it.
///
/// # Example
///
/// ```
/// use bikram_sambat::to_ad_date;
/// use jiff::civil::date;
///
/// assert_eq!(to_ad_date(2081, 1, 1).unwrap(), date(2024, 4, 13));
/// ```
pub fn to_ad_date(year: i32, month: u8, day: u8) -> Result<Date, ConversionError> {
    let max = table::month_length(year, month)?;
    if day < MIN_DAY || day > max {
        tracing::debug!(year, month, day, max, "BS day outside month");
        return Err(ConversionError::InvalidDay {
            year,
            month,
            day,
            max,
        });
    }

    let anchor = table::epoch_anchor(year)?;
    let elapsed = table::days_before_month(year, month)? + i32::from(day - MIN_DAY);
    let date = table::shift(anchor, elapsed)?;
    tracing::trace!(year, month, day, %date, "converted BS date to AD");
    Ok(date)
}

/// Converts a Gregorian date to its BS `(year, month, day)`.
///
/// # Errors
/// Returns `ConversionError::DateOutOfRange` if the date falls outside the
/// calendar table.
///
/// # Example
///
/// ```
/// use bikram_sambat::to_bs_date;
/// use jiff::civil::date;
///
/// assert_eq!(to_bs_date(date(2000, 1, 1)).unwrap(), (2056, 9, 17));
/// ```
pub fn to_bs_date(date: Date) -> Result<(i32, u8, u8), ConversionError> {
    let offset = table::days_between(ANCHOR_AD, date)?;
    let Some((year, remaining)) = table::locate_year(offset) else {
        tracing::debug!(%date, "AD date outside calendar table");
        return Err(ConversionError::DateOutOfRange { date });
    };
    let (month, day) = table::locate_month(year, remaining)?;
    tracing::trace!(%date, year, month, day, "converted AD date to BS");
    Ok((year, month, day))
}

/// Converts a BS date-time to a Gregorian date-time. The time of day is
/// carried over unchanged.
///
/// # Errors
/// Returns `ConversionError` if the date part cannot be converted.
pub fn to_ad(value: &NepaliDateTime) -> Result<DateTime, ConversionError> {
    let date = to_ad_date(value.year(), value.month(), value.day())?;
    let time = Time::new(
        i8::try_from(value.hour()).map_err(gregorian)?,
        i8::try_from(value.minute()).map_err(gregorian)?,
        i8::try_from(value.second()).map_err(gregorian)?,
        value.subsec_nanosecond(),
    )
    .map_err(gregorian)?;
    Ok(date.to_datetime(time))
}

/// Converts a Gregorian date-time to a BS date-time. The time of day is
/// carried over unchanged, truncated to microseconds.
///
/// # Errors
/// Returns `ConversionError::DateOutOfRange` if the date falls outside the
/// calendar table.
pub fn to_bs(value: DateTime) -> Result<NepaliDateTime, ConversionError> {
    let (year, month, day) = to_bs_date(value.date())?;
    NepaliDateTime::new(year, month, day)
        .and_then(|date| {
            date.merge_time(
                value.hour().unsigned_abs(),
                value.minute().unsigned_abs(),
                value.second().unsigned_abs(),
            )
        })
        .and_then(|date| {
            date.with_subsec(
                value.millisecond().unsigned_abs(),
                value.microsecond().unsigned_abs(),
            )
        })
        .map_err(gregorian)
}

fn gregorian(err: impl std::fmt::Display) -> ConversionError {
    ConversionError::Gregorian(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SUPPORTED_YEARS;
    use crate::table::month_length;
    use jiff::civil::{date, datetime};

    #[test]
    fn test_known_dates() {
        let cases = [
            ((1970, 1, 1), date(1913, 4, 13)),
            ((1986, 9, 18), date(1930, 1, 1)),
            ((1999, 12, 31), date(1943, 4, 13)),
            ((2000, 1, 1), date(1943, 4, 14)),
            ((2026, 9, 17), date(1970, 1, 1)),
            ((2056, 9, 17), date(2000, 1, 1)),
            ((2076, 9, 9), date(2019, 12, 25)),
            ((2080, 9, 16), date(2024, 1, 1)),
            ((2081, 1, 1), date(2024, 4, 13)),
            ((2083, 7, 3), date(2026, 10, 19)),
            ((2090, 12, 30), date(2034, 4, 13)),
        ];
        for ((y, m, d), ad) in cases {
            assert_eq!(to_ad_date(y, m, d).unwrap(), ad, "{y}-{m:02}-{d:02}");
            assert_eq!(to_bs_date(ad).unwrap(), (y, m, d), "{ad}");
        }
    }

    #[test]
    fn test_round_trip_every_bs_day() {
        for year in SUPPORTED_YEARS {
            for month in 1..=12 {
                for day in 1..=month_length(year, month).unwrap() {
                    let ad = to_ad_date(year, month, day).unwrap();
                    assert_eq!(to_bs_date(ad).unwrap(), (year, month, day));
                }
            }
        }
    }

    #[test]
    fn test_round_trip_every_ad_day() {
        let mut ad = date(1913, 4, 13);
        let end = date(2034, 4, 14);
        let mut previous = None;
        while ad < end {
            let (y, m, d) = to_bs_date(ad).unwrap();
            assert_eq!(to_ad_date(y, m, d).unwrap(), ad);
            assert_ne!(previous, Some((y, m, d)));
            previous = Some((y, m, d));
            ad = ad.tomorrow().unwrap();
        }
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(matches!(
            to_ad_date(1969, 12, 30),
            Err(ConversionError::YearOutOfRange { year: 1969 })
        ));
        assert!(matches!(
            to_ad_date(2091, 1, 1),
            Err(ConversionError::YearOutOfRange { year: 2091 })
        ));
    }

    #[test]
    fn test_invalid_day() {
        // Baisakh 2000 has 30 days
        assert!(matches!(
            to_ad_date(2000, 1, 31),
            Err(ConversionError::InvalidDay {
                year: 2000,
                month: 1,
                day: 31,
                max: 30
            })
        ));
        assert!(matches!(
            to_ad_date(2000, 1, 0),
            Err(ConversionError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            to_ad_date(2000, 13, 1),
            Err(ConversionError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn test_ad_out_of_range() {
        let before = date(1913, 4, 12);
        assert_eq!(
            to_bs_date(before),
            Err(ConversionError::DateOutOfRange { date: before })
        );
        let after = date(2034, 4, 14);
        assert_eq!(
            to_bs_date(after),
            Err(ConversionError::DateOutOfRange { date: after })
        );
    }

    #[test]
    fn test_date_time_keeps_time_of_day() {
        let ad = datetime(2024, 4, 13, 17, 45, 30, 123_456_789);
        let bs = to_bs(ad).unwrap();
        assert_eq!((bs.year(), bs.month(), bs.day()), (2081, 1, 1));
        assert_eq!((bs.hour(), bs.minute(), bs.second()), (17, 45, 30));
        assert_eq!((bs.millisecond(), bs.microsecond()), (123, 456));

        let back = to_ad(&bs).unwrap();
        assert_eq!(back, datetime(2024, 4, 13, 17, 45, 30, 123_456_000));
    }

    #[test]
    fn test_error_display() {
        let e = ConversionError::YearOutOfRange { year: 2100 };
        assert_eq!(
            e.to_string(),
            "BS year 2100 is outside the calendar table (1970-2090)"
        );

        let e = ConversionError::InvalidDay {
            year: 2000,
            month: 1,
            day: 31,
            max: 30,
        };
        assert_eq!(
            e.to_string(),
            "Invalid day 31 for BS month 2000-01 (has 30 days)"
        );
    }
}
