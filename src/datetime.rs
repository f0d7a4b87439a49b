use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use jiff::SignedDuration;
use jiff::civil::{Date, DateTime};

use crate::consts::{
    DATE_SEPARATOR, DATE_TIME_SEPARATOR, FOUR_DIGIT_YEAR_LIMIT, ISO_DATE_TIME_SEPARATOR,
    MAX_HOUR, MAX_MICROSECOND, MAX_MILLISECOND, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR,
    REFERENCE_WEEKDAY, TIME_SEPARATOR, WEEKDAY_REFERENCE,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use crate::{ConversionError, convert, iso, table};

/// A Bikram Sambat calendar date with a wall-clock time of day.
///
/// Each field is validated against calendar-independent bounds on
/// construction. Whether the day exists in its month is only known from the
/// calendar table, so it is checked by every conversion instead.
///
/// Values order chronologically: field by field from year down to microsecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NepaliDateTime {
    year: Year,
    month: Month,
    day: Day,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
    microsecond: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be within ±{})", "_0", MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {_0}")]
    InvalidDay(u8),
    #[display(fmt = "Invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },
    #[display(fmt = "Invalid sub-second: {millisecond} ms {microsecond} us")]
    InvalidSubsecond { millisecond: u16, microsecond: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl NepaliDateTime {
    /// Creates a date at midnight.
    ///
    /// # Errors
    /// Returns `ParseError` if a field is outside its calendar-independent
    /// bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bikram_sambat::NepaliDateTime;
    ///
    /// let date = NepaliDateTime::new(2081, 1, 1).unwrap();
    /// assert_eq!(date.to_string(), "2081-01-01 00:00:00.000");
    /// assert_eq!(date.weekday().unwrap(), 6);
    /// ```
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self::from_date(
            Year::new(year)?,
            Month::new(month)?,
            Day::new(day)?,
        ))
    }

    /// Creates a date at midnight from already validated components.
    pub const fn from_date(year: Year, month: Month, day: Day) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            microsecond: 0,
        }
    }

    /// Returns a copy with the given time of day. Sub-second fields are reset
    /// to zero.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidTime` if a component is out of range.
    pub fn merge_time(self, hour: u8, minute: u8, second: u8) -> Result<Self, ParseError> {
        if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_SECOND {
            return Err(ParseError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            millisecond: 0,
            microsecond: 0,
            ..self
        })
    }

    /// Returns a copy with the given sub-second fields.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidSubsecond` if a component exceeds 999.
    pub fn with_subsec(self, millisecond: u16, microsecond: u16) -> Result<Self, ParseError> {
        if millisecond > MAX_MILLISECOND || microsecond > MAX_MICROSECOND {
            return Err(ParseError::InvalidSubsecond {
                millisecond,
                microsecond,
            });
        }
        Ok(Self {
            millisecond,
            microsecond,
            ..self
        })
    }

    /// Current local date and time.
    ///
    /// # Errors
    /// Returns `ConversionError::DateOutOfRange` if today is outside the
    /// calendar table.
    pub fn now() -> Result<Self, ConversionError> {
        Self::from_ad(jiff::Zoned::now().datetime())
    }

    /// Converts a Gregorian date-time.
    ///
    /// # Errors
    /// Returns `ConversionError::DateOutOfRange` outside the calendar table.
    pub fn from_ad(value: DateTime) -> Result<Self, ConversionError> {
        convert::to_bs(value)
    }

    /// Converts to a Gregorian date-time.
    ///
    /// # Errors
    /// Returns `ConversionError` if the date is outside the calendar table or
    /// the day does not exist in its month.
    pub fn to_ad(&self) -> Result<DateTime, ConversionError> {
        convert::to_ad(self)
    }

    fn ad_date(&self) -> Result<Date, ConversionError> {
        convert::to_ad_date(self.year(), self.month(), self.day())
    }

    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }

    pub const fn microsecond(&self) -> u16 {
        self.microsecond
    }

    /// Sub-second part in nanoseconds.
    pub fn subsec_nanosecond(&self) -> i32 {
        i32::from(self.millisecond) * 1_000_000 + i32::from(self.microsecond) * 1_000
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Number of days in this value's month.
    ///
    /// # Errors
    /// Returns `ConversionError::YearOutOfRange` outside the calendar table.
    pub fn days_in_month(&self) -> Result<u8, ConversionError> {
        table::month_length(self.year(), self.month())
    }

    /// Day of the week, 1 (Monday) through 7 (Sunday).
    ///
    /// # Errors
    /// Returns `ConversionError` if the date cannot be converted.
    pub fn weekday(&self) -> Result<u8, ConversionError> {
        let (year, month, day) = WEEKDAY_REFERENCE;
        let reference = convert::to_ad_date(year, month, day)?;
        let elapsed = table::days_between(reference, self.ad_date()?)?;
        Ok(REFERENCE_WEEKDAY
            .wrapping_add(elapsed)
            .to_monday_one_offset()
            .unsigned_abs())
    }

    /// Compares calendar dates, ignoring the time of day.
    ///
    /// # Errors
    /// Returns `ConversionError` if either date cannot be converted.
    pub fn compare_date_only(&self, other: &Self) -> Result<Ordering, ConversionError> {
        Ok(self.ad_date()?.cmp(&other.ad_date()?))
    }

    /// Whether this date falls on a later day than `other`. Time of day is
    /// ignored.
    ///
    /// # Errors
    /// Returns `ConversionError` if either date cannot be converted.
    pub fn is_after(&self, other: &Self) -> Result<bool, ConversionError> {
        Ok(self.compare_date_only(other)? == Ordering::Greater)
    }

    /// Whether this date falls on an earlier day than `other`. Time of day is
    /// ignored.
    ///
    /// # Errors
    /// Returns `ConversionError` if either date cannot be converted.
    pub fn is_before(&self, other: &Self) -> Result<bool, ConversionError> {
        Ok(self.compare_date_only(other)? == Ordering::Less)
    }

    /// Elapsed time from `other` to `self`, time of day included.
    ///
    /// # Errors
    /// Returns `ConversionError` if either value cannot be converted.
    pub fn difference_including_time(
        &self,
        other: &Self,
    ) -> Result<SignedDuration, ConversionError> {
        Ok(self.to_ad()?.duration_since(other.to_ad()?))
    }

    /// Adds a duration.
    ///
    /// # Errors
    /// Returns `ConversionError` if either end is outside the calendar table.
    pub fn checked_add(&self, duration: SignedDuration) -> Result<Self, ConversionError> {
        let shifted = self
            .to_ad()?
            .checked_add(duration)
            .map_err(|e| ConversionError::Gregorian(e.to_string()))?;
        Self::from_ad(shifted)
    }

    /// Subtracts a duration.
    ///
    /// # Errors
    /// Returns `ConversionError` if either end is outside the calendar table.
    pub fn checked_sub(&self, duration: SignedDuration) -> Result<Self, ConversionError> {
        let shifted = self
            .to_ad()?
            .checked_sub(duration)
            .map_err(|e| ConversionError::Gregorian(e.to_string()))?;
        Self::from_ad(shifted)
    }

    /// Parses the ISO 8601-like text form, e.g. `2081-01-15`,
    /// `2081-01-15 10:30:45.123` or `20810115T1030+0545`.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank text and
    /// `ParseError::InvalidFormat` for anything else that does not parse,
    /// including surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        iso::parse(text)
    }

    /// Parses like [`NepaliDateTime::parse`], returning `None` on failure.
    pub fn try_parse(text: &str) -> Option<Self> {
        iso::parse(text).ok()
    }

    /// Renders as `yyyy-MM-ddTHH:mm:ss.mmm[uuu]`.
    pub fn to_iso8601_string(&self) -> String {
        Rendered {
            value: self,
            separator: ISO_DATE_TIME_SEPARATOR,
        }
        .to_string()
    }
}

/// Text form of a value with a chosen date/time separator.
struct Rendered<'a> {
    value: &'a NepaliDateTime,
    separator: char,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.value;
        let year = v.year();
        if year.abs() > FOUR_DIGIT_YEAR_LIMIT {
            write!(f, "{year:+07}")?;
        } else if year < 0 {
            write!(f, "-{:04}", year.unsigned_abs())?;
        } else {
            write!(f, "{year:04}")?;
        }
        write!(
            f,
            "{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}{}{:02}{TIME_SEPARATOR}{:02}{TIME_SEPARATOR}{:02}.{:03}",
            v.month(),
            v.day(),
            self.separator,
            v.hour,
            v.minute,
            v.second,
            v.millisecond,
        )?;
        if v.microsecond != 0 {
            write!(f, "{:03}", v.microsecond)?;
        }
        Ok(())
    }
}

impl fmt::Display for NepaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = Rendered {
            value: self,
            separator: DATE_TIME_SEPARATOR,
        };
        fmt::Display::fmt(&rendered, f)
    }
}

impl FromStr for NepaliDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<DateTime> for NepaliDateTime {
    type Error = ConversionError;

    fn try_from(value: DateTime) -> Result<Self, Self::Error> {
        Self::from_ad(value)
    }
}

impl TryFrom<NepaliDateTime> for DateTime {
    type Error = ConversionError;

    fn try_from(value: NepaliDateTime) -> Result<Self, Self::Error> {
        value.to_ad()
    }
}

impl serde::Serialize for NepaliDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso8601_string())
    }
}

impl<'de> serde::Deserialize<'de> for NepaliDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
