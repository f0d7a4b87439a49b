use jiff::civil::{Date, Weekday, date};

/// First Bikram Sambat year covered by the calendar table (inclusive)
pub const MIN_BS_YEAR: i32 = 1970;
/// Last Bikram Sambat year covered by the calendar table (inclusive)
pub const MAX_BS_YEAR: i32 = 2090;

/// Gregorian date of BS `MIN_BS_YEAR`-01-01, the base of every table anchor
pub const ANCHOR_AD: Date = date(1913, 4, 13);

/// BS date every weekday is counted from
pub(crate) const WEEKDAY_REFERENCE: (i32, u8, u8) = (2000, 1, 1);
/// Weekday of `WEEKDAY_REFERENCE`
pub(crate) const REFERENCE_WEEKDAY: Weekday = Weekday::Wednesday;

/// Largest absolute year a value can hold (six digit years)
pub const MAX_YEAR: i32 = 999_999;
/// Largest absolute year rendered with four digits
pub(crate) const FOUR_DIGIT_YEAR_LIMIT: i32 = 9999;

/// Month number for Baisakh, the first BS month
pub const BAISAKH: u8 = 1;
/// Month number for Chaitra, the last BS month
pub const CHAITRA: u8 = 12;
/// Maximum valid month
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;
/// Longest month length any BS year has
pub const MAX_DAY: u8 = 32;

/// Maximum valid hour
pub const MAX_HOUR: u8 = 23;
/// Maximum valid minute
pub const MAX_MINUTE: u8 = 59;
/// Maximum valid second (no leap seconds)
pub const MAX_SECOND: u8 = 59;
/// Maximum valid millisecond within a second
pub const MAX_MILLISECOND: u16 = 999;
/// Maximum valid microsecond within a millisecond
pub const MAX_MICROSECOND: u16 = 999;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between date and time in `Display` output
pub const DATE_TIME_SEPARATOR: char = ' ';
/// Separator between date and time in ISO 8601 output
pub const ISO_DATE_TIME_SEPARATOR: char = 'T';

/// Digits of sub-second precision kept by the parser (milli + micro)
pub(crate) const FRACTION_DIGITS: usize = 6;
