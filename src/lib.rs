//! Bikram Sambat (BS) calendar support.
//!
//! - Conversion between BS and Gregorian (AD) dates over a fixed calendar
//!   table covering BS years [`MIN_BS_YEAR`] to [`MAX_BS_YEAR`].
//! - [`NepaliDateTime`], a BS date with a time of day, with parsing,
//!   formatting, weekday and duration arithmetic.
//! - [`NepaliNumberFormat`], lakh/crore digit grouping and numbers in words.
//! - Devanagari digit transliteration.
//!
//! Gregorian values are [`jiff::civil`] types.
//!
//! ```
//! use bikram_sambat::{Language, NepaliDateTime, NepaliNumberFormat};
//! use jiff::civil::date;
//!
//! let new_year = NepaliDateTime::new(2081, 1, 1).unwrap();
//! assert_eq!(new_year.to_ad().unwrap().date(), date(2024, 4, 13));
//!
//! let format = NepaliNumberFormat::new().with_language(Language::Nepali);
//! assert_eq!(format.format(1234567).unwrap(), "१२,३४,५६७");
//! ```

mod consts;
mod convert;
mod datetime;
mod iso;
mod language;
mod number;
mod prelude;
mod table;
mod types;
mod unicode;

pub use consts::*;
pub use convert::{ConversionError, to_ad, to_ad_date, to_bs, to_bs_date};
pub use datetime::{NepaliDateTime, ParseError};
pub use language::{Language, default_language, set_default_language};
pub use number::{NepaliNumberFormat, NumberFormatError, NumberInput};
pub use table::{SUPPORTED_YEARS, epoch_anchor, month_length, year_length};
pub use types::{Day, Month, Year};
pub use unicode::{localize_digits, to_ascii_digits, to_devanagari_digits};
