//! Output language selection.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Language numbers and words are rendered in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Language {
    /// Devanagari digits and Nepali words
    #[default]
    Nepali = 0,
    /// ASCII digits and English words
    English = 1,
}

impl Language {
    const fn from_repr(value: u8) -> Self {
        match value {
            1 => Self::English,
            _ => Self::Nepali,
        }
    }
}

static DEFAULT_LANGUAGE: AtomicU8 = AtomicU8::new(Language::Nepali as u8);

/// Returns the process-wide default language.
///
/// Formatters capture this once when they are constructed.
pub fn default_language() -> Language {
    Language::from_repr(DEFAULT_LANGUAGE.load(Ordering::Relaxed))
}

/// Sets the process-wide default language. The last write wins; formatters
/// already constructed keep the language they captured.
pub fn set_default_language(language: Language) {
    tracing::debug!(%language, "default language changed");
    DEFAULT_LANGUAGE.store(language as u8, Ordering::Relaxed);
}
