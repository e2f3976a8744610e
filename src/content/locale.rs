//! Locale type: closed, validated language representation.
//!
//! The page supports exactly two locales. Using a closed enum (rather than
//! string keys into a dictionary) makes an out-of-set locale unrepresentable,
//! so content lookup is a total function.

use thiserror::Error;
use tracing::warn;

/// Error returned when a selector label cannot be mapped to a locale.
///
/// This is recoverable by design: callers that face user input should go
/// through [`Locale::select`], which falls back to the default locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language label: '{label}'")]
pub struct UnknownLanguageLabelError {
    /// The label that failed to parse, as received from the selector.
    pub label: String,
}

/// A supported content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English (canonical — translations are derived from it)
    En,
    /// French
    Fr,
}

impl Locale {
    /// All supported locales, in selector display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// The language name in its native form, as shown on the selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
        }
    }

    /// The canonical (source) locale. All translated content is checked
    /// against this locale's structure at startup.
    pub fn canonical() -> Locale {
        Locale::En
    }

    /// Map a user-facing selector label to a locale.
    ///
    /// Accepts the native display names ("English" / "Français") and the ISO
    /// codes ("en" / "fr"), case-insensitively.
    ///
    /// # Returns
    /// * `Ok(Locale)` for a recognized label
    /// * `Err(UnknownLanguageLabelError)` otherwise
    pub fn from_label(label: &str) -> Result<Locale, UnknownLanguageLabelError> {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "english" | "en" => Ok(Locale::En),
            "français" | "francais" | "fr" => Ok(Locale::Fr),
            _ => Err(UnknownLanguageLabelError {
                label: label.to_string(),
            }),
        }
    }

    /// Resolve an optional selector value to a locale, never failing.
    ///
    /// `None` means no explicit selection has been made yet (first render)
    /// and yields the default. An unrecognized label logs a warning and also
    /// yields the default, so a bad query string can never take the page down.
    pub fn select(label: Option<&str>) -> Locale {
        match label {
            None => Locale::default(),
            Some(raw) => match Locale::from_label(raw) {
                Ok(locale) => locale,
                Err(err) => {
                    warn!("{err}, falling back to {}", Locale::default().code());
                    Locale::default()
                }
            },
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}
