use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::I18nError;

/// Locale used when no client language preference can be observed.
pub const DEFAULT_LOCALE: Locale = Locale::Zh;

/// The two supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Maps a client language preference onto a supported locale.
    ///
    /// Anything starting with `zh` (case-insensitive) is Chinese, everything
    /// else is English.
    pub fn from_preference(preference: &str) -> Locale {
        if preference.to_lowercase().starts_with("zh") { Locale::Zh } else { Locale::En }
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => Err(I18nError::UnsupportedLocale(s.to_string())),
        }
    }
}

// ---------- Environment ----------

/// Capability answering "is there a client, and what language does it prefer?".
///
/// Server-side rendering has no client and answers `None`; an interactive
/// client answers with its raw preference string (e.g. `"zh-CN"`).
pub trait EnvironmentContext {
    fn language_preference(&self) -> Option<Cow<'_, str>>;
}

/// No interactive client is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl EnvironmentContext for Headless {
    fn language_preference(&self) -> Option<Cow<'_, str>> {
        None
    }
}

/// A language preference reported by a client, such as an `Accept-Language`
/// header or a browser's `navigator.language`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientLanguage(pub String);

impl ClientLanguage {
    pub fn new(preference: impl Into<String>) -> Self {
        Self(preference.into())
    }
}

impl EnvironmentContext for ClientLanguage {
    fn language_preference(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.0))
    }
}

/// Picks the active locale, falling back to [`DEFAULT_LOCALE`] without a client.
pub fn select_locale(env: &dyn EnvironmentContext) -> Locale {
    select_locale_or(env, DEFAULT_LOCALE)
}

/// Picks the active locale, falling back to `default` without a client.
pub fn select_locale_or(env: &dyn EnvironmentContext, default: Locale) -> Locale {
    match env.language_preference() {
        Some(preference) => {
            let locale = Locale::from_preference(&preference);
            debug!(preference = %preference, %locale, "selected locale from client preference");
            locale
        }
        None => {
            debug!(locale = %default, "no client language signal, using default locale");
            default
        }
    }
}
