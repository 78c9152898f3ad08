use std::sync::Arc;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::I18nError;
use crate::interpolate::Params;
use crate::locale::{ DEFAULT_LOCALE, EnvironmentContext, Locale, select_locale_or };

/// Configuration for locale selection.
///
/// # Example
///
/// ```rust
/// use genpanel_intl::{ I18nConfig, Locale };
///
/// let config = I18nConfig::from_json(r#"{ "default_locale": "en" }"#).unwrap();
/// assert_eq!(config.default_locale, Locale::En);
/// assert_eq!(config.locale, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used when no client language preference is observable.
    /// Default: `zh`
    pub default_locale: Locale,
    /// Forces a locale and skips environment detection.
    /// Default: `None`
    pub locale: Option<Locale>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE,
            locale: None,
        }
    }
}

impl I18nConfig {
    pub fn from_json(src: &str) -> Result<Self, I18nError> {
        Ok(serde_json::from_str(src)?)
    }

    /// The locale this configuration selects in `env`.
    pub fn select_locale(&self, env: &dyn EnvironmentContext) -> Locale {
        self.locale.unwrap_or_else(|| select_locale_or(env, self.default_locale))
    }
}

/// A catalog bound to the locale chosen for one render pass.
///
/// The locale is selected once at construction; every `t` call afterwards
/// uses it.
///
/// # Example
///
/// ```rust
/// use genpanel_intl::{ Catalog, ClientLanguage, I18n, I18nConfig, Locale, Params };
///
/// let i18n = I18n::from_environment(
///     Catalog::bundled(),
///     &ClientLanguage::new("en-US"),
///     &I18nConfig::default(),
/// );
/// assert_eq!(i18n.lang(), Locale::En);
///
/// let cost = Params::new().with("cost", "1.2345");
/// assert_eq!(i18n.t("history.totalCost", Some(&cost)), "Total Cost: $1.2345");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct I18n {
    catalog: Arc<Catalog>,
    lang: Locale,
}

impl I18n {
    pub fn new(catalog: Arc<Catalog>, lang: Locale) -> Self {
        Self { catalog, lang }
    }

    pub fn from_environment(
        catalog: Arc<Catalog>,
        env: &dyn EnvironmentContext,
        config: &I18nConfig
    ) -> Self {
        Self::new(catalog, config.select_locale(env))
    }

    /// Gets the locale chosen for this translator.
    pub fn lang(&self) -> Locale {
        self.lang
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Translates `key` in the bound locale.
    ///
    /// Missing keys come back verbatim and unknown placeholders stay in the
    /// text; this never fails.
    pub fn t(&self, key: &str, params: Option<&Params>) -> String {
        self.catalog.translate(self.lang, key, params)
    }

    /// Translates `key` in an explicitly chosen locale.
    pub fn t_in(&self, locale: Locale, key: &str, params: Option<&Params>) -> String {
        self.catalog.translate(locale, key, params)
    }
}
