use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::{ debug, error };

use crate::error::I18nError;
use crate::interpolate::{ Params, interpolate };
use crate::locale::Locale;
use crate::node::LocaleBundle;
use crate::resolve::{ lookup, resolve };

/// Combined locale documents bundled by `build.rs`.
const BUNDLED_TRANSLATIONS: &str = include_str!(concat!(env!("OUT_DIR"), "/all_translations.json"));

static BUNDLED: Lazy<Arc<Catalog>> = Lazy::new(|| {
    match Catalog::from_combined_json(BUNDLED_TRANSLATIONS) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!("Failed to load bundled translations: {}", e);
            Arc::new(Catalog::empty())
        }
    }
});

/// Every locale bundle, loaded once and never mutated.
///
/// Both bundles are expected to expose the same key shape; a key present in
/// one and absent in the other degrades to the raw key rather than failing.
/// [`Catalog::missing_keys`] reports such gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    en: LocaleBundle,
    zh: LocaleBundle,
}

impl Catalog {
    pub fn new(en: LocaleBundle, zh: LocaleBundle) -> Self {
        Self { en, zh }
    }

    /// A catalog where every lookup echoes its key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The catalog compiled from `locales/*.json`, parsed on first use.
    pub fn bundled() -> Arc<Catalog> {
        Arc::clone(&BUNDLED)
    }

    /// Builds a catalog from one JSON document per locale.
    pub fn from_json_strs(en: &str, zh: &str) -> Result<Self, I18nError> {
        Ok(Self {
            en: LocaleBundle::from_json_str(Locale::En.as_str(), en)?,
            zh: LocaleBundle::from_json_str(Locale::Zh.as_str(), zh)?,
        })
    }

    /// Builds a catalog from a single document keyed by locale tag,
    /// e.g. `{"en": {...}, "zh": {...}}`.
    pub fn from_combined_json(src: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(src)?;
        let Value::Object(mut langs) = value else {
            return Err(I18nError::InvalidBundle {
                locale: "*".to_string(),
                reason: "combined document must map locale tags to objects".to_string(),
            });
        };

        let mut take = |locale: Locale| -> Result<LocaleBundle, I18nError> {
            let value = langs.remove(locale.as_str()).ok_or(I18nError::MissingLocale(locale))?;
            LocaleBundle::from_json_value(locale.as_str(), value)
        };

        let en = take(Locale::En)?;
        let zh = take(Locale::Zh)?;
        Ok(Self { en, zh })
    }

    pub fn bundle(&self, locale: Locale) -> &LocaleBundle {
        match locale {
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
        }
    }

    /// Resolves `key` in the bundle for `locale`, echoing the key on a miss.
    pub fn resolve<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        let text = resolve(self.bundle(locale), key);
        if std::ptr::eq(text, key) {
            debug!(%locale, key, "missing translation");
        }
        text
    }

    /// Resolves `key` for `locale` and substitutes `params` into the result.
    pub fn translate(&self, locale: Locale, key: &str, params: Option<&Params>) -> String {
        interpolate(self.resolve(locale, key), params).into_owned()
    }

    /// Leaf paths defined by some other locale that `locale` cannot resolve.
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        let target = self.bundle(locale);
        let mut missing: Vec<String> = Locale::ALL.iter()
            .filter(|&&other| other != locale)
            .flat_map(|&other| self.bundle(other).leaf_paths())
            .filter(|path| lookup(target, path).is_none())
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}
