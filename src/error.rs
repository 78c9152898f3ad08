use thiserror::Error;

use crate::locale::Locale;

/// Errors raised while building a [`Catalog`](crate::Catalog) from resource text.
///
/// Translation itself never fails; these only surface at load time.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("translation resource is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid bundle for locale `{locale}`: {reason}")]
    InvalidBundle { locale: String, reason: String },

    #[error("no bundle provided for locale `{0}`")]
    MissingLocale(Locale),

    #[error("unsupported locale tag `{0}` (expected `en` or `zh`)")]
    UnsupportedLocale(String),
}
