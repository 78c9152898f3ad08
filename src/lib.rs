#![doc = include_str!("../README.md")]

//! # genpanel-intl
//!
//! Translation lookup for the image generation control panel:
//!
//! - **Nested bundles**: one JSON tree per locale, addressed by dotted key paths
//! - **Two locales**: `en` and `zh`, picked from an injected client context
//! - **Fail-soft**: a missing key renders as the key itself, an unknown
//!   placeholder stays in the text
//! - **Placeholders**: `${name}` substitution from named parameters
//! - **Bundled**: `locales/*.json` is compiled into the binary by `build.rs`
//! - **Bevy**: optional `I18nPlugin` behind the `bevy` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use genpanel_intl::{ t, Catalog, Headless, I18n, I18nConfig, Locale, Params };
//!
//! // Process-wide entry point, no client context so `zh` applies
//! assert_eq!(t("generate.title", None), "生成图片");
//!
//! // Bound once per render pass to whatever the client reports
//! let i18n = I18n::from_environment(Catalog::bundled(), &Headless, &I18nConfig::default());
//! assert_eq!(i18n.lang(), Locale::Zh);
//!
//! let cost = Params::new().with("cost", "0.0420");
//! assert_eq!(i18n.t("history.totalCost", Some(&cost)), "总费用：$0.0420");
//! assert_eq!(i18n.t("history.unknown", None), "history.unknown");
//! ```

mod catalog;
mod error;
mod interpolate;
mod locale;
mod node;
mod resolve;
mod translator;

#[cfg(feature = "bevy")]
mod plugin;

pub use catalog::Catalog;
pub use error::I18nError;
pub use interpolate::{ ParamValue, Params, interpolate };
pub use locale::{
    ClientLanguage,
    DEFAULT_LOCALE,
    EnvironmentContext,
    Headless,
    Locale,
    select_locale,
    select_locale_or,
};
pub use node::{ LocaleBundle, Node };
pub use resolve::{ lookup, resolve };
pub use translator::{ I18n, I18nConfig };

#[cfg(feature = "bevy")]
pub use plugin::I18nPlugin;

/// Translates `key` with the bundled catalog.
///
/// There is no client context at this level, so the locale is always
/// [`DEFAULT_LOCALE`]. Code that knows the client's preference should build
/// an [`I18n`] from a [`ClientLanguage`] instead.
/// Never fails: missing keys are echoed and unknown placeholders are kept.
pub fn t(key: &str, params: Option<&Params>) -> String {
    let locale = select_locale(&Headless);
    Catalog::bundled().translate(locale, key, params)
}

/// Builds [`Params`] inline and calls [`t`].
///
/// Examples:
/// - `t!("generate.title")`
/// - `t!("history.tokens", count = "1,024", cost = "0.0051")`
#[macro_export]
macro_rules! t {
    ($key:expr $(,)?) => {
        $crate::t($key, None)
    };
    ($key:expr, $($name:ident = $value:expr),+ $(,)?) => {{
        let params = $crate::Params::new()$(.with(stringify!($name), $value))+;
        $crate::t($key, Some(&params))
    }};
}
