use bevy::prelude::*;

use crate::catalog::Catalog;
use crate::locale::Headless;
use crate::translator::{ I18n, I18nConfig };

/// Bevy plugin providing the [`I18n`] resource.
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use genpanel_intl::{ I18n, I18nConfig, I18nPlugin, Locale };
///
/// App::new().add_plugins(I18nPlugin::with_config(I18nConfig {
///     locale: Some(Locale::En),
///     ..Default::default()
/// }));
///
/// fn title(i18n: Res<I18n>) {
///     println!("{}", i18n.t("generate.title", None));
/// }
/// ```
#[derive(Default)]
pub struct I18nPlugin {
    /// Configuration for the plugin
    pub config: I18nConfig,
}

impl I18nPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: I18nConfig) -> Self {
        Self { config }
    }
}

impl Plugin for I18nPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone()).init_resource::<I18n>();
    }
}

impl FromWorld for I18n {
    fn from_world(world: &mut World) -> Self {
        let config = world.get_resource::<I18nConfig>().cloned().unwrap_or_default();
        I18n::from_environment(Catalog::bundled(), &Headless, &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use pretty_assertions::assert_eq;

    #[test]
    fn plugin_inserts_resources() {
        let mut app = App::new();
        app.add_plugins(I18nPlugin::with_config(I18nConfig {
            locale: Some(Locale::En),
            ..Default::default()
        }));

        let i18n = app.world().resource::<I18n>();
        assert_eq!(i18n.lang(), Locale::En);
        assert_eq!(i18n.t("mode.edit", None), "Edit");
        assert_eq!(app.world().resource::<I18nConfig>().locale, Some(Locale::En));
    }

    #[test]
    fn plugin_forced_zh() {
        let mut app = App::new();
        app.add_plugins(I18nPlugin::with_config(I18nConfig {
            locale: Some(Locale::Zh),
            ..Default::default()
        }));

        assert_eq!(app.world().resource::<I18n>().t("mode.generate", None), "生成");
    }

    #[test]
    fn default_plugin_uses_default_locale() {
        let mut app = App::new();
        app.add_plugins(I18nPlugin::new());
        assert_eq!(app.world().resource::<I18n>().lang(), Locale::Zh);
    }

    #[test]
    fn configured_default_locale_applies() {
        let mut app = App::new();
        app.add_plugins(I18nPlugin::with_config(I18nConfig {
            default_locale: Locale::En,
            locale: None,
        }));
        assert_eq!(app.world().resource::<I18n>().t("mode.generate", None), "Generate");
    }
}
