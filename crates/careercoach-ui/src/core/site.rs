//! Process-wide site configuration.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use careercoach_config::SiteConfig;
use std::sync::LazyLock;

static SITE: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::load_or_default);

/// Validated site configuration, or defaults when the compiled-in document is rejected.
#[must_use]
pub fn site() -> &'static SiteConfig {
    &SITE
}

/// Locales the switcher lists: compiled-in bundles enabled by `config`, in
/// display order. Never empty; falls back to [`DEFAULT_LOCALE`].
#[must_use]
pub fn offered_locales(config: &SiteConfig) -> Vec<LocaleCode> {
    let offered: Vec<LocaleCode> = LocaleCode::all()
        .into_iter()
        .filter(|locale| config.supports(locale.code()))
        .collect();
    if offered.is_empty() {
        vec![DEFAULT_LOCALE]
    } else {
        offered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_config_is_valid() {
        let config = site();
        assert!(config.experts_page_size >= 1);
        assert!(config.supports(&config.default_locale));
    }

    #[test]
    fn switcher_lists_only_configured_locales() {
        let config = SiteConfig {
            supported_locales: vec!["en".to_string()],
            ..SiteConfig::default()
        };
        assert_eq!(offered_locales(&config), vec![LocaleCode::En]);
        assert_eq!(offered_locales(site()), vec![LocaleCode::En, LocaleCode::Pt]);
    }

    #[test]
    fn unknown_configured_codes_fall_back_to_default() {
        let config = SiteConfig {
            supported_locales: vec!["fr".to_string()],
            ..SiteConfig::default()
        };
        assert_eq!(offered_locales(&config), vec![DEFAULT_LOCALE]);
    }
}
