//! Typed site configuration document.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{ConfigError, ConfigResult};
use crate::validate::validate;

const SITE_JSON: &str = include_str!("../site.json");

/// Site-wide tunables consumed by the front-end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand name rendered in the chrome.
    pub brand: String,
    /// Locale selected on first render.
    pub default_locale: String,
    /// Locales the locale switcher offers.
    pub supported_locales: Vec<String>,
    /// Expert cards per page.
    pub experts_page_size: usize,
    /// Milliseconds between automatic testimonial advances.
    pub testimonial_interval_ms: u32,
    /// Milliseconds the startup splash stays visible.
    pub splash_ms: u32,
    /// Debounce window for search inputs, in milliseconds.
    pub search_debounce_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: defaults::BRAND.to_string(),
            default_locale: defaults::DEFAULT_LOCALE.to_string(),
            supported_locales: defaults::SUPPORTED_LOCALES
                .iter()
                .map(ToString::to_string)
                .collect(),
            experts_page_size: defaults::EXPERTS_PAGE_SIZE,
            testimonial_interval_ms: defaults::TESTIMONIAL_INTERVAL_MS,
            splash_ms: defaults::SPLASH_MS,
            search_debounce_ms: defaults::SEARCH_DEBOUNCE_MS,
        }
    }
}

impl SiteConfig {
    /// Decode and validate the compiled-in `site.json`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Decode`] when the document is malformed, or
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn load() -> ConfigResult<Self> {
        Self::from_json(SITE_JSON)
    }

    /// Decode and validate a configuration document.
    ///
    /// # Errors
    /// See [`SiteConfig::load`].
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Decode { source })?;
        validate(&config)?;
        tracing::debug!(
            brand = %config.brand,
            default_locale = %config.default_locale,
            experts_page_size = config.experts_page_size,
            "site configuration loaded"
        );
        Ok(config)
    }

    /// Load the compiled-in document, falling back to defaults on failure.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::error!(error = %err, "site configuration rejected; using defaults");
            Self::default()
        })
    }

    /// Whether `code` is one of the configured locales.
    #[must_use]
    pub fn supports(&self, code: &str) -> bool {
        self.supported_locales.iter().any(|locale| locale == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_document_loads() {
        let config = SiteConfig::load().expect("site.json should be valid");
        assert_eq!(config.brand, "CareerCoach");
        assert_eq!(config.experts_page_size, 3);
        assert_eq!(config.testimonial_interval_ms, 5_000);
        assert!(config.supports("pt"));
    }

    #[test]
    fn absent_keys_take_defaults() {
        let config = SiteConfig::from_json(r#"{"brand":"Acme"}"#).expect("partial document");
        assert_eq!(config.brand, "Acme");
        assert_eq!(config.splash_ms, defaults::SPLASH_MS);
        assert_eq!(config.default_locale, "en");
    }

    #[test]
    fn malformed_document_is_a_decode_error() {
        let err = SiteConfig::from_json("{not json").expect_err("must fail");
        assert!(matches!(err, ConfigError::Decode { .. }));
    }

    #[test]
    fn load_or_default_matches_valid_document() {
        assert_eq!(SiteConfig::load_or_default(), SiteConfig::load().unwrap());
    }

    #[test]
    fn zero_page_size_names_the_field() {
        let err = SiteConfig::from_json(r#"{"experts_page_size":0}"#).expect_err("zero page");
        assert!(err.to_string().contains("experts_page_size"));
    }
}
