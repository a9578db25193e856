//! Validation helpers for the site configuration document.

use crate::error::{ConfigError, ConfigResult};
use crate::model::SiteConfig;

/// Validate every field of a decoded configuration.
///
/// # Errors
/// Returns [`ConfigError::InvalidField`] for the first field that fails.
pub fn validate(config: &SiteConfig) -> ConfigResult<()> {
    if config.brand.trim().is_empty() {
        return Err(invalid("brand", None, "must not be empty"));
    }
    if config.experts_page_size == 0 {
        return Err(invalid(
            "experts_page_size",
            Some(config.experts_page_size.to_string()),
            "must be at least 1",
        ));
    }
    if config.testimonial_interval_ms == 0 {
        return Err(invalid(
            "testimonial_interval_ms",
            Some(config.testimonial_interval_ms.to_string()),
            "must be positive",
        ));
    }
    if let Some(code) = config
        .supported_locales
        .iter()
        .find(|code| !is_locale_code(code))
    {
        return Err(invalid(
            "supported_locales",
            Some(code.clone()),
            "must be two lowercase ASCII letters",
        ));
    }
    if !config.supports(&config.default_locale) {
        return Err(invalid(
            "default_locale",
            Some(config.default_locale.clone()),
            "must be one of supported_locales",
        ));
    }
    Ok(())
}

fn is_locale_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase())
}

const fn invalid(field: &'static str, value: Option<String>, message: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field,
        value,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = SiteConfig {
            testimonial_interval_ms: 0,
            ..SiteConfig::default()
        };
        let err = validate(&config).expect_err("zero interval");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "testimonial_interval_ms",
                ..
            }
        ));
    }

    #[test]
    fn default_locale_must_be_supported() {
        let config = SiteConfig {
            default_locale: "fr".to_string(),
            ..SiteConfig::default()
        };
        let err = validate(&config).expect_err("unsupported default");
        assert!(err.to_string().contains("default_locale"));
    }

    #[test]
    fn locale_codes_are_two_lowercase_letters() {
        let config = SiteConfig {
            supported_locales: vec!["en".to_string(), "PT-br".to_string()],
            ..SiteConfig::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidField {
                field: "supported_locales",
                ..
            })
        ));
    }
}
