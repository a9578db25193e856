//! App-wide yewdux store.
//!
//! # Design
//! - The selected locale is the only shared state; page state lives in the
//!   owning feature component.
//! - The locale is not persisted; every load starts from the configured default.

use crate::core::site::site;
use crate::i18n::LocaleCode;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Locale every visible string is resolved against.
    pub locale: LocaleCode,
}

impl Default for AppStore {
    fn default() -> Self {
        Self {
            locale: LocaleCode::resolve(&site().default_locale),
        }
    }
}

impl AppStore {
    /// Store with `locale` selected.
    #[must_use]
    pub const fn with_locale(locale: LocaleCode) -> Self {
        Self { locale }
    }
}

/// Select a new locale in `store`; returns whether it changed.
pub fn select_locale(store: &mut AppStore, locale: LocaleCode) -> bool {
    if store.locale == locale {
        return false;
    }
    tracing::info!(from = store.locale.code(), to = locale.code(), "locale switched");
    store.locale = locale;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_comes_from_config() {
        assert_eq!(AppStore::default().locale, LocaleCode::En);
    }

    #[test]
    fn select_locale_reports_changes() {
        let mut store = AppStore::default();
        assert!(select_locale(&mut store, LocaleCode::Pt));
        assert_eq!(store, AppStore::with_locale(LocaleCode::Pt));
        assert!(!select_locale(&mut store, LocaleCode::Pt));
    }
}
