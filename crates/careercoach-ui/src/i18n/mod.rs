//! Lightweight JSON-backed translations with per-locale bundles.
//!
//! # Design
//! - Bundles are compiled in and parsed once into a shared [`LocaleTable`].
//! - Every lookup is total: selected locale, then English, then the caller's
//!   literal default.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, LazyLock};

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English.
    En,
    /// Portuguese.
    Pt,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Pt]
    }

    /// Two-letter code for the locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Human-friendly label for dropdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Pt => "Português",
        }
    }

    /// Short tag shown on the locale trigger.
    #[must_use]
    pub const fn short(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Pt => "PT",
        }
    }

    /// Map an arbitrary language tag (`pt-BR`, `EN`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }

    /// Like [`LocaleCode::from_lang_tag`], falling back to [`DEFAULT_LOCALE`].
    #[must_use]
    pub fn resolve(tag: &str) -> Self {
        Self::from_lang_tag(tag).unwrap_or_else(|| {
            tracing::debug!(tag, "unknown locale tag; using default locale");
            DEFAULT_LOCALE
        })
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    locale: LocaleCode,
    tree: Arc<Value>,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Parse the compiled-in bundle for `locale`.
    ///
    /// A malformed document is logged and treated as empty, so every lookup
    /// degrades to English.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        Self::from_json(locale, raw_locale(locale))
    }

    /// Build a bundle from a raw JSON document.
    #[must_use]
    pub fn from_json(locale: LocaleCode, raw: &str) -> Self {
        let tree = serde_json::from_str(raw).unwrap_or_else(|err| {
            tracing::error!(locale = locale.code(), error = %err, "translation bundle rejected");
            Value::Null
        });
        Self {
            locale,
            tree: Arc::new(tree),
        }
    }

    /// Shared bundle for `locale` from the global [`LocaleTable`].
    #[must_use]
    pub fn shared(locale: LocaleCode) -> Self {
        locale_table().bundle(locale).clone()
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve_text(&self.tree, path)
            .or_else(|| {
                tracing::debug!(locale = self.locale.code(), path, "translation missing");
                resolve_text(&EN_FALLBACK.tree, path)
            })
            .unwrap_or_else(|| default.to_string())
    }

    /// Decode the array at `path` into records, with English fallback.
    ///
    /// Returns an empty list when neither bundle holds a decodable array.
    #[must_use]
    pub fn items<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        resolve_items(&self.tree, path)
            .or_else(|| {
                tracing::debug!(locale = self.locale.code(), path, "translated list missing");
                resolve_items(&EN_FALLBACK.tree, path)
            })
            .unwrap_or_default()
    }

    /// Locale backing this bundle.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }
}

/// Fixed map from locale code to its parsed bundle.
#[derive(Debug)]
pub struct LocaleTable {
    en: TranslationBundle,
    pt: TranslationBundle,
}

impl LocaleTable {
    /// Parse every compiled-in bundle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            en: TranslationBundle::new(LocaleCode::En),
            pt: TranslationBundle::new(LocaleCode::Pt),
        }
    }

    /// Bundle for a known locale.
    #[must_use]
    pub const fn bundle(&self, locale: LocaleCode) -> &TranslationBundle {
        match locale {
            LocaleCode::En => &self.en,
            LocaleCode::Pt => &self.pt,
        }
    }

    /// Bundle for an arbitrary code; unknown codes select English.
    #[must_use]
    pub fn resolve(&self, code: &str) -> &TranslationBundle {
        self.bundle(LocaleCode::resolve(code))
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::new()
    }
}

static LOCALE_TABLE: LazyLock<LocaleTable> = LazyLock::new(LocaleTable::new);

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

/// Shared locale table parsed on first use.
#[must_use]
pub fn locale_table() -> &'static LocaleTable {
    &LOCALE_TABLE
}

fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    Some(node)
}

fn resolve_text(tree: &Value, path: &str) -> Option<String> {
    lookup(tree, path)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}

fn resolve_items<T: DeserializeOwned>(tree: &Value, path: &str) -> Option<Vec<T>> {
    let node = lookup(tree, path).filter(|node| node.is_array())?;
    serde_json::from_value(node.clone())
        .map_err(|err| tracing::debug!(path, error = %err, "translated list malformed"))
        .ok()
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Pt => include_str!("../../i18n/pt.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Titled {
        title: String,
    }

    #[test]
    fn unknown_codes_resolve_to_english() {
        let table = LocaleTable::new();
        assert_eq!(table.resolve("fr").locale(), LocaleCode::En);
        assert_eq!(table.resolve("").locale(), LocaleCode::En);
        assert_eq!(table.resolve("PT-br").locale(), LocaleCode::Pt);
        assert_eq!(table.resolve("pt").locale(), LocaleCode::Pt);
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Pt);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
        assert_eq!(bundle.text("", "fallback"), "fallback");
    }

    #[test]
    fn portuguese_gaps_fall_back_to_english() {
        let bundle = TranslationBundle::new(LocaleCode::Pt);
        assert_eq!(bundle.text("nav.home", "Home"), "Início");
        assert_eq!(
            bundle.text("testimonials.title", "Testimonials"),
            "Success Stories"
        );
        assert_eq!(bundle.text("notFound.home", "Home"), "Back to home");
    }

    #[test]
    fn empty_leaves_use_the_default() {
        let bundle = TranslationBundle::from_json(LocaleCode::En, r#"{"nav":{"home":""}}"#);
        assert_eq!(bundle.text("nav.bogus", "Default"), "Default");
        assert_eq!(bundle.text("nav.home", "Home"), "Home");
    }

    #[test]
    fn malformed_bundle_degrades_to_english() {
        let bundle = TranslationBundle::from_json(LocaleCode::Pt, "{not json");
        assert_eq!(bundle.text("nav.faq", "x"), "FAQ");
        assert_eq!(bundle.items::<Titled>("howItWorks.journey").len(), 4);
    }

    #[test]
    fn items_decode_records_and_default_to_empty() {
        let bundle = TranslationBundle::new(LocaleCode::Pt);
        let journey: Vec<Titled> = bundle.items("howItWorks.journey");
        assert_eq!(journey.len(), 4);
        assert_eq!(journey[0].title, "Encontre Seu Especialista");
        assert!(bundle.items::<Titled>("nav.home").is_empty());
        assert!(bundle.items::<Titled>("missing.list").is_empty());
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = locale_table().bundle(locale);
            assert_eq!(bundle.locale(), locale);
            assert_eq!(bundle.text("meta.label", ""), locale.label());
            assert_eq!(LocaleCode::from_lang_tag(locale.code()), Some(locale));
        }
    }

    #[test]
    fn shared_bundles_compare_by_locale() {
        assert_eq!(
            TranslationBundle::shared(LocaleCode::En),
            TranslationBundle::new(LocaleCode::En)
        );
        assert_ne!(
            TranslationBundle::shared(LocaleCode::En),
            TranslationBundle::shared(LocaleCode::Pt)
        );
    }
}
