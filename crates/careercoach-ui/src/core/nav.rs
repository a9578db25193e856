//! Primary navigation entries.
//!
//! # Design
//! - One table drives the desktop bar, the mobile menu and the footer links.
//! - Entries carry a translation key and an English default.

/// Top-level page reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// Landing page.
    Home,
    /// Process walkthrough.
    HowItWorks,
    /// Career catalogue and coach list.
    ExploreCareers,
    /// Articles.
    Blog,
    /// Questions and answers.
    Faq,
}

impl NavTarget {
    /// All entries in bar order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Home,
            Self::HowItWorks,
            Self::ExploreCareers,
            Self::Blog,
            Self::Faq,
        ]
    }

    /// Browser path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::HowItWorks => "/how-it-works",
            Self::ExploreCareers => "/explore-careers",
            Self::Blog => "/blog",
            Self::Faq => "/faq",
        }
    }

    /// Translation key for the label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::HowItWorks => "nav.howItWorks",
            Self::ExploreCareers => "nav.exploreCareers",
            Self::Blog => "nav.blog",
            Self::Faq => "nav.faq",
        }
    }

    /// English label used when no translation is available.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::HowItWorks => "How It Works",
            Self::ExploreCareers => "Explore Careers",
            Self::Blog => "Blog",
            Self::Faq => "FAQ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn paths_are_absolute_and_distinct() {
        let paths: Vec<&str> = NavTarget::all().into_iter().map(NavTarget::path).collect();
        assert!(paths.iter().all(|path| path.starts_with('/')));
        let mut unique = paths.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), paths.len());
        assert_eq!(NavTarget::Home.path(), "/");
    }

    #[test]
    fn labels_are_translated() {
        let en = TranslationBundle::new(LocaleCode::En);
        let pt = TranslationBundle::new(LocaleCode::Pt);
        for target in NavTarget::all() {
            assert_eq!(
                en.text(target.label_key(), "missing"),
                target.default_label()
            );
            assert_ne!(pt.text(target.label_key(), ""), "");
        }
        assert_eq!(
            pt.text(NavTarget::ExploreCareers.label_key(), ""),
            "Explorar Carreiras"
        );
    }
}
