//! Translated copy records decoded from the locale bundles.
//!
//! Each record mirrors one array in the bundle JSON and is read with
//! [`TranslationBundle::items`], so a locale missing a list falls back to
//! English and a malformed list renders nothing.

use crate::i18n::TranslationBundle;
use serde::Deserialize;

/// Headline figure shown under the hero copy.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HeroStat {
    /// Figure, e.g. `500+`.
    pub value: String,
    /// Caption.
    pub label: String,
}

/// Title plus description pair used by feature grids and career cards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeatureCopy {
    /// Card heading.
    pub title: String,
    /// Card body.
    pub description: String,
}

/// One numbered step in the coaching journey.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct JourneyStep {
    /// Step heading.
    pub title: String,
    /// Step body.
    pub description: String,
    /// Short bullet points.
    #[serde(default)]
    pub points: Vec<String>,
}

/// Career field card on the explore page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CareerCategory {
    /// Field name.
    pub name: String,
    /// Teaser.
    pub description: String,
}

/// Column of footer links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterSection {
    /// Column heading.
    pub title: String,
    /// Link labels.
    pub links: Vec<String>,
}

/// Copy for the landing page, resolved once per locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeCopy {
    /// Hero figures.
    pub stats: Vec<HeroStat>,
    /// Three headline benefits.
    pub highlights: Vec<FeatureCopy>,
    /// Feature grid.
    pub features: Vec<FeatureCopy>,
    /// Four-step journey.
    pub journey: Vec<JourneyStep>,
}

impl HomeCopy {
    /// Decode every landing-page list from `bundle`.
    #[must_use]
    pub fn from_bundle(bundle: &TranslationBundle) -> Self {
        Self {
            stats: bundle.items("hero.stats"),
            highlights: bundle.items("features.highlights"),
            features: bundle.items("features.items"),
            journey: bundle.items("howItWorks.journey"),
        }
    }
}

/// The three process steps on the how-it-works page.
#[must_use]
pub fn process_steps(bundle: &TranslationBundle) -> Vec<FeatureCopy> {
    const DEFAULTS: [(&str, &str); 3] = [
        (
            "Assessment",
            "Take our comprehensive career assessment to understand your strengths and interests.",
        ),
        (
            "Matching",
            "Get matched with personalized career paths and opportunities that fit your profile.",
        ),
        (
            "Growth",
            "Follow your personalized roadmap with expert guidance and continuous support.",
        ),
    ];
    DEFAULTS
        .iter()
        .zip(1..)
        .map(|((title, description), step)| FeatureCopy {
            title: bundle.text(&format!("howItWorks.step{step}.title"), title),
            description: bundle.text(&format!("howItWorks.step{step}.description"), description),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    #[test]
    fn home_copy_decodes_in_both_locales() {
        for locale in LocaleCode::all() {
            let copy = HomeCopy::from_bundle(&TranslationBundle::new(locale));
            assert_eq!(copy.stats.len(), 3);
            assert_eq!(copy.highlights.len(), 3);
            assert_eq!(copy.features.len(), 6);
            assert_eq!(copy.journey.len(), 4);
            assert!(copy.journey.iter().all(|step| step.points.len() == 2));
        }
    }

    #[test]
    fn home_copy_is_determined_by_bundle_locale() {
        let shared = TranslationBundle::shared(LocaleCode::Pt);
        let fresh = TranslationBundle::new(LocaleCode::Pt);
        assert_eq!(shared.locale(), fresh.locale());
        assert_eq!(HomeCopy::from_bundle(&shared), HomeCopy::from_bundle(&fresh));

        let en = HomeCopy::from_bundle(&TranslationBundle::shared(LocaleCode::En));
        let pt = HomeCopy::from_bundle(&shared);
        assert_ne!(en, pt);
        assert_eq!(pt.journey[0].title, "Encontre Seu Especialista");
    }

    #[test]
    fn career_and_footer_lists_decode() {
        let bundle = TranslationBundle::new(LocaleCode::Pt);
        let careers: Vec<CareerCategory> = bundle.items("exploreCareers.categories");
        assert_eq!(careers.len(), 6);
        assert_eq!(careers[0].name, "Tecnologia");
        let footer: Vec<FooterSection> = bundle.items("footer.sections");
        assert_eq!(footer.len(), 4);
    }

    #[test]
    fn process_steps_are_translated() {
        let steps = process_steps(&TranslationBundle::new(LocaleCode::Pt));
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].title, "Avaliação");
        assert_eq!(steps[2].title, "Crescimento");
    }

    #[test]
    fn missing_journey_defaults_point_lists() {
        let bundle = TranslationBundle::from_json(
            LocaleCode::En,
            r#"{"steps":[{"title":"t","description":"d"}]}"#,
        );
        let steps: Vec<JourneyStep> = bundle.items("steps");
        assert_eq!(steps.len(), 1);
        assert!(steps[0].points.is_empty());
    }
}
