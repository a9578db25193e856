//! How-it-works page: three process steps followed by the detailed journey.

use crate::features::home::view::{feature_card, journey_step};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::{JourneyStep, process_steps};
use yew::prelude::*;

#[function_component(HowItWorksPage)]
pub(crate) fn how_it_works_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::shared(DEFAULT_LOCALE));
    let steps = process_steps(&bundle);
    let journey: Vec<JourneyStep> = bundle.items("howItWorks.journey");

    html! {
        <div class="how-it-works-page">
            <section class="page-hero bg-gradient-to-br from-primary/10 to-secondary/10 py-16 text-center">
                <div class="mx-auto max-w-3xl px-6">
                    <h1 class="text-4xl font-bold md:text-5xl">{bundle.text("howItWorks.title", "How It Works")}</h1>
                    <p class="mt-4 text-lg text-base-content/70">
                        {bundle.text("howItWorks.subtitle", "Discover how CareerCoach transforms your professional journey in three simple steps")}
                    </p>
                </div>
            </section>
            <section class="mx-auto max-w-7xl px-6 py-16">
                <div class="grid gap-6 md:grid-cols-3">
                    {for steps.iter().map(|step| feature_card(step, true))}
                </div>
            </section>
            <section class="bg-base-200/50 py-16">
                <ol class="mx-auto grid max-w-7xl gap-6 px-6 md:grid-cols-2 lg:grid-cols-4">
                    {for journey.iter().enumerate().map(|(index, step)| journey_step(index, step))}
                </ol>
                <div class="mt-12 text-center">
                    <a href="/#experts" class="btn btn-primary btn-lg">{bundle.text("howItWorks.cta", "Get Started Now")}</a>
                </div>
            </section>
        </div>
    }
}
