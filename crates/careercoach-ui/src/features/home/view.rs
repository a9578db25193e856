//! Landing page.
//!
//! # Design
//! - Section copy is decoded once per locale through [`HomeCopy`].
//! - The expert and testimonial sections own their own state.

use crate::app::Route;
use crate::features::experts::view::ExpertsSection;
use crate::features::testimonials::view::TestimonialsSection;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::{FeatureCopy, HomeCopy, JourneyStep};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::shared(DEFAULT_LOCALE));
    let copy = {
        let locale = bundle.locale();
        let bundle = bundle.clone();
        use_memo(move |_| HomeCopy::from_bundle(&bundle), locale)
    };

    html! {
        <>
            <section class="hero-section bg-gradient-to-br from-primary/10 via-base-100 to-secondary/10 py-24">
                <div class="mx-auto max-w-5xl px-6 text-center">
                    <span class="badge badge-success gap-2 p-3">
                        <span class="live-dot" aria-hidden="true"></span>
                        {bundle.text("hero.badge", "Live Career Coaching Available")}
                    </span>
                    <h1 class="mt-6 text-5xl font-extrabold leading-tight md:text-6xl">
                        {bundle.text("hero.title", "Transform Your Career Journey")}
                    </h1>
                    <p class="mx-auto mt-6 max-w-2xl text-xl text-base-content/70">
                        {bundle.text("hero.subtitle", "Get personalized career guidance from AI-powered coaches and industry experts")}
                    </p>
                    <div class="mt-10 flex flex-wrap justify-center gap-4">
                        <a href="#experts" class="btn btn-primary btn-lg">{bundle.text("hero.cta", "Start Your Journey")}</a>
                        <Link<Route> to={Route::HowItWorks} classes="btn btn-outline btn-lg">
                            {bundle.text("hero.secondaryCta", "Learn More")}
                        </Link<Route>>
                    </div>
                    <div class="stats stats-vertical mt-14 bg-base-100 shadow md:stats-horizontal">
                        {for copy.stats.iter().map(|stat| html! {
                            <div class="stat place-items-center">
                                <div class="stat-value text-primary">{stat.value.clone()}</div>
                                <div class="stat-desc text-sm">{stat.label.clone()}</div>
                            </div>
                        })}
                    </div>
                </div>
            </section>
            <section id="features" class="section py-20">
                <div class="mx-auto max-w-7xl px-6">
                    <div class="text-center">
                        <h2 class="section-title">{bundle.text("features.title", "Why Choose CareerCoach?")}</h2>
                        <p class="section-subtitle">{bundle.text("features.subtitle", "Everything you need to accelerate your career growth")}</p>
                    </div>
                    <div class="mt-12 grid gap-6 md:grid-cols-3">
                        {for copy.highlights.iter().map(|item| feature_card(item, true))}
                    </div>
                    <div class="mt-6 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        {for copy.features.iter().map(|item| feature_card(item, false))}
                    </div>
                </div>
            </section>
            <section id="journey" class="section bg-base-200/50 py-20">
                <div class="mx-auto max-w-7xl px-6">
                    <div class="text-center">
                        <h2 class="section-title">{bundle.text("howItWorks.title", "How It Works")}</h2>
                        <p class="section-subtitle">
                            {bundle.text("howItWorks.subtitle", "Discover how CareerCoach transforms your professional journey in three simple steps")}
                        </p>
                    </div>
                    <ol class="mt-12 grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                        {for copy.journey.iter().enumerate().map(|(index, step)| journey_step(index, step))}
                    </ol>
                </div>
            </section>
            <ExpertsSection />
            <TestimonialsSection />
            <section id="cta" class="bg-gradient-to-r from-primary to-secondary py-20 text-primary-content">
                <div class="mx-auto max-w-3xl px-6 text-center">
                    <h2 class="text-4xl font-bold">{bundle.text("cta.title", "Ready to Accelerate Your Career?")}</h2>
                    <p class="mt-4 text-lg opacity-90">
                        {bundle.text("cta.subtitle", "Join thousands of professionals who have transformed their careers with CareerCoach")}
                    </p>
                    <button type="button" class="btn btn-lg mt-8 bg-base-100 text-primary">{bundle.text("cta.button", "Get Started Free")}</button>
                    <p class="mt-3 text-sm opacity-80">{bundle.text("cta.note", "No credit card required")}</p>
                </div>
            </section>
        </>
    }
}

pub(crate) fn feature_card(item: &FeatureCopy, highlight: bool) -> Html {
    let classes = classes!(
        "feature-card",
        "card",
        "shadow-sm",
        "transition",
        "hover:-translate-y-1",
        if highlight { "bg-primary/5" } else { "bg-base-100" }
    );
    html! {
        <div class={classes}>
            <div class="card-body">
                <h3 class="card-title">{item.title.clone()}</h3>
                <p class="text-base-content/70">{item.description.clone()}</p>
            </div>
        </div>
    }
}

pub(crate) fn journey_step(index: usize, step: &JourneyStep) -> Html {
    html! {
        <li class="journey-step card bg-base-100 shadow-sm">
            <div class="card-body">
                <span class="step-number">{index + 1}</span>
                <h3 class="card-title mt-2">{step.title.clone()}</h3>
                <p class="text-sm text-base-content/70">{step.description.clone()}</p>
                <ul class="mt-3 space-y-1 text-sm">
                    {for step.points.iter().map(|point| html! {
                        <li class="flex gap-2"><span class="text-success">{"✓"}</span>{point.clone()}</li>
                    })}
                </ul>
            </div>
        </li>
    }
}
