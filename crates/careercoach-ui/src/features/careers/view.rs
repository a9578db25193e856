//! Explore-careers page: industry cards above the expert directory.

use crate::features::experts::view::ExpertsSection;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::CareerCategory;
use yew::prelude::*;

#[function_component(ExploreCareersPage)]
pub(crate) fn explore_careers_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::shared(DEFAULT_LOCALE));
    let categories: Vec<CareerCategory> = bundle.items("exploreCareers.categories");
    let explore = bundle.text("exploreCareers.explore", "Explore");

    html! {
        <div class="explore-careers-page">
            <section class="page-hero bg-gradient-to-br from-primary/10 to-secondary/10 py-16 text-center">
                <div class="mx-auto max-w-3xl px-6">
                    <h1 class="text-4xl font-bold md:text-5xl">{bundle.text("exploreCareers.title", "Explore Careers")}</h1>
                    <p class="mt-4 text-lg text-base-content/70">
                        {bundle.text("exploreCareers.subtitle", "Discover exciting career opportunities across various industries and find the perfect match for your skills and interests")}
                    </p>
                </div>
            </section>
            <section class="mx-auto grid max-w-7xl gap-6 px-6 py-16 sm:grid-cols-2 lg:grid-cols-3">
                {for categories.iter().map(|category| html! {
                    <article class="career-card card bg-base-100 shadow-sm transition hover:-translate-y-1 hover:shadow-lg">
                        <div class="card-body">
                            <h2 class="card-title">{category.name.clone()}</h2>
                            <p class="text-base-content/70">{category.description.clone()}</p>
                            <div class="card-actions mt-4">
                                <a href="#experts" class="btn btn-outline btn-primary btn-sm">{explore.clone()}</a>
                            </div>
                        </div>
                    </article>
                })}
            </section>
            <ExpertsSection />
        </div>
    }
}
