//! Expert coaches section.
//!
//! # Design
//! - Category chips and page navigation only touch [`ExpertsState`].
//! - Page controls are hidden when the filtered list fits on one page.

use crate::components::atoms::{CategoryChips, ChipOption, EmptyState, PageDots, Rating};
use crate::core::logic::CategoryFilter;
use crate::core::site::site;
use crate::features::experts::state::{ExpertsState, VISIBLE_SPECIALTIES};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use careercoach_content::{Expert, ExpertCategory, catalog};
use yew::prelude::*;

/// Chip order: wildcard first, then every category.
fn chip_filters() -> Vec<CategoryFilter<ExpertCategory>> {
    std::iter::once(CategoryFilter::All)
        .chain(ExpertCategory::all().into_iter().map(CategoryFilter::Only))
        .collect()
}

#[function_component(ExpertsSection)]
pub(crate) fn experts_section() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::shared(DEFAULT_LOCALE));
    let state = use_state(ExpertsState::default);
    let page_size = site().experts_page_size;

    let filtered = state.filtered(&catalog().experts);
    let page = state.page_of(&filtered, page_size);
    let total_pages = page.total_pages;

    let filters = chip_filters();
    let options: Vec<ChipOption> = filters
        .iter()
        .map(|filter| ChipOption {
            label: AttrValue::from(filter_label(&bundle, filter)),
            active: *filter == state.category,
        })
        .collect();

    let on_chip = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            if let Some(filter) = filters.get(index) {
                state.set((*state).with_category(*filter));
            }
        })
    };
    let on_prev = {
        let state = state.clone();
        Callback::from(move |_| state.set((*state).prev(total_pages)))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_| state.set((*state).next(total_pages)))
    };
    let on_dot = {
        let state = state.clone();
        Callback::from(move |index: usize| state.set((*state).jump(index)))
    };

    html! {
        <section id="experts" class="section bg-base-200/50 py-20">
            <div class="mx-auto max-w-7xl px-6">
                <div class="text-center">
                    <span class="badge badge-primary badge-outline">{bundle.text("experts.badge", "Expert Coaches")}</span>
                    <h2 class="section-title mt-4">{bundle.text("experts.title", "Meet Our Expert Coaches")}</h2>
                    <p class="section-subtitle">{bundle.text("experts.subtitle", "Connect with industry leaders who have walked the path you want to take")}</p>
                </div>
                <CategoryChips class={classes!("mt-10")} {options} on_select={on_chip} />
                if page.items.is_empty() {
                    <EmptyState
                        class={classes!("mt-10")}
                        title={AttrValue::from(bundle.text("experts.empty.title", "No experts in this category yet"))}
                        description={Some(AttrValue::from(bundle.text("experts.empty.description", "Try another category to see more coaches.")))}
                    />
                } else {
                    <div class="mt-10 grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                        {for page.items.iter().map(|expert| expert_card(&bundle, expert))}
                    </div>
                }
                if page.has_multiple_pages() {
                    <div class="mt-10 flex items-center justify-center gap-4">
                        <button
                            type="button"
                            class="btn btn-circle btn-outline btn-sm"
                            aria-label={bundle.text("experts.prev", "Previous experts")}
                            onclick={on_prev}
                        >{"‹"}</button>
                        <PageDots
                            count={total_pages}
                            active={page.index}
                            label={AttrValue::from(bundle.text("experts.page", "Go to page"))}
                            on_select={on_dot}
                        />
                        <button
                            type="button"
                            class="btn btn-circle btn-outline btn-sm"
                            aria-label={bundle.text("experts.next", "Next experts")}
                            onclick={on_next}
                        >{"›"}</button>
                    </div>
                }
                <div class="mt-12 text-center">
                    <button type="button" class="btn btn-primary btn-lg">{bundle.text("experts.cta", "Find My Perfect Coach")}</button>
                </div>
            </div>
        </section>
    }
}

fn filter_label(bundle: &TranslationBundle, filter: &CategoryFilter<ExpertCategory>) -> String {
    match filter {
        CategoryFilter::All => bundle.text("experts.all", "All Experts"),
        CategoryFilter::Only(category) => bundle.text(
            &format!("experts.categories.{}", category.as_str()),
            category.label(),
        ),
    }
}

fn expert_card(bundle: &TranslationBundle, expert: &Expert) -> Html {
    let (specialties, hidden) = expert.visible_specialties(VISIBLE_SPECIALTIES);
    html! {
        <article class="expert-card card bg-base-100 shadow-sm transition hover:-translate-y-1 hover:shadow-lg">
            <div class="card-body">
                <div class="flex items-start gap-4">
                    <div class="avatar placeholder">
                        <div class="w-14 rounded-full bg-primary text-primary-content">
                            <span class="text-xl">{expert.initial()}</span>
                        </div>
                    </div>
                    <div class="flex-1">
                        <div class="flex items-center gap-2">
                            <h3 class="card-title text-lg">{expert.name.clone()}</h3>
                            if expert.featured {
                                <span class="badge badge-secondary badge-sm">{bundle.text("experts.featured", "Featured")}</span>
                            }
                        </div>
                        <p class="text-sm text-base-content/70">{format!("{} · {}", expert.title, expert.company)}</p>
                        <p class="text-xs text-base-content/60">{expert.location.clone()}</p>
                    </div>
                </div>
                <div class="mt-3 flex items-center gap-2 text-sm">
                    <Rating value={expert.rating} />
                    <span class="font-semibold">{format!("{:.1}", expert.rating)}</span>
                    <span class="text-base-content/60">
                        {format!("({} {})", expert.review_count, bundle.text("experts.reviews", "reviews"))}
                    </span>
                </div>
                <p class="text-sm text-base-content/70">
                    {format!("{} {}", expert.experience_years, bundle.text("experts.years", "yrs experience"))}
                </p>
                <div class="mt-2 flex flex-wrap gap-2">
                    {for specialties.iter().map(|specialty| html! {
                        <span class="badge badge-ghost">{specialty.clone()}</span>
                    })}
                    if hidden > 0 {
                        <span class="badge badge-outline">{format!("+{hidden} {}", bundle.text("experts.more", "more"))}</span>
                    }
                </div>
                <p class="mt-2 text-xs text-base-content/60">
                    {format!("{} {}", bundle.text("experts.languages", "Languages:"), expert.languages.join(", "))}
                </p>
                <div class="mt-4 flex items-center justify-between">
                    <div>
                        <span class="text-2xl font-bold">{format!("${}", expert.hourly_rate)}</span>
                        <span class="text-sm text-base-content/60">{bundle.text("experts.perHour", "/hour")}</span>
                    </div>
                    <div class="text-right text-xs">
                        <p class="text-base-content/60">{bundle.text("experts.nextAvailable", "Next available")}</p>
                        <p class="font-semibold text-success">{expert.next_available.clone()}</p>
                    </div>
                </div>
                <div class="card-actions mt-4">
                    <button type="button" class="btn btn-primary btn-block">{bundle.text("experts.bookSession", "Book Session")}</button>
                </div>
            </div>
        </article>
    }
}
