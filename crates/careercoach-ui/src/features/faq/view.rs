//! FAQ page: tabbed accordion with search scoped to the active tab.

use crate::components::atoms::{CategoryChips, ChipOption, EmptyState, SearchInput};
use crate::core::site::site;
use crate::features::faq::state::FaqState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use careercoach_content::{FaqCategory, FaqEntry, catalog};
use yew::prelude::*;

#[function_component(FaqPage)]
pub(crate) fn faq_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::shared(DEFAULT_LOCALE));
    let state = use_state(FaqState::default);
    let visible = state.visible(&catalog().faqs);

    let options: Vec<ChipOption> = FaqCategory::all()
        .into_iter()
        .map(|category| ChipOption {
            label: AttrValue::from(bundle.text(
                &format!("faq.categories.{}", category.as_str()),
                category.label(),
            )),
            active: category == state.category,
        })
        .collect();

    let on_tab = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            if let Some(category) = FaqCategory::all().get(index) {
                let mut next = (*state).clone();
                next.select_category(*category);
                state.set(next);
            }
        })
    };
    let on_search = {
        let state = state.clone();
        Callback::from(move |term: String| {
            let mut next = (*state).clone();
            next.set_term(term);
            state.set(next);
        })
    };
    let on_toggle = {
        let state = state.clone();
        Callback::from(move |id: u32| {
            let mut next = (*state).clone();
            next.toggle(id);
            state.set(next);
        })
    };

    html! {
        <div class="faq-page">
            <section class="page-hero bg-gradient-to-br from-primary/10 to-secondary/10 py-16 text-center">
                <div class="mx-auto max-w-3xl px-6">
                    <h1 class="text-4xl font-bold md:text-5xl">{bundle.text("faq.title", "Frequently Asked Questions")}</h1>
                    <p class="mt-4 text-lg text-base-content/70">
                        {bundle.text("faq.subtitle", "Find answers to common questions about CareerCoach and our services")}
                    </p>
                    <SearchInput
                        class={classes!("mt-8")}
                        value={AttrValue::from(state.term.clone())}
                        placeholder={Some(AttrValue::from(bundle.text("faq.searchPlaceholder", "Search questions...")))}
                        debounce_ms={site().search_debounce_ms}
                        {on_search}
                    />
                </div>
            </section>
            <div class="mx-auto max-w-3xl px-6 py-12">
                <CategoryChips {options} on_select={on_tab} />
                if visible.is_empty() {
                    <EmptyState
                        class={classes!("mt-8")}
                        title={AttrValue::from(bundle.text("faq.empty.title", "No FAQs found"))}
                        description={Some(AttrValue::from(bundle.text("faq.empty.description", "Try searching with different keywords or browse another category.")))}
                    />
                } else {
                    <div class="mt-8 space-y-3">
                        {for visible.iter().map(|entry| faq_item(entry, state.is_open(entry.id), &on_toggle))}
                    </div>
                }
                <div class="card mt-12 bg-primary text-primary-content">
                    <div class="card-body items-center text-center">
                        <h2 class="card-title">{bundle.text("faq.contact.title", "Still have questions?")}</h2>
                        <p>{bundle.text("faq.contact.description", "Our support team is here to help you with anything you need.")}</p>
                        <button type="button" class="btn btn-secondary mt-2">{bundle.text("faq.contact.cta", "Contact Support")}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn faq_item(entry: &FaqEntry, open: bool, on_toggle: &Callback<u32>) -> Html {
    let id = entry.id;
    let onclick = on_toggle.reform(move |_: MouseEvent| id);
    let panel_id = format!("faq-panel-{id}");
    html! {
        <div class={classes!("collapse", "collapse-arrow", "bg-base-100", "shadow-sm", open.then_some("collapse-open"))}>
            <button
                type="button"
                class="collapse-title w-full text-left font-medium"
                aria-expanded={if open { "true" } else { "false" }}
                aria-controls={panel_id.clone()}
                {onclick}
            >
                {entry.question.clone()}
            </button>
            if open {
                <div id={panel_id} class="collapse-content text-base-content/80">
                    <p>{entry.answer.clone()}</p>
                </div>
            }
        </div>
    }
}
