//! Blog page: featured strip, search and category chips over the post grid.

use crate::components::atoms::{CategoryChips, ChipOption, EmptyState, SearchInput};
use crate::core::logic::CategoryFilter;
use crate::core::site::site;
use crate::features::blog::state::BlogState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use careercoach_content::{BlogCategory, BlogPost, catalog};
use yew::prelude::*;

fn chip_filters() -> Vec<CategoryFilter<BlogCategory>> {
    std::iter::once(CategoryFilter::All)
        .chain(BlogCategory::all().into_iter().map(CategoryFilter::Only))
        .collect()
}

#[function_component(BlogPage)]
pub(crate) fn blog_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::shared(DEFAULT_LOCALE));
    let state = use_state(BlogState::default);
    let posts = &catalog().blog_posts;
    let visible = state.visible(posts);

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
                let mut next = (*state).clone();
                next.category = *filter;
                state.set(next);
            }
        })
    };
    let on_search = {
        let state = state.clone();
        Callback::from(move |term: String| {
            let mut next = (*state).clone();
            next.term = term;
            state.set(next);
        })
    };

    html! {
        <div class="blog-page">
            <section class="page-hero bg-gradient-to-br from-primary/10 to-secondary/10 py-16 text-center">
                <div class="mx-auto max-w-3xl px-6">
                    <h1 class="text-4xl font-bold md:text-5xl">{bundle.text("blog.title", "Career Blog")}</h1>
                    <p class="mt-4 text-lg text-base-content/70">
                        {bundle.text("blog.subtitle", "Latest insights, tips, and trends to help you navigate your career journey")}
                    </p>
                    <SearchInput
                        class={classes!("mt-8")}
                        value={AttrValue::from(state.term.clone())}
                        placeholder={Some(AttrValue::from(bundle.text("blog.searchPlaceholder", "Search articles...")))}
                        debounce_ms={site().search_debounce_ms}
                        {on_search}
                    />
                </div>
            </section>
            <div class="mx-auto max-w-7xl px-6 py-12">
                if state.show_featured() {
                    <section class="mb-12">
                        <h2 class="mb-6 text-2xl font-bold">{bundle.text("blog.featured", "Featured Articles")}</h2>
                        <div class="grid gap-6 md:grid-cols-2">
                            {for catalog().featured_posts().map(|post| post_card(&bundle, post, true))}
                        </div>
                    </section>
                }
                <CategoryChips {options} on_select={on_chip} />
                <h2 class="mb-6 mt-10 text-2xl font-bold">{bundle.text("blog.latest", "Latest Articles")}</h2>
                if visible.is_empty() {
                    <EmptyState
                        title={AttrValue::from(bundle.text("blog.empty.title", "No articles found"))}
                        description={Some(AttrValue::from(bundle.text("blog.empty.description", "Try a different search term or category.")))}
                    />
                } else {
                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                        {for visible.iter().map(|post| post_card(&bundle, post, false))}
                    </div>
                }
            </div>
        </div>
    }
}

fn filter_label(bundle: &TranslationBundle, filter: &CategoryFilter<BlogCategory>) -> String {
    match filter {
        CategoryFilter::All => bundle.text("blog.categories.all", "All"),
        CategoryFilter::Only(category) => category_label(bundle, *category),
    }
}

fn category_label(bundle: &TranslationBundle, category: BlogCategory) -> String {
    bundle.text(
        &format!("blog.categories.{}", category.as_str()),
        category.label(),
    )
}

fn post_card(bundle: &TranslationBundle, post: &BlogPost, featured: bool) -> Html {
    let classes = classes!(
        "post-card",
        "card",
        "bg-base-100",
        "shadow-sm",
        "transition",
        "hover:shadow-lg",
        featured.then_some("post-card-featured")
    );
    html! {
        <article class={classes}>
            <div class="card-body">
                <span class="badge badge-primary badge-outline">{category_label(bundle, post.category)}</span>
                <h3 class="card-title mt-2">{post.title.clone()}</h3>
                <p class="text-sm text-base-content/70">{post.excerpt.clone()}</p>
                <div class="mt-4 flex flex-wrap items-center gap-x-4 gap-y-1 text-xs text-base-content/60">
                    <span>{post.author.clone()}</span>
                    <time datetime={post.date.to_string()}>{post.display_date()}</time>
                    <span>{format!("{} {}", post.read_time_minutes, bundle.text("blog.minRead", "min read"))}</span>
                </div>
                <div class="card-actions mt-4">
                    <button type="button" class="btn btn-link px-0">{bundle.text("blog.readMore", "Read More")}</button>
                </div>
            </div>
        </article>
    }
}
