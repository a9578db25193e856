//! Application root: locale context, splash gate and routed pages.
//!
//! # Design
//! - The yewdux store owns the locale; the root derives the bundle from it and
//!   provides it to every page through context.
//! - Routing lives in an inner component so `use_route` runs under the router.

use crate::components::shell::AppShell;
use crate::components::splash::Splash;
use crate::core::site::site;
use crate::core::store::{AppStore, select_locale};
use crate::features::blog::view::BlogPage;
use crate::features::careers::view::ExploreCareersPage;
use crate::features::faq::view::FaqPage;
use crate::features::home::view::HomePage;
use crate::features::how_it_works::view::HowItWorksPage;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use gloo_timers::callback::Timeout;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod routes;

#[function_component(CareerCoachApp)]
pub(crate) fn careercoach_app() -> Html {
    let locale = use_selector(|store: &AppStore| store.locale);
    let locale = *locale;
    let bundle = use_memo(move |_| TranslationBundle::shared(locale), locale);
    let splash_visible = use_state(|| site().splash_ms > 0);

    {
        let splash_visible = splash_visible.clone();
        use_effect_with_deps(
            move |_| {
                let show = *splash_visible;
                let handle = show.then(|| {
                    Timeout::new(site().splash_ms, move || splash_visible.set(false))
                });
                move || drop(handle)
            },
            (),
        );
    }
    use_effect_with_deps(
        move |locale| {
            apply_document_lang(*locale);
            || ()
        },
        locale,
    );

    let on_locale = Callback::from(|next: LocaleCode| {
        Dispatch::<AppStore>::new().reduce_mut(|store| {
            select_locale(store, next);
        });
    });
    let brand = AttrValue::from(site().brand.clone());

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            if *splash_visible {
                <Splash
                    brand={brand.clone()}
                    tagline={AttrValue::from(bundle.text("splash.tagline", "Preparing your career journey"))}
                />
            }
            <BrowserRouter>
                <SiteRoutes {brand} {locale} {on_locale} />
            </BrowserRouter>
        </ContextProvider<TranslationBundle>>
    }
}

#[derive(Properties, PartialEq)]
struct SiteRoutesProps {
    brand: AttrValue,
    locale: LocaleCode,
    on_locale: Callback<LocaleCode>,
}

#[function_component(SiteRoutes)]
fn site_routes(props: &SiteRoutesProps) -> Html {
    let active = use_route::<Route>().unwrap_or(Route::NotFound);
    use_effect_with_deps(
        |_| {
            gloo::utils::window().scroll_to_with_x_and_y(0.0, 0.0);
            || ()
        },
        active,
    );
    html! {
        <AppShell
            brand={props.brand.clone()}
            {active}
            locale={props.locale}
            on_locale={props.on_locale.clone()}
        >
            <Switch<Route> render={switch} />
        </AppShell>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::HowItWorks => html! { <HowItWorksPage /> },
        Route::ExploreCareers => html! { <ExploreCareersPage /> },
        Route::Blog => html! { <BlogPage /> },
        Route::Faq => html! { <FaqPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::shared(DEFAULT_LOCALE));
    html! {
        <section class="flex min-h-[60vh] flex-col items-center justify-center gap-4 px-6 text-center">
            <span class="text-7xl font-extrabold text-primary">{"404"}</span>
            <h1 class="text-3xl font-bold">{bundle.text("notFound.title", "Page not found")}</h1>
            <p class="text-base-content/70">{bundle.text("notFound.description", "The page you were looking for does not exist.")}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {bundle.text("notFound.home", "Back to home")}
            </Link<Route>>
        </section>
    }
}

fn apply_document_lang(locale: LocaleCode) {
    if let Some(root) = gloo::utils::document().document_element() {
        root.set_attribute("lang", locale.code()).ok();
    }
}

/// Install panic and log hooks, then mount the app under `#root` when present.
pub fn run_app() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    let config = site();
    tracing::info!(
        brand = %config.brand,
        default_locale = %config.default_locale,
        locales = config.supported_locales.len(),
        "starting careercoach ui"
    );
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CareerCoachApp>::with_root(root).render();
    } else {
        yew::Renderer::<CareerCoachApp>::new().render();
    }
}
