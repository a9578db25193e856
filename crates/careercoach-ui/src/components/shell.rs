//! Page chrome: sticky navbar with mobile menu, content slot and footer.

use crate::app::Route;
use crate::components::footer::SiteFooter;
use crate::components::locale_menu::LocaleMenu;
use crate::core::nav::NavTarget;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub brand: AttrValue,
    pub active: Route,
    pub locale: LocaleCode,
    pub on_locale: Callback<LocaleCode>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::shared(DEFAULT_LOCALE));
    let nav_open = use_state(|| false);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };
    {
        let nav_open = nav_open.clone();
        use_effect_with_deps(
            move |_| {
                nav_open.set(false);
                || ()
            },
            props.active,
        );
    }

    let items: Vec<(Route, String)> = NavTarget::all()
        .into_iter()
        .map(|target| {
            (
                Route::from(target),
                bundle.text(target.label_key(), target.default_label()),
            )
        })
        .collect();

    html! {
        <div class="app-shell flex min-h-screen flex-col">
            <header class="navbar sticky top-0 z-40 border-b border-base-200 bg-base-100/90 backdrop-blur">
                <div class="mx-auto flex w-full max-w-7xl items-center px-4">
                    <div class="flex-1">
                        <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl font-bold">
                            <span class="brand-mark" aria-hidden="true">{props.brand.chars().next().unwrap_or('C')}</span>
                            {props.brand.clone()}
                        </Link<Route>>
                    </div>
                    <nav class="hidden lg:flex">
                        <ul class="menu menu-horizontal gap-1">
                            {for items.iter().map(|(route, label)| nav_item(*route, label, props.active))}
                        </ul>
                    </nav>
                    <div class="flex items-center gap-2">
                        <LocaleMenu
                            locale={props.locale}
                            label={AttrValue::from(bundle.text("nav.language", "Language"))}
                            on_select={props.on_locale.clone()}
                        />
                        <button type="button" class="btn btn-ghost btn-sm hidden md:inline-flex">
                            {bundle.text("nav.login", "Log In")}
                        </button>
                        <button type="button" class="btn btn-primary btn-sm hidden md:inline-flex">
                            {bundle.text("nav.signUp", "Sign Up")}
                        </button>
                        <button
                            type="button"
                            class="btn btn-ghost btn-square lg:hidden"
                            aria-label={bundle.text("nav.menu", "Toggle navigation")}
                            aria-expanded={if *nav_open { "true" } else { "false" }}
                            onclick={toggle_nav}
                        >
                            {if *nav_open { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </header>
            if *nav_open {
                <nav class="mobile-menu border-b border-base-200 bg-base-100 lg:hidden">
                    <ul class="menu w-full p-4">
                        {for items.iter().map(|(route, label)| nav_item(*route, label, props.active))}
                        <li class="mt-2">
                            <button type="button" class="btn btn-primary btn-sm">{bundle.text("nav.signUp", "Sign Up")}</button>
                        </li>
                    </ul>
                </nav>
            }
            <main class="flex-1">
                {for props.children.iter()}
            </main>
            <SiteFooter brand={props.brand.clone()} />
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: Route) -> Html {
    let classes = classes!(
        "nav-item",
        if active == route {
            Some("active")
        } else {
            None
        }
    );
    html! {
        <li><Link<Route> to={route} classes={classes}>{label.to_string()}</Link<Route>></li>
    }
}
