//! Site footer with link columns and legal row.

use crate::app::Route;
use crate::core::nav::NavTarget;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::FooterSection;
use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct FooterProps {
    pub brand: AttrValue,
}

#[function_component(SiteFooter)]
pub(crate) fn site_footer(props: &FooterProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::shared(DEFAULT_LOCALE));
    let sections: Vec<FooterSection> = bundle.items("footer.sections");
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer bg-neutral text-neutral-content">
            <div class="mx-auto grid max-w-7xl gap-10 px-6 py-14 md:grid-cols-6">
                <div class="md:col-span-2">
                    <Link<Route> to={Route::Home} classes="text-xl font-bold">{props.brand.clone()}</Link<Route>>
                    <p class="mt-3 text-sm opacity-80">
                        {bundle.text("footer.tagline", "Connecting ambitious professionals with the coaches who have already walked their path.")}
                    </p>
                    <nav class="mt-6 flex flex-wrap gap-3 text-sm">
                        {for NavTarget::all().into_iter().map(|target| html! {
                            <Link<Route> to={Route::from(target)} classes="link link-hover">
                                {bundle.text(target.label_key(), target.default_label())}
                            </Link<Route>>
                        })}
                    </nav>
                </div>
                {for sections.iter().map(|section| html! {
                    <div>
                        <h4 class="footer-title">{section.title.clone()}</h4>
                        <ul class="space-y-2 text-sm opacity-80">
                            {for section.links.iter().map(|link| html! {
                                <li><span class="link link-hover">{link.clone()}</span></li>
                            })}
                        </ul>
                    </div>
                })}
            </div>
            <div class="border-t border-neutral-content/10">
                <div class="mx-auto flex max-w-7xl flex-col gap-3 px-6 py-6 text-sm opacity-70 md:flex-row md:justify-between">
                    <span>{format!("© {year} {}. {}", props.brand, bundle.text("footer.rights", "All rights reserved."))}</span>
                    <div class="flex gap-4">
                        <span class="link link-hover">{bundle.text("footer.privacy", "Privacy Policy")}</span>
                        <span class="link link-hover">{bundle.text("footer.terms", "Terms of Service")}</span>
                        <span class="link link-hover">{bundle.text("footer.cookies", "Cookie Policy")}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
