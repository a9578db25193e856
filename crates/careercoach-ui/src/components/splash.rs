//! Startup splash card shown until the splash timeout fires.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SplashProps {
    pub brand: AttrValue,
    pub tagline: AttrValue,
}

/// Full-screen loading card shown while the app warms up.
#[function_component(Splash)]
pub(crate) fn splash(props: &SplashProps) -> Html {
    html! {
        <div class="splash fixed inset-0 z-50 flex flex-col items-center justify-center bg-base-100" role="status">
            <div class="splash-logo flex h-20 w-20 items-center justify-center rounded-2xl bg-primary text-3xl font-bold text-primary-content">
                {props.brand.chars().next().unwrap_or('C')}
            </div>
            <h1 class="mt-6 text-2xl font-bold">{props.brand.clone()}</h1>
            <p class="mt-2 text-base-content/70">{props.tagline.clone()}</p>
            <span class="loading loading-dots loading-lg mt-6 text-primary"></span>
        </div>
    }
}
