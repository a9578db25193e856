//! Empty state panel for filtered lists.
//!
//! # Design
//! - Keep copy and actions entirely prop-driven.
//! - Render optional actions only when provided.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let has_actions = props.children.iter().next().is_some();
    html! {
        <div class={classes!("empty-state", "card", "bg-base-200", "p-10", "text-center", props.class.clone())}>
            <span class="text-4xl" aria-hidden="true">{"🔍"}</span>
            <h3 class="mt-4 text-lg font-semibold">{props.title.clone()}</h3>
            {props.description.clone().map(|text| html! {
                <p class="mt-2 text-base-content/70">{text}</p>
            }).unwrap_or_default()}
            {if has_actions {
                html! { <div class="mt-6 flex justify-center gap-2">{ for props.children.iter() }</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
