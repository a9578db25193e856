//! Navbar language switcher.
//!
//! # Design
//! - Only the open flag is local; the active locale comes from the store.
//! - Picking an entry closes the menu before emitting.

use crate::core::site::{offered_locales, site};
use crate::i18n::LocaleCode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub locale: LocaleCode,
    pub label: AttrValue,
    pub on_select: Callback<LocaleCode>,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    html! {
        <div class={classes!("dropdown", "dropdown-end", (*open).then_some("dropdown-open"))}>
            <button
                type="button"
                class="btn btn-ghost btn-sm gap-1"
                aria-label={props.label.clone()}
                aria-expanded={if *open { "true" } else { "false" }}
                onclick={toggle}
            >
                <span aria-hidden="true">{"🌐"}</span>
                <span>{props.locale.short()}</span>
            </button>
            if *open {
                <ul class="menu dropdown-content z-20 mt-2 w-40 rounded-box bg-base-100 p-2 shadow">
                    {for offered_locales(site()).into_iter().map(|next| {
                        let on_select = props.on_select.clone();
                        let open = open.clone();
                        let onclick = Callback::from(move |_| {
                            open.set(false);
                            on_select.emit(next);
                        });
                        html! {
                            <li>
                                <button
                                    type="button"
                                    class={classes!((next == props.locale).then_some("active"))}
                                    {onclick}
                                >
                                    <span class="font-mono text-xs">{next.short()}</span>
                                    <span>{next.label()}</span>
                                </button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
