//! Horizontal chip bar for single-choice category selection.

use yew::prelude::*;

/// One selectable chip.
#[derive(Clone, PartialEq)]
pub(crate) struct ChipOption {
    pub label: AttrValue,
    pub active: bool,
}

#[derive(Properties, PartialEq)]
pub(crate) struct CategoryChipsProps {
    pub options: Vec<ChipOption>,
    #[prop_or_default]
    pub class: Classes,
    /// Index into `options` of the clicked chip.
    pub on_select: Callback<usize>,
}

#[function_component(CategoryChips)]
pub(crate) fn category_chips(props: &CategoryChipsProps) -> Html {
    html! {
        <div class={classes!("flex", "flex-wrap", "justify-center", "gap-2", props.class.clone())} role="tablist">
            {for props.options.iter().enumerate().map(|(index, option)| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(index));
                html! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected={if option.active { "true" } else { "false" }}
                        class={classes!(
                            "btn",
                            "btn-sm",
                            "rounded-full",
                            if option.active { "btn-primary" } else { "btn-ghost" }
                        )}
                        {onclick}
                    >
                        {option.label.clone()}
                    </button>
                }
            })}
        </div>
    }
}
