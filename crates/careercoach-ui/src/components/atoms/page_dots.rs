//! Dot indicators that jump straight to a page or slide.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PageDotsProps {
    pub count: usize,
    pub active: usize,
    #[prop_or_default]
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub on_select: Callback<usize>,
}

#[function_component(PageDots)]
pub(crate) fn page_dots(props: &PageDotsProps) -> Html {
    html! {
        <div class={classes!("flex", "items-center", "justify-center", "gap-2", props.class.clone())}>
            {for (0..props.count).map(|index| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(index));
                let active = index == props.active;
                html! {
                    <button
                        type="button"
                        class={classes!("page-dot", active.then_some("page-dot-active"))}
                        aria-label={format!("{} {}", props.label, index + 1)}
                        aria-current={active.then_some("true")}
                        {onclick}
                    />
                }
            })}
        </div>
    }
}
