//! Read-only five-star rating row.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RatingProps {
    /// Score out of five; fractional scores round to the nearest star.
    pub value: f32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Rating)]
pub(crate) fn rating(props: &RatingProps) -> Html {
    let filled = stars(props.value);
    html! {
        <span
            class={classes!("rating-stars", "text-warning", props.class.clone())}
            aria-label={format!("{:.1} / 5", props.value)}
        >
            {for (0..5u8).map(|star| html! {
                <span aria-hidden="true">{if star < filled { "★" } else { "☆" }}</span>
            })}
        </span>
    }
}

// Clamped to 0..=5 before the cast.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stars(value: f32) -> u8 {
    value.clamp(0.0, 5.0).round() as u8
}
