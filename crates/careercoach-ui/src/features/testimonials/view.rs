//! Auto-rotating testimonial carousel.
//!
//! # Design
//! - [`Rotation`] lives behind a reducer so the interval callback never reads
//!   a stale index.
//! - The interval is re-armed whenever the pause flag or manual epoch changes.

use std::rc::Rc;

use crate::components::atoms::PageDots;
use crate::core::rotation::Rotation;
use crate::core::site::site;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use careercoach_content::{Testimonial, catalog};
use gloo_timers::callback::Interval;
use yew::prelude::*;

enum RotationAction {
    Advance,
    Retreat,
    JumpTo(usize),
    Tick,
    TogglePause,
}

#[derive(Clone, Copy, PartialEq)]
struct RotationCell(Rotation);

impl Reducible for RotationCell {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut rotation = self.0;
        match action {
            RotationAction::Advance => rotation.advance(),
            RotationAction::Retreat => rotation.retreat(),
            RotationAction::JumpTo(index) => {
                if rotation.jump_to(index).is_err() {
                    return self;
                }
            }
            RotationAction::Tick => rotation.tick(),
            RotationAction::TogglePause => rotation.toggle_paused(),
        }
        Rc::new(Self(rotation))
    }
}

#[function_component(TestimonialsSection)]
pub(crate) fn testimonials_section() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::shared(DEFAULT_LOCALE));
    let testimonials = &catalog().testimonials;
    let len = testimonials.len();
    let rotation = use_reducer(move || RotationCell(Rotation::new(len)));
    let current = rotation.0;
    let interval_ms = site().testimonial_interval_ms;

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |(paused, _, interval_ms, len)| {
                let handle = if *paused || *len == 0 {
                    None
                } else {
                    Some(Interval::new(*interval_ms, move || {
                        dispatcher.dispatch(RotationAction::Tick);
                    }))
                };
                move || drop(handle)
            },
            (current.is_paused(), current.epoch(), interval_ms, len),
        );
    }

    let Some(active) = testimonials.get(current.index()) else {
        return Html::default();
    };

    let on_prev = {
        let dispatcher = rotation.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(RotationAction::Retreat))
    };
    let on_next = {
        let dispatcher = rotation.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(RotationAction::Advance))
    };
    let on_pause = {
        let dispatcher = rotation.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(RotationAction::TogglePause))
    };
    let on_dot = {
        let dispatcher = rotation.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(RotationAction::JumpTo(index)))
    };
    let pause_label = if current.is_paused() {
        bundle.text("testimonials.play", "Resume rotation")
    } else {
        bundle.text("testimonials.pause", "Pause rotation")
    };

    html! {
        <section id="testimonials" class="section py-20">
            <div class="mx-auto max-w-5xl px-6">
                <div class="text-center">
                    <h2 class="section-title">{bundle.text("testimonials.title", "Success Stories")}</h2>
                    <p class="section-subtitle">{bundle.text("testimonials.subtitle", "Real results from professionals who transformed their careers")}</p>
                </div>
                {testimonial_card(&bundle, active)}
                <div class="mt-8 flex items-center justify-center gap-4">
                    <button
                        type="button"
                        class="btn btn-circle btn-outline btn-sm"
                        aria-label={bundle.text("testimonials.prev", "Previous story")}
                        onclick={on_prev}
                    >{"‹"}</button>
                    <PageDots
                        count={len}
                        active={current.index()}
                        label={AttrValue::from(bundle.text("testimonials.goTo", "Show story"))}
                        on_select={on_dot}
                    />
                    <button
                        type="button"
                        class="btn btn-circle btn-outline btn-sm"
                        aria-label={bundle.text("testimonials.next", "Next story")}
                        onclick={on_next}
                    >{"›"}</button>
                    <button
                        type="button"
                        class="btn btn-ghost btn-sm"
                        aria-label={pause_label}
                        aria-pressed={if current.is_paused() { "true" } else { "false" }}
                        onclick={on_pause}
                    >{if current.is_paused() { "▶" } else { "❚❚" }}</button>
                </div>
            </div>
        </section>
    }
}

fn testimonial_card(bundle: &TranslationBundle, testimonial: &Testimonial) -> Html {
    let results = &testimonial.results;
    html! {
        <article class="testimonial-card card mt-10 bg-base-100 shadow-lg">
            <div class="card-body gap-6">
                <div class="flex items-center gap-4">
                    <div class="avatar placeholder">
                        <div class="w-14 rounded-full bg-secondary text-secondary-content">
                            <span class="text-xl">{testimonial.initial()}</span>
                        </div>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold">{testimonial.name.clone()}</h3>
                        <p class="text-sm text-base-content/70">{format!("{} · {}", testimonial.role, testimonial.company)}</p>
                        <p class="text-warning" aria-label={format!("{} / 5", testimonial.rating)}>
                            {"★".repeat(usize::from(testimonial.rating.min(5)))}
                        </p>
                    </div>
                </div>
                <blockquote class="text-lg italic">{format!("“{}”", testimonial.quote)}</blockquote>
                <div class="grid gap-4 md:grid-cols-2">
                    <div class="rounded-box bg-error/10 p-4">
                        <p class="text-xs font-semibold uppercase text-error">{bundle.text("testimonials.before", "Before")}</p>
                        <p class="mt-1 text-sm">{testimonial.before.clone()}</p>
                    </div>
                    <div class="rounded-box bg-success/10 p-4">
                        <p class="text-xs font-semibold uppercase text-success">{bundle.text("testimonials.after", "After")}</p>
                        <p class="mt-1 text-sm">{testimonial.after.clone()}</p>
                    </div>
                </div>
                <div class="stats stats-vertical bg-base-200 md:stats-horizontal">
                    <div class="stat">
                        <div class="stat-title">{bundle.text("testimonials.salaryIncrease", "Salary Increase")}</div>
                        <div class="stat-value text-primary">{format!("+{}%", results.salary_increase_pct)}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{bundle.text("testimonials.timeToPromotion", "Time to Promotion")}</div>
                        <div class="stat-value text-secondary">{results.time_to_promotion.clone()}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{bundle.text("testimonials.confidence", "Confidence Level")}</div>
                        <div class="stat-value text-accent">{format!("{}%", results.confidence_level_pct)}</div>
                    </div>
                </div>
            </div>
        </article>
    }
}
