//! Routing definitions for the CareerCoach site.
use crate::core::nav::NavTarget;
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/explore-careers")]
    ExploreCareers,
    #[at("/blog")]
    Blog,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Self::Home,
            NavTarget::HowItWorks => Self::HowItWorks,
            NavTarget::ExploreCareers => Self::ExploreCareers,
            NavTarget::Blog => Self::Blog,
            NavTarget::Faq => Self::Faq,
        }
    }
}
