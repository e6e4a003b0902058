// Home page - the one landing page, with optional sections
use crate::sections::{
    Faq, Hero, LeadMagnet, Metrics, Modules, PainPoints, Philosophy, Pricing, Testimonials,
};
use leptos::prelude::*;

/// Which optional sections to render.
///
/// The page ships in two variants: the full one (testimonials carousel,
/// metrics grid, FAQ) and a minimal one without them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSections {
    pub testimonials: bool,
    pub metrics: bool,
    pub faq: bool,
}

impl PageSections {
    pub const fn full() -> Self {
        Self {
            testimonials: true,
            metrics: true,
            faq: true,
        }
    }

    pub const fn minimal() -> Self {
        Self {
            testimonials: false,
            metrics: false,
            faq: false,
        }
    }

    /// `"minimal"` selects the minimal variant; anything else, or nothing, is full.
    pub fn from_setting(variant: Option<&str>) -> Self {
        match variant.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("minimal") => Self::minimal(),
            _ => Self::full(),
        }
    }
}

impl Default for PageSections {
    fn default() -> Self {
        Self::full()
    }
}

#[component]
pub fn HomePage(sections: PageSections) -> impl IntoView {
    view! {
        <Hero />
        <PainPoints />
        {sections.metrics.then(|| view! { <Metrics /> })}
        <Philosophy />
        <Modules />
        {sections.testimonials.then(|| view! { <Testimonials /> })}
        <Pricing />
        {sections.faq.then(|| view! { <Faq /> })}
        <LeadMagnet />
    }
}
