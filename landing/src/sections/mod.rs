// Landing page sections
// Built for BUG Social Media Agency (c)2025

/// Brand name used across the page (single source of truth)
pub const BRAND: &str = "BUG Agency";

mod accordion;
mod faq;
mod footer;
mod hero;
mod lead_magnet;
mod metrics;
mod modules;
mod nav;
mod pain_points;
mod philosophy;
mod pricing;
mod testimonials;

pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use lead_magnet::LeadMagnet;
pub use metrics::Metrics;
pub use modules::Modules;
pub use nav::Nav;
pub use pain_points::PainPoints;
pub use philosophy::Philosophy;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
