// Landing page layout
// Built for BUG Social Media Agency (c)2025

mod home;

pub use home::{HomePage, PageSections};
