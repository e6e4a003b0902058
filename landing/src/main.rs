// The Launchpad landing page - Leptos 0.8 Edition
// Built for BUG Social Media Agency (c)2025

mod browser;
mod launchpad;
mod logging;
mod pages;
mod sections;
mod toast;

use launchpad::Launchpad;
use launchpad_core::ApiConfig;
use leptos::prelude::*;
use pages::{HomePage, PageSections};
use sections::{Footer, Nav};
use toast::{ToastStack, Toaster};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init() {
        web_sys::console::warn_1(&format!("[launchpad] logging disabled: {err}").into());
    }

    let config = ApiConfig::from_env();
    let sections = PageSections::from_setting(option_env!("LAUNCHPAD_VARIANT"));
    tracing::info!(backend = config.base_url(), ?sections, "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() sections=sections /> });
}

#[component]
fn App(config: ApiConfig, sections: PageSections) -> impl IntoView {
    let toaster = Toaster::new();
    provide_context(Launchpad::new(config, toaster));

    view! {
        <Nav />
        <main>
            <HomePage sections=sections />
        </main>
        <Footer />
        <ToastStack toaster=toaster />
    }
}
