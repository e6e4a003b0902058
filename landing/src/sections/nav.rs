use leptos::prelude::*;
use super::BRAND;
use crate::browser::scroll_to_section;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <div class="nav-logo">"↗"</div>
                    <span class="nav-title">{BRAND}</span>
                </a>
                <div class="nav-links">
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="#pricing" class="nav-link">"Pricing"</a>
                    <a href="#about" class="nav-link">"About"</a>
                </div>
                <button class="nav-cta" on:click=move |_| scroll_to_section("pricing")>
                    "Get Started"
                </button>
            </div>
        </nav>
    }
}
