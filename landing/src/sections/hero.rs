use leptos::prelude::*;
use crate::browser::scroll_to_section;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1758874385393-3ef15b394a86";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">"🚀 #1 Growth Tool for Ghanaian Businesses"</div>
                    <h1 class="hero-title">
                        "Stop Posting for \"Likes\"."
                        <br />
                        <span class="hero-title-accent">"Start Posting for Sales."</span>
                    </h1>
                    <p class="hero-description">
                        "The comprehensive digital blueprint to transform your business from "
                        "\"Ghosted\" inquiries to consistent revenue using the tools you already have."
                    </p>
                    <div class="hero-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| scroll_to_section("pricing")
                        >
                            "Get The Launchpad →"
                        </button>
                        <SocialProof />
                    </div>
                </div>
                <div class="hero-image">
                    <img src=HERO_IMAGE alt="Successful Ghanaian Entrepreneur" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialProof() -> impl IntoView {
    view! {
        <div class="hero-proof">
            <div class="hero-avatars">
                {(1..=3)
                    .map(|seed| {
                        let src = format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}");
                        view! { <img class="hero-avatar" src=src alt="user" /> }
                    })
                    .collect_view()}
            </div>
            <span>"Trusted by 500+ GH Businesses"</span>
        </div>
    }
}
