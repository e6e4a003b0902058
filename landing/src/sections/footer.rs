use leptos::prelude::*;
use super::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-top">
                    <div>
                        <div class="footer-brand">
                            <span class="footer-logo">"↗"</span>
                            <span class="footer-title">{BRAND}</span>
                        </div>
                        <p class="footer-tagline">"Helping Ghanaian businesses scale from likes to sales."</p>
                    </div>
                    <div class="footer-links">
                        <a href="#" class="footer-link">"Terms"</a>
                        <a href="#" class="footer-link">"Privacy"</a>
                        <a href="#" class="footer-link">"Contact"</a>
                    </div>
                </div>
                <p class="footer-copyright">
                    "© 2025 BUG Social Media Agency. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
