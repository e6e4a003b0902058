use leptos::prelude::*;

const LOGISTICS_IMAGE: &str = "https://images.unsplash.com/photo-1616757957712-6c8874a8c82b";

#[component]
pub fn Philosophy() -> impl IntoView {
    view! {
        <section id="about" class="philosophy">
            <div class="philosophy-backdrop">
                <img src=LOGISTICS_IMAGE alt="Delivery background" />
            </div>
            <div class="container philosophy-grid">
                <div>
                    <span class="badge">"The Philosophy"</span>
                    <h2 class="section-title">"Not just a Map." <br /> "It's a GPS."</h2>
                    <p class="philosophy-lead">
                        "Think of BUG Social Media Agency not as a library giving you books (information), but as a "
                        <strong>"GPS system for a delivery driver"</strong>
                        "."
                    </p>
                    <p class="philosophy-body">
                        "A library gives you a map and wishes you luck. The Launchpad tells you exactly which turns "
                        "to take, how to avoid traffic (logistics issues), and ensures you reach your destination "
                        "(a sale) as efficiently as possible."
                    </p>
                </div>
                <div class="philosophy-compare">
                    <div class="compare-row compare-old">
                        <div class="compare-mark">"✕"</div>
                        <div>
                            <h4>"The Old Way"</h4>
                            <p>"Random posting, hoping for viral luck, disorganized rider list."</p>
                        </div>
                    </div>
                    <div class="compare-divider"></div>
                    <div class="compare-row compare-new">
                        <div class="compare-mark">"✓"</div>
                        <div>
                            <h4>"The Launchpad Way"</h4>
                            <p>"Strategic 5-post rule, Verified MoMo protocols, \"Ghost-Proof\" scripts."</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
