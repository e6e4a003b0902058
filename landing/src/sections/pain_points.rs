use leptos::prelude::*;

#[component]
pub fn PainPoints() -> impl IntoView {
    view! {
        <section class="pain-points">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Does this sound familiar?"</h2>
                    <p class="section-description">
                        "You're working hard, but the sales just aren't matching the effort."
                    </p>
                </div>
                <div class="pain-grid">
                    <PainCard
                        icon="👥"
                        title="Ghosted Inquiries"
                        description="People ask 'How much?' and then disappear forever."
                    />
                    <PainCard
                        icon="📱"
                        title="Low Visibility"
                        description="Your WhatsApp status views are stuck and not converting."
                    />
                    <PainCard
                        icon="🚚"
                        title="Logistics Nightmares"
                        description="Riders disappointing you and destroying your brand reputation."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PainCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="pain-card">
            <div class="pain-icon">{icon}</div>
            <h3 class="pain-title">{title}</h3>
            <p class="pain-description">{description}</p>
        </article>
    }
}
