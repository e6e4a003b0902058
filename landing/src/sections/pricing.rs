use launchpad_core::Tier;
use leptos::prelude::*;

use crate::launchpad::Launchpad;

struct Plan {
    tier: Tier,
    title: &'static str,
    price: &'static str,
    blurb: &'static str,
    includes: Option<&'static str>,
    features: &'static [&'static str],
    cta: &'static str,
    popular: bool,
}

static PLANS: [Plan; 3] = [
    Plan {
        tier: Tier::Starter,
        title: "Starter",
        price: "50 GHS",
        blurb: "Perfect for beginners just starting out.",
        includes: None,
        features: &[
            "Comprehensive PDF Guide",
            "'Ghost-Proof' Scripts",
            "'The Daily 5' Tasks",
            "30-Day Growth Calendar",
        ],
        cta: "Select Starter",
        popular: false,
    },
    Plan {
        tier: Tier::StandardVip,
        title: "Standard (VIP)",
        price: "150 GHS",
        blurb: "Most successful businesses start here.",
        includes: Some("Everything in Starter, plus:"),
        features: &[
            "Editable Canva Ad Templates",
            "30-Day Content Calendar",
            "Influencer/Supplier Database",
        ],
        cta: "Get Standard VIP",
        popular: true,
    },
    Plan {
        tier: Tier::PremiumVvip,
        title: "Premium (VVIP)",
        price: "500+ GHS",
        blurb: "For serious scaling and mentorship.",
        includes: Some("Everything in Standard, plus:"),
        features: &[
            "Video Masterclass",
            "Private Community Access",
            "1-on-1 Strategy Audit",
        ],
        cta: "Select Premium",
        popular: false,
    },
];

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Choose Your Launchpad"</h2>
                    <p class="section-description">
                        "Investment tiers designed for every stage of business."
                    </p>
                </div>
                <div class="pricing-grid">
                    {PLANS.iter().map(|plan| view! { <PlanCard plan=plan /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static Plan) -> impl IntoView {
    let launchpad = expect_context::<Launchpad>();
    let tier = plan.tier.name();
    let button_class = if plan.popular {
        "btn btn-primary btn-block"
    } else {
        "btn btn-outline btn-block"
    };

    view! {
        <article class="product-card" class:product-card-popular=plan.popular>
            {plan.popular.then(|| view! { <div class="product-ribbon">"POPULAR"</div> })}
            <h3 class="product-title">{plan.title}</h3>
            <div class="product-price">{plan.price}</div>
            <p class="product-blurb">{plan.blurb}</p>
            <ul class="product-features">
                {plan.includes.map(|text| view! { <li class="product-includes">{text}</li> })}
                {plan
                    .features
                    .iter()
                    .map(|feature| view! { <li class="product-feature">"✓ " {*feature}</li> })
                    .collect_view()}
            </ul>
            <button
                class=button_class
                disabled=move || launchpad.order_pending()
                on:click=move |_| launchpad.purchase(tier)
            >
                {plan.cta}
            </button>
        </article>
    }
}
