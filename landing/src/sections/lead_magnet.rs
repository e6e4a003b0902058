use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::launchpad::Launchpad;

#[component]
pub fn LeadMagnet() -> impl IntoView {
    let launchpad = expect_context::<Launchpad>();
    let email = launchpad.form.email;
    let pending = move || launchpad.lead_pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        launchpad.submit_lead();
    };

    view! {
        <section class="lead-magnet">
            <div class="container container-narrow">
                <div class="lead-box">
                    <h3 class="lead-title">"Not ready to buy yet?"</h3>
                    <p class="lead-description">
                        "Get our " <strong>"1-Page Business Checklist"</strong> " for FREE. "
                        "Start organizing your business today."
                    </p>
                    <form class="lead-form" on:submit=on_submit>
                        <input
                            type="email"
                            class="lead-input"
                            placeholder="Enter your email address"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn-dark" disabled=pending>
                            {move || if pending() { "Sending..." } else { "Send it to me" }}
                        </button>
                    </form>
                    <p class="lead-footnote">"No spam. Unsubscribe anytime."</p>
                </div>
            </div>
        </section>
    }
}
