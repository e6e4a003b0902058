use leptos::prelude::*;
use super::accordion::{Accordion, AccordionEntry};

const QUESTIONS: &[AccordionEntry] = &[
    AccordionEntry {
        title: "Do I need a big budget for ads?",
        body: "No. Everything in the Launchpad works with WhatsApp Business, your status and free tools like CapCut and Canva.",
    },
    AccordionEntry {
        title: "How do I receive the Launchpad after paying?",
        body: "Your download starts right after payment is confirmed, and a copy is sent to your email.",
    },
    AccordionEntry {
        title: "Can I pay with Mobile Money?",
        body: "Yes. MoMo is supported for every tier.",
    },
    AccordionEntry {
        title: "I sell on Instagram, not WhatsApp. Is this for me?",
        body: "Yes. The 5-Post Rule, the scripts and the logistics checklist apply to any platform you sell on.",
    },
    AccordionEntry {
        title: "Can I upgrade later?",
        body: "Yes. Contact us and we will credit what you already paid towards Standard VIP or Premium VVIP.",
    },
];

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id="faq" class="faq">
            <div class="container container-narrow">
                <div class="section-header">
                    <h2 class="section-title">"Questions? We've got answers."</h2>
                </div>
                <Accordion entries=QUESTIONS />
            </div>
        </section>
    }
}
