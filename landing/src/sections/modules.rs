use leptos::prelude::*;
use super::accordion::{Accordion, AccordionEntry};

const MODULES: &[AccordionEntry] = &[
    AccordionEntry {
        title: "Module 1: Professionalism on a Budget",
        body: "Transitioning to WhatsApp Business, setting up catalogs properly, and maintaining consistent brand colors without spending millions.",
    },
    AccordionEntry {
        title: "Module 2: The WhatsApp Sales Machine",
        body: "Implementing the '5-Post Rule' for status updates: Hook, Solution, Proof, Behind the Scenes, and Call to Action.",
    },
    AccordionEntry {
        title: "Module 3: Saveable Content",
        body: "Focus on educational content and short-form video (15-second Reels/TikToks) using free tools like CapCut.",
    },
    AccordionEntry {
        title: "Module 4: Logistics Mastery",
        body: "Managing a list of at least three riders, professional low-cost packaging (brown bags + stamps), and MoMo verification protocols.",
    },
    AccordionEntry {
        title: "Module 5: 7-Day Growth Challenge",
        body: "A step-by-step daily task list including status swaps, flash sales, and profit reinvestment.",
    },
];

#[component]
pub fn Modules() -> impl IntoView {
    view! {
        <section id="features" class="modules">
            <div class="container container-narrow">
                <div class="section-header">
                    <h2 class="section-title">"Inside The Blueprint"</h2>
                    <p class="section-description">"5 Pillars of Ghanaian Business Success"</p>
                </div>
                <Accordion entries=MODULES />
            </div>
        </section>
    }
}
