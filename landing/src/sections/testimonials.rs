//! Testimonials carousel.
//!
//! Auto-advances while mounted; the guard is dropped on cleanup so no tick
//! touches the position signal after the section is gone.

use launchpad_core::{AutoAdvance, CarouselHandle, CarouselPosition};
use leptos::prelude::*;

use crate::browser::{BrowserSpawner, BrowserTimer};

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    business: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The Ghost-Proof scripts alone paid for the guide. People who used to vanish after 'How much?' now actually pay.",
        name: "Akosua M.",
        business: "Hair & wigs, Kumasi",
    },
    Testimonial {
        quote: "I went from 40 status views to over 200 in three weeks with the 5-Post Rule.",
        name: "Kwame A.",
        business: "Sneaker reseller, Accra",
    },
    Testimonial {
        quote: "My rider list and MoMo checks saved me from two fake payment scams in the first month.",
        name: "Efua B.",
        business: "Home bakery, Tema",
    },
    Testimonial {
        quote: "The 7-Day Challenge got me my first flash sale sell-out. I reinvested everything like the guide says.",
        name: "Yaw O.",
        business: "Phone accessories, Takoradi",
    },
];

/// Carousel position held in a signal.
struct SignalCarousel(RwSignal<CarouselPosition>);

impl CarouselHandle for SignalCarousel {
    fn advance(&self) {
        self.0.try_update(CarouselPosition::next);
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let position = RwSignal::new(CarouselPosition::new(TESTIMONIALS.len()));

    let auto_advance = AutoAdvance::start(SignalCarousel(position), BrowserTimer, &BrowserSpawner);
    on_cleanup(move || drop(auto_advance));

    let track_style = move || format!("transform: translateX(-{}%);", position.get().index() * 100);

    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What business owners are saying"</h2>
                </div>
                <div class="carousel">
                    <button
                        class="carousel-nav carousel-prev"
                        aria-label="Previous testimonial"
                        on:click=move |_| position.update(CarouselPosition::prev)
                    >
                        "‹"
                    </button>
                    <div class="carousel-viewport">
                        <div class="carousel-track" style=track_style>
                            {TESTIMONIALS
                                .iter()
                                .map(|t| view! { <TestimonialCard testimonial=t /> })
                                .collect_view()}
                        </div>
                    </div>
                    <button
                        class="carousel-nav carousel-next"
                        aria-label="Next testimonial"
                        on:click=move |_| position.update(CarouselPosition::next)
                    >
                        "›"
                    </button>
                </div>
                <div class="carousel-dots">
                    {(0..TESTIMONIALS.len())
                        .map(|idx| {
                            view! {
                                <button
                                    class="carousel-dot"
                                    class:active=move || position.get().index() == idx
                                    aria-label=format!("Show testimonial {}", idx + 1)
                                    on:click=move |_| position.update(|p| p.go_to(idx))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial-card">
            <div class="testimonial-stars">"★★★★★"</div>
            <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
            <figcaption class="testimonial-author">
                <strong>{testimonial.name}</strong>
                <span>{testimonial.business}</span>
            </figcaption>
        </figure>
    }
}
