//! Single-open, collapsible accordion shared by the modules list and the FAQ.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

pub struct AccordionEntry {
    pub title: &'static str,
    pub body: &'static str,
}

#[component]
pub fn Accordion(entries: &'static [AccordionEntry]) -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <div class="accordion">
            {entries
                .iter()
                .enumerate()
                .map(|(idx, entry)| {
                    let is_open = move || open.get() == Some(idx);
                    let icon = move || if is_open() { "−" } else { "+" };
                    let on_toggle = move |_: MouseEvent| {
                        set_open.update(|current| *current = toggle(*current, idx))
                    };
                    view! {
                        <div class="accordion-item" class:open=is_open>
                            <button class="accordion-trigger" on:click=on_toggle>
                                <span>{entry.title}</span>
                                <span class="accordion-icon">{icon}</span>
                            </button>
                            <Show when=is_open>
                                <div class="accordion-content">{entry.body}</div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Clicking the open item closes it; clicking another opens only that one.
fn toggle(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) { None } else { Some(clicked) }
}
