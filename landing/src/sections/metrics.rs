use leptos::prelude::*;

#[component]
pub fn Metrics() -> impl IntoView {
    view! {
        <section class="metrics">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Results that speak for themselves"</h2>
                </div>
                <div class="bento-grid">
                    <MetricTile value="500+" label="Ghanaian businesses launched" wide=true />
                    <MetricTile value="3x" label="More status views in 30 days" wide=false />
                    <MetricTile value="72%" label="Fewer ghosted inquiries" wide=false />
                    <MetricTile value="7 days" label="To your first planned flash sale" wide=true />
                </div>
            </div>
        </section>
    }
}

#[component]
fn MetricTile(value: &'static str, label: &'static str, wide: bool) -> impl IntoView {
    view! {
        <div class="bento-tile" class:bento-wide=wide>
            <span class="bento-value">{value}</span>
            <span class="bento-label">{label}</span>
        </div>
    }
}
