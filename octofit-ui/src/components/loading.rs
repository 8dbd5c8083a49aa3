//! Loading Component
//!
//! Progress indicator shown while a collection is in flight.

use leptos::*;

/// Full-width spinner with an accessible label
#[component]
pub fn Loading(
    /// Read by screen readers and shown under the spinner
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <div class="container mt-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">{label.clone()}</span>
            </div>
            <p class="mt-3">{label}</p>
        </div>
    }
}
