//! Navigation Component
//!
//! Bootstrap navbar with the OctoFit brand and one link per collection.

use leptos::*;
use leptos_router::*;

use octofit_core::Collection;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark shadow-sm">
            <div class="container-fluid">
                // Logo and brand
                <A href="/" class="navbar-brand d-flex align-items-center">
                    <img
                        src="/octofitapp-small.png"
                        alt="OctoFit Logo"
                        class="me-2"
                        height="40"
                    />
                    <span class="fw-bold">"OctoFit Tracker"</span>
                </A>

                <button
                    class="navbar-toggler"
                    type="button"
                    aria-controls="navbarNav"
                    aria-expanded=move || expanded.get().to_string()
                    aria-label="Toggle navigation"
                    on:click=move |_| set_expanded.update(|open| *open = !*open)
                >
                    <span class="navbar-toggler-icon"></span>
                </button>

                // Navigation links
                <div
                    class="collapse navbar-collapse"
                    class:show=move || expanded.get()
                    id="navbarNav"
                >
                    <ul class="navbar-nav ms-auto">
                        <NavLink href="/" label="Home" />
                        {Collection::ALL
                            .into_iter()
                            .map(|collection| view! {
                                <NavLink
                                    href=collection.route()
                                    label=format!("{} {}", collection.icon(), collection.title())
                                />
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <li class="nav-item">
            <A href=href class="nav-link" active_class="active" exact=true>
                {label}
            </A>
        </li>
    }
}
