//! Home Page
//!
//! Landing page: hero banner, API endpoint notice, one card per collection and
//! a short feature list. Makes no network requests.

use leptos::*;
use leptos_router::*;

use octofit_core::Collection;

use crate::api::use_api_client;
use crate::components::data_table::tone_name;
use crate::components::DismissibleAlert;

/// Feature highlights listed under the collection cards
const HIGHLIGHTS: [(&str, &str); 4] = [
    (
        "✅ Track Your Progress",
        "Log activities and workouts to monitor your fitness journey in real-time.",
    ),
    (
        "🏆 Compete with Teams",
        "Create teams and compete on the leaderboard with friends and colleagues.",
    ),
    (
        "📊 View Analytics",
        "Get detailed insights into your fitness activities and performance metrics.",
    ),
    (
        "🌟 Community Driven",
        "Connect with other fitness enthusiasts and build a supportive community.",
    ),
];

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    let endpoint = use_api_client().base().to_string();

    view! {
        <div class="home-container">
            <div class="hero-section">
                <div class="container-xl">
                    <div class="hero-content">
                        <h1 class="display-3 fw-bold mb-4">"Welcome to OctoFit Tracker"</h1>
                        <p class="lead mb-4">
                            "Your comprehensive fitness tracking and team competition platform"
                        </p>
                        <DismissibleAlert variant="info">
                            <strong>"API Endpoint:"</strong>
                            " "
                            {endpoint.clone()}
                        </DismissibleAlert>
                    </div>
                </div>
            </div>

            <div class="container-xl py-5">
                <div class="row g-4">
                    {Collection::ALL
                        .into_iter()
                        .map(|collection| view! { <FeatureCard collection=collection /> })
                        .collect_view()}
                </div>
            </div>

            <div class="container-xl py-5 bg-light">
                <h2 class="text-center mb-5">"Features"</h2>
                <div class="row g-4">
                    {HIGHLIGHTS
                        .into_iter()
                        .map(|(title, text)| view! {
                            <div class="col-md-6">
                                <div class="feature-list">
                                    <h5>{title}</h5>
                                    <p>{text}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Card linking to one collection view
#[component]
fn FeatureCard(collection: Collection) -> impl IntoView {
    let accent = tone_name(collection.accent());

    view! {
        <div class="col-md-6 col-lg-4">
            <A href=collection.route() class="text-decoration-none">
                <div class="card h-100 shadow-sm hover-card border-0">
                    <div class=format!("card-header bg-{} border-0", accent)>
                        <div class="feature-icon">{collection.icon()}</div>
                    </div>
                    <div class="card-body">
                        <h5 class="card-title">{collection.title()}</h5>
                        <p class="card-text text-muted">{collection.feature_description()}</p>
                        <button class=format!("btn btn-{} btn-sm", accent)>
                            "Explore " {collection.title()}
                        </button>
                    </div>
                </div>
            </A>
        </div>
    }
}
