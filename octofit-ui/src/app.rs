//! App Root Component
//!
//! Main application component with routing and the shared API client.

use leptos::*;
use leptos_router::*;

use crate::api::{provide_api_client, ApiClient};
use crate::components::Nav;
use crate::pages::{Activities, Home, Leaderboard, Teams, Users, Workouts};

/// Root application component
#[component]
pub fn App(client: ApiClient) -> impl IntoView {
    // Every collection view below reads the same base URL
    provide_api_client(client);

    view! {
        <Router>
            <div class="App d-flex flex-column min-vh-100">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-grow-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/users" view=Users />
                        <Route path="/teams" view=Teams />
                        <Route path="/activities" view=Activities />
                        <Route path="/workouts" view=Workouts />
                        <Route path="/leaderboard" view=Leaderboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer bg-dark text-white text-center py-4 mt-5 border-top border-secondary">
            <div class="container">
                <div class="footer-content">
                    <img
                        src="/octofitapp-small.png"
                        alt="OctoFit Logo"
                        class="footer-logo me-2"
                        width="30"
                        height="30"
                    />
                    <span class="fw-bold">"OctoFit Tracker"</span>
                    " © 2024. All rights reserved."
                </div>
                <small class="text-muted d-block mt-2">
                    "Powered by Leptos & Django REST Framework"
                </small>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container mt-5 text-center">
            <div class="display-1 mb-4">"🔍"</div>
            <h1 class="mb-2">"Page Not Found"</h1>
            <p class="text-muted mb-4">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn btn-primary">
                "Go to Home"
            </A>
        </div>
    }
}
