//! Collection Pages
//!
//! One routed page per collection. Each mounts a fresh [`CollectionView`], so
//! navigating away and back always refetches.

use leptos::*;

use octofit_core::Collection;

use crate::components::CollectionView;

#[component]
pub fn Users() -> impl IntoView {
    view! { <CollectionView collection=Collection::Users /> }
}

#[component]
pub fn Teams() -> impl IntoView {
    view! { <CollectionView collection=Collection::Teams /> }
}

#[component]
pub fn Activities() -> impl IntoView {
    view! { <CollectionView collection=Collection::Activities /> }
}

#[component]
pub fn Workouts() -> impl IntoView {
    view! { <CollectionView collection=Collection::Workouts /> }
}

#[component]
pub fn Leaderboard() -> impl IntoView {
    view! { <CollectionView collection=Collection::Leaderboard /> }
}
