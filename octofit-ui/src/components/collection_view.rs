//! Remote Collection View
//!
//! The single view behind all five collection pages. On mount it fetches its
//! collection once and settles into a table, an empty-state banner or an error
//! banner. On unmount it aborts the request and ignores anything that still
//! arrives.

use leptos::*;

use octofit_core::{Activation, Collection, Screen, ViewStatus};

use crate::api::use_api_client;
use crate::components::banner::{EmptyBanner, ErrorBanner};
use crate::components::data_table::DataTable;
use crate::components::loading::Loading;

/// Fetch-and-render view for one collection
#[component]
pub fn CollectionView(collection: Collection) -> impl IntoView {
    let client = use_api_client();
    let status = create_rw_signal(ViewStatus::Loading);
    let activation = Activation::new();
    let abort = web_sys::AbortController::new().ok();

    // Route changed: cancel the request and disregard its outcome
    let activation_for_cleanup = activation.clone();
    let abort_for_cleanup = abort.clone();
    on_cleanup(move || {
        activation_for_cleanup.deactivate();
        if let Some(controller) = abort_for_cleanup {
            controller.abort();
        }
    });

    // Fetch once on mount
    create_effect(move |_| {
        let client = client.clone();
        let activation = activation.clone();
        let signal = abort.as_ref().map(|controller| controller.signal());

        spawn_local(async move {
            let result = client.get(collection, signal.as_ref()).await;

            if !activation.is_live() {
                web_sys::console::log_1(
                    &format!("Discarding {} response for an inactive view", collection).into(),
                );
                return;
            }

            match &result {
                Ok(items) => web_sys::console::log_1(
                    &format!("Loaded {} {}", items.len(), collection).into(),
                ),
                Err(e) => web_sys::console::error_1(
                    &format!("Error fetching {}: {}", collection, e).into(),
                ),
            }

            status.update(|status| {
                activation.commit(status, result);
            });
        });
    });

    view! {
        {move || match status.with(|status| status.screen(collection)) {
            Screen::Spinner { label } => view! { <Loading label=label /> }.into_view(),
            Screen::Error { message } => view! { <ErrorBanner message=message /> }.into_view(),
            Screen::Empty { headline, hint } => view! {
                <CollectionPage collection=collection>
                    <EmptyBanner headline=headline hint=hint />
                </CollectionPage>
            }
            .into_view(),
            Screen::Table { heading, table } => view! {
                <CollectionPage collection=collection>
                    <DataTable heading=heading table=table />
                </CollectionPage>
            }
            .into_view(),
        }}
    }
}

/// Page frame with the collection heading
#[component]
fn CollectionPage(collection: Collection, children: Children) -> impl IntoView {
    view! {
        <div class="container mt-4 mb-5">
            <div class="component-header mb-4">
                <h1 class="display-5">{collection.icon()} " " {collection.title()}</h1>
                <p class="text-muted">{collection.subtitle()}</p>
            </div>
            {children()}
        </div>
    }
}
