//! View Status
//!
//! Every collection view runs the same linear state machine:
//!
//! ```text
//! Loading ──ok──> Loaded(items)
//!    └────err───> Failed(message)
//! ```
//!
//! Both outcomes are terminal. Leaving a failed view and coming back creates a new
//! machine; there is no retry transition.

use serde_json::Value;
use std::cell::Cell as FlagCell;
use std::rc::Rc;

use crate::collection::Collection;
use crate::table::Table;

/// Why a collection could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Request never completed (unreachable host, aborted, CORS, ...)
    #[error("{0}")]
    Transport(String),

    /// Body was not valid JSON
    #[error("{0}")]
    Decode(String),
}

/// Status of one mounted collection view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewStatus {
    #[default]
    Loading,
    Loaded(Vec<Value>),
    Failed(String),
}

impl ViewStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewStatus::Loading)
    }

    /// Settle a loading view with the fetch outcome.
    ///
    /// Returns `false`, leaving the status untouched, if it had already settled.
    pub fn resolve(&mut self, result: Result<Vec<Value>, FetchError>) -> bool {
        if self.is_terminal() {
            return false;
        }

        *self = match result {
            Ok(items) => ViewStatus::Loaded(items),
            Err(e) => ViewStatus::Failed(e.to_string()),
        };
        true
    }

    /// What the view should display right now
    pub fn screen(&self, collection: Collection) -> Screen {
        match self {
            ViewStatus::Loading => Screen::Spinner {
                label: collection.loading_label(),
            },
            ViewStatus::Failed(message) => Screen::Error {
                message: message.clone(),
            },
            ViewStatus::Loaded(items) if items.is_empty() => Screen::Empty {
                headline: collection.empty_headline(),
                hint: collection.empty_hint(),
            },
            ViewStatus::Loaded(items) => Screen::Table {
                heading: collection.count_heading(items.len()),
                table: collection.table(items),
            },
        }
    }
}

/// Mutually exclusive renderings of a collection view
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Progress indicator with an accessible label
    Spinner { label: String },
    /// Dismissible error banner showing the message verbatim
    Error { message: String },
    /// Informational banner; not an error
    Empty {
        headline: &'static str,
        hint: &'static str,
    },
    Table { heading: String, table: Table },
}

/// Liveness token for one activation of a view.
///
/// Created on mount and deactivated on unmount. A response that arrives after
/// deactivation must be dropped instead of committed to the view's state.
#[derive(Debug, Clone)]
pub struct Activation {
    live: Rc<FlagCell<bool>>,
}

impl Activation {
    pub fn new() -> Self {
        Self {
            live: Rc::new(FlagCell::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn deactivate(&self) {
        self.live.set(false);
    }

    /// Resolve `status` only while still live; returns whether it was committed
    pub fn commit(&self, status: &mut ViewStatus, result: Result<Vec<Value>, FetchError>) -> bool {
        self.is_live() && status.resolve(result)
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::to_list;
    use serde_json::json;

    #[test]
    fn test_initial_state_is_loading() {
        let status = ViewStatus::default();
        assert_eq!(status, ViewStatus::Loading);
        assert_eq!(
            status.screen(Collection::Teams),
            Screen::Spinner { label: "Loading teams...".to_string() }
        );
    }

    #[test]
    fn test_http_error_shows_only_error_banner() {
        let mut status = ViewStatus::Loading;
        assert!(status.resolve(Err(FetchError::Status(500))));

        match status.screen(Collection::Users) {
            Screen::Error { message } => assert_eq!(message, "HTTP error! status: 500"),
            other => panic!("expected error screen, got {:?}", other),
        }
    }

    #[test]
    fn test_transport_message_is_verbatim() {
        let mut status = ViewStatus::Loading;
        status.resolve(Err(FetchError::Transport("Failed to fetch".into())));
        assert_eq!(status, ViewStatus::Failed("Failed to fetch".into()));
    }

    #[test]
    fn test_terminal_states_do_not_reenter() {
        let mut status = ViewStatus::Loading;
        status.resolve(Ok(vec![json!({ "id": 1 })]));
        assert!(!status.resolve(Err(FetchError::Status(404))));
        assert!(matches!(status, ViewStatus::Loaded(ref items) if items.len() == 1));

        let mut failed = ViewStatus::Loading;
        failed.resolve(Err(FetchError::Decode("bad json".into())));
        assert!(!failed.resolve(Ok(Vec::new())));
        assert_eq!(failed, ViewStatus::Failed("bad json".into()));
    }

    #[test]
    fn test_empty_list_is_informational() {
        let mut status = ViewStatus::Loading;
        status.resolve(Ok(to_list(json!(null))));
        assert_eq!(
            status.screen(Collection::Workouts),
            Screen::Empty {
                headline: "No workouts found.",
                hint: "Log your first workout to get started!",
            }
        );
    }

    #[test]
    fn test_loaded_items_render_table() {
        let body = json!({ "results": [{ "id": 1 }, { "id": 2 }, { "id": 3 }] });
        let mut status = ViewStatus::Loading;
        status.resolve(Ok(to_list(body)));

        match status.screen(Collection::Activities) {
            Screen::Table { heading, table } => {
                assert_eq!(heading, "Total Activities: 3");
                assert_eq!(table.len(), 3);
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_refetch_renders_identical_table() {
        let body = json!([{ "username": "a", "points": 10 }, { "username": "b", "score": 20 }]);
        let render = || {
            let mut status = ViewStatus::Loading;
            status.resolve(Ok(to_list(body.clone())));
            status.screen(Collection::Leaderboard)
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn test_deactivated_activation_drops_result() {
        let activation = Activation::new();
        let observer = activation.clone();
        let mut status = ViewStatus::Loading;

        activation.deactivate();
        assert!(!observer.is_live());
        assert!(!observer.commit(&mut status, Ok(vec![json!({})])));
        assert_eq!(status, ViewStatus::Loading);
    }

    #[test]
    fn test_live_activation_commits_once() {
        let activation = Activation::default();
        let mut status = ViewStatus::Loading;
        assert!(activation.commit(&mut status, Ok(Vec::new())));
        assert!(!activation.commit(&mut status, Err(FetchError::Status(500))));
        assert_eq!(status, ViewStatus::Loaded(Vec::new()));
    }
}
