//! # OctoFit Core
//!
//! Domain model shared by the OctoFit Tracker web front-end and the native tooling.
//!
//! Everything in here is pure: no network, no DOM, no clock. The web UI and the
//! `octofit` CLI both feed raw JSON bodies through the same pipeline:
//!
//! ```text
//! HTTP body ──> envelope::to_list ──> ViewStatus::resolve ──> ViewStatus::screen ──> Table
//!              (API client)          (view component)      (render)
//! ```
//!
//! ## Modules
//!
//! - [`collection`]: The five read-only collections and their fixed copy
//! - [`endpoint`]: API base URL resolution
//! - [`envelope`]: Normalization of paginated and bare-array responses
//! - [`fields`]: Loosely typed JSON field values and presence rules
//! - [`entities`]: Display projections of users, teams, activities, workouts and leaderboard entries
//! - [`table`]: Column/row/cell model rendered by every front-end
//! - [`status`]: Tri-state view status machine and unmount-safe activation token
//!
//! ## Example
//!
//! ```rust
//! use octofit_core::{to_list, Collection, FetchError, Screen, ViewStatus};
//! use serde_json::json;
//!
//! let mut status = ViewStatus::Loading;
//! let body = json!({ "count": 1, "results": [{ "id": 1, "name": "Run" }] });
//! status.resolve(Ok(to_list(body)));
//!
//! match status.screen(Collection::Workouts) {
//!     Screen::Table { heading, table } => {
//!         assert_eq!(heading, "Total Workouts: 1");
//!         assert_eq!(table.rows[0].cells[3].text, "N/A");
//!     }
//!     other => panic!("unexpected screen: {:?}", other),
//! }
//!
//! let mut failed = ViewStatus::Loading;
//! failed.resolve(Err(FetchError::Status(500)));
//! assert!(matches!(failed.screen(Collection::Users), Screen::Error { .. }));
//! ```

pub mod collection;
pub mod endpoint;
pub mod entities;
pub mod envelope;
pub mod fields;
pub mod status;
pub mod table;

pub use collection::{Collection, UnknownCollection};
pub use endpoint::{ApiBase, API_PORT, DEFAULT_INSTANCE, HOST_SUFFIX};
pub use entities::{Activity, LeaderboardEntry, Team, User, Workout};
pub use envelope::{classify, to_list, BodyShape, Page};
pub use fields::FieldValue;
pub use status::{Activation, FetchError, Screen, ViewStatus};
pub use table::{Align, Cell, CellStyle, Column, Row, Table, TableRow, Tone};
