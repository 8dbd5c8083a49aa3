//! UI Components
//!
//! Reusable Leptos components for the collection views.

pub mod banner;
pub mod collection_view;
pub mod data_table;
pub mod loading;
pub mod nav;

pub use banner::{DismissibleAlert, EmptyBanner, ErrorBanner};
pub use collection_view::CollectionView;
pub use data_table::DataTable;
pub use loading::Loading;
pub use nav::Nav;
