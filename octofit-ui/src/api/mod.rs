//! API Access
//!
//! Client for the OctoFit REST API, shared through Leptos context.

pub mod client;

pub use client::{provide_api_client, use_api_client, ApiClient};
