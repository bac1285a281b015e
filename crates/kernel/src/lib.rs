//! Hackerspace Kernel Library
//!
//! Content blocks, page fragments and the JSON API behind the hackerspace
//! site. The main entry point for running the server is the `hackerspace`
//! binary.

pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod fragments;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use fetch::{FetchError, FragmentClient};
pub use state::AppState;
pub use store::ContentStore;
