//! AutoDrive Market storefront API.
//!
//! Library half of the server so the binary (`main.rs`) and the end-to-end
//! tests (`ad-e2e-tests`) share `AppState`, `build_router` and the
//! persistence layer.

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
