//! # Bookshelf
//!
//! A small CRUD service for book records (title, author) with a JSON API.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: asynchronous SQLite access
//! - **Tokio**: async runtime
//! - **Serde**: JSON (de)serialization
//!
//! ## Core Components
//!
//! - [`config`]: layered configuration (embedded defaults, files, environment)
//! - [`db`]: pool creation and schema initialization
//! - [`error`]: application error type and its JSON rendering
//! - [`fixtures`]: seed data for a fresh environment
//! - [`metrics`]: request counters
//! - [`middleware`]: security headers
//! - [`routes`]: HTTP handlers and the route table
//! - [`state`]: shared application state
//! - [`store`]: the book repository
//! - [`types`]: the book entity and request payloads

pub mod config;
pub mod db;
pub mod error;
pub mod fixtures;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
