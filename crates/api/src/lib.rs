//! Factory health HTTP server library.
//!
//! Exposes config, error handling, handlers and the router builder so the
//! binary and the integration tests share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
