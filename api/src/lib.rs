//! # Feedback API
//!
//! HTTP front end for the [`feedback`] engine. Handlers validate request bodies through the
//! engine's intake, map failures onto status codes, and wrap every reply in [`response::ApiResponse`].

pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::app;
