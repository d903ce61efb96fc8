//! Sitio API server library.
//!
//! Exposes the building blocks (config, state, error handling, auth,
//! routes, seed data) so integration tests and the binary entrypoint can
//! both access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
