//! Waypoint Server - user location tracking API.
//!
//! Library surface of the server binary, split out so the integration test
//! crate can drive the repository and router directly.
//!
//! # Modules
//!
//! - [`config`] - Environment-based configuration
//! - [`db`] - `PostgreSQL` pool, schema and the user/location repository
//! - [`services`] - Application service wrapping the repository
//! - [`routes`] - Axum handlers and DTOs
//! - [`error`] - Unified error-to-response translation
//! - [`state`] - Shared application state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
