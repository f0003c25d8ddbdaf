//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! POST|PUT /api/v2/user                  - Create or update a user
//! POST     /api/v2/user/location         - Append a location ping
//! GET      /api/v2/user/location/latest  - Latest location projection
//! GET      /api/v2/user/location/range   - Locations within [from, to]
//! ```

pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the user API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v2/user",
            post(users::create_or_update_user).put(users::create_or_update_user),
        )
        .route("/api/v2/user/location", post(users::put_location))
        .route("/api/v2/user/location/latest", get(users::latest_location))
        .route("/api/v2/user/location/range", get(users::locations_in_range))
}
