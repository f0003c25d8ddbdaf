//! User and location domain types.
//!
//! Plain data carried between the HTTP layer and the repository. The location
//! sequence is embedded in its owning user: a location has no identity of its
//! own and never outlives the user row it belongs to.

use chrono::NaiveDateTime;
use uuid::Uuid;

use super::email::Email;

/// A tracked user with their recorded location history.
///
/// `locations` is kept in append order, which is not necessarily timestamp
/// order: a ping may be appended with any `created_on` value.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique user ID, immutable once created.
    pub user_id: Uuid,
    /// User's email address.
    pub email: Email,
    /// User's first name.
    pub first_name: String,
    /// User's second name.
    pub second_name: String,
    /// Recorded location pings, oldest append first.
    pub locations: Vec<Location>,
}

/// The identity and profile fields of a user, without the location history.
///
/// This is the input to the upsert operation, which must leave any existing
/// location sequence untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Unique user ID, immutable once created.
    pub user_id: Uuid,
    /// User's email address.
    pub email: Email,
    /// User's first name.
    pub first_name: String,
    /// User's second name.
    pub second_name: String,
}

/// A single geolocation ping.
///
/// Coordinates are stored at full double precision. GPS accuracy tops out
/// around six decimal digits, so 32-bit floats would be enough if space ever
/// becomes a concern; the read/write paths do not apply that narrowing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// When the ping was recorded. Naive wall-clock time with millisecond
    /// precision, interpreted in the system's configured zone.
    pub created_on: NaiveDateTime,
}

/// Projection of a user together with at most one location: the latest ping
/// by `created_on`, or `None` for a user that has no recorded locations yet.
#[derive(Debug, Clone, PartialEq)]
pub struct UserLatestLocation {
    /// Unique user ID.
    pub user_id: Uuid,
    /// User's email address.
    pub email: Email,
    /// User's first name.
    pub first_name: String,
    /// User's second name.
    pub second_name: String,
    /// The latest recorded location, if any.
    pub location: Option<Location>,
}
