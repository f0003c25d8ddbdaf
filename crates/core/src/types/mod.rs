//! Core types for Waypoint.
//!
//! Users and their embedded location sequences are modelled as plain data
//! structures with no behavior; all query and aggregation logic lives in the
//! server's repository component.

pub mod email;
pub mod user;

pub use email::{Email, EmailError};
pub use user::{Location, User, UserLatestLocation, UserProfile};
