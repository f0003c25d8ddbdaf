//! Application services.

pub mod users;

pub use users::{ServiceError, UserService};
