//! User service: the application-facing contract over the repository.
//!
//! The repository reports a missing user as an empty result; this layer turns
//! that into [`ServiceError::UserNotFound`] carrying the offending `user_id`
//! so callers and logs can name the user that was asked for.

use chrono::NaiveDateTime;
use sqlx::PgPool;
use uuid::Uuid;

use waypoint_core::{Location, User, UserLatestLocation, UserProfile};

use crate::db::{RepositoryError, UserRepository};

/// Errors surfaced by the user service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No user exists for the given id.
    #[error("user {user_id} not found")]
    UserNotFound {
        /// The id that did not match any user.
        user_id: Uuid,
    },

    /// Persistence failure, propagated unchanged.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Service for user and location operations.
pub struct UserService<'a> {
    repository: UserRepository<'a>,
}

impl<'a> UserService<'a> {
    /// Create a new user service on top of the given pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    /// Create or update a user. Creation and update are deliberately not
    /// distinguished.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` on validation or store failure.
    pub async fn create_or_update_user(
        &self,
        profile: &UserProfile,
    ) -> Result<User, ServiceError> {
        let user = self.repository.upsert_user(profile).await?;
        tracing::debug!(user_id = %user.user_id, "user upserted");
        Ok(user)
    }

    /// Record a location ping for an existing user.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::UserNotFound` when no user matches; no user is
    /// ever created by this path.
    pub async fn put_user_location(
        &self,
        user_id: Uuid,
        location: &Location,
    ) -> Result<User, ServiceError> {
        let user = self
            .repository
            .append_location(user_id, location)
            .await?
            .ok_or(ServiceError::UserNotFound { user_id })?;
        tracing::debug!(user_id = %user_id, count = user.locations.len(), "location appended");
        Ok(user)
    }

    /// Fetch a user with their single latest location, if any.
    ///
    /// A user without locations is a success with `location: None`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::UserNotFound` when no user matches.
    pub async fn get_user_latest_location(
        &self,
        user_id: Uuid,
    ) -> Result<UserLatestLocation, ServiceError> {
        self.repository
            .find_latest_location(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound { user_id })
    }

    /// Fetch a user with their locations filtered to `[from, to]` inclusive.
    ///
    /// A user with no pings in the window is a success with an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::UserNotFound` when no user matches.
    pub async fn get_user_locations_range(
        &self,
        user_id: Uuid,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<User, ServiceError> {
        self.repository
            .find_locations_in_range(user_id, from, to)
            .await?
            .ok_or(ServiceError::UserNotFound { user_id })
    }
}
