//! # Staff Repository
//!
//! Credential lookup and staff account management.
//!
//! ## Authentication Contract
//! Sign-in is a single query matching both the username and the password
//! digest. A bad username and a bad password are indistinguishable to the
//! caller: both come back as `None`. The stored digest never leaves this
//! module.

use sqlx::SqlitePool;
use tracing::debug;

use gilded_core::{Role, StaffUser};

use crate::error::{DbError, DbResult};

/// Repository for staff account operations.
#[derive(Debug, Clone)]
pub struct StaffRepository {
    pool: SqlitePool,
}

impl StaffRepository {
    /// Creates a new staff repository.
    pub fn new(pool: SqlitePool) -> Self {
        StaffRepository { pool }
    }

    /// Looks up a staff member by username and password digest.
    ///
    /// ## Arguments
    /// * `username` - Sign-in name, matched exactly
    /// * `password_digest` - Hex SHA-256 digest of the submitted password
    ///
    /// ## Returns
    /// * `Ok(Some(user))` - Credentials match
    /// * `Ok(None)` - No such user, or wrong password (indistinguishable)
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> DbResult<Option<StaffUser>> {
        let user = sqlx::query_as::<_, StaffUser>(
            r#"
            SELECT id, username, role
            FROM users
            WHERE username = ?1 AND password_hash = ?2
            "#,
        )
        .bind(username)
        .bind(password_digest)
        .fetch_optional(&self.pool)
        .await?;

        debug!(
            username = %username,
            matched = user.is_some(),
            "Credential lookup"
        );

        Ok(user)
    }

    /// Creates a staff account.
    ///
    /// ## Arguments
    /// * `username` - Must be unique
    /// * `password_digest` - Hex SHA-256 digest of the initial password
    /// * `role` - Manager or Server
    ///
    /// ## Returns
    /// * `Ok(user)` - The created account
    /// * `Err(DbError::UniqueViolation)` - Username already taken
    pub async fn insert(
        &self,
        username: &str,
        password_digest: &str,
        role: Role,
    ) -> DbResult<StaffUser> {
        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, role) VALUES (?1, ?2, ?3)",
        )
        .bind(username)
        .bind(password_digest)
        .bind(role)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.message().contains("UNIQUE constraint failed") =>
            {
                DbError::duplicate("username", username)
            }
            other => other.into(),
        })?;

        let id = result.last_insert_rowid();
        debug!(user_id = id, username = %username, role = %role, "Staff account created");

        Ok(StaffUser {
            id,
            username: username.to_string(),
            role,
        })
    }

    /// Counts staff accounts.
    pub async fn count(&self) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
