//! # Authentication Operations
//!
//! Sign-in, sign-out, and staff account creation.
//!
//! ## Credential Check
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sign-In Flow                                     │
//! │                                                                         │
//! │  "admin" / "admin"                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  SHA-256(password) ──► hex digest                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  SELECT ... WHERE username = ? AND password_hash = ?                    │
//! │         │                                                               │
//! │    ┌────┴─────┐                                                         │
//! │    ▼          ▼                                                         │
//! │  Some(row)   None ──► INVALID_CREDENTIALS                               │
//! │    │              (same message for unknown user and wrong password)    │
//! │    ▼                                                                    │
//! │  SessionState = Some(Session)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use gilded_core::validation::{validate_password, validate_username};
use gilded_core::{password_digest, Role};
use gilded_db::Database;

use crate::error::{ServiceError, ServiceResult};
use crate::session::{Session, SessionState};

/// Sign-in request from the login screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Staff account creation request (manager screens only).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateStaffRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// A staff account as shown on the manager screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StaffDto {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// Signs a staff member in.
///
/// On success the session state holds the new session (replacing any
/// previous one) and a copy is returned for the shell.
///
/// ## Errors
/// - `VALIDATION_ERROR` if either field is empty
/// - `INVALID_CREDENTIALS` if no row matches; the message never says
///   whether the username exists
pub async fn sign_in(
    db: &Database,
    sessions: &SessionState,
    request: SignInRequest,
) -> ServiceResult<Session> {
    let username = request.username.trim();
    debug!(username = %username, "sign_in");

    if username.is_empty() {
        return Err(ServiceError::validation("Username is required"));
    }
    if request.password.is_empty() {
        return Err(ServiceError::validation("Password is required"));
    }

    let digest = password_digest(&request.password);
    match db.staff().find_by_credentials(username, &digest).await? {
        Some(user) => {
            let session = Session::from_staff(&user);
            sessions.sign_in(session.clone());
            info!(username = %user.username, role = ?user.role, "Staff signed in");
            Ok(session)
        }
        None => {
            debug!(username = %username, "Sign-in rejected");
            Err(ServiceError::invalid_credentials())
        }
    }
}

/// Signs the active staff member out.
///
/// Never fails; returns the departed session, or `None` if nobody was
/// signed in.
pub fn sign_out(sessions: &SessionState) -> Option<Session> {
    let departed = sessions.sign_out();
    if let Some(session) = &departed {
        info!(username = %session.username, "Staff signed out");
    }
    departed
}

/// Creates a staff account. Manager only.
///
/// The password is digested before it reaches the database; the plain
/// text is never stored or logged.
///
/// ## Errors
/// - `FORBIDDEN` without a manager session
/// - `VALIDATION_ERROR` on malformed username/password, or when the
///   username is already taken
pub async fn create_staff_account(
    db: &Database,
    sessions: &SessionState,
    request: CreateStaffRequest,
) -> ServiceResult<StaffDto> {
    sessions.require_manager()?;

    let username = request.username.trim();
    debug!(username = %username, role = ?request.role, "create_staff_account");

    validate_username(username)?;
    validate_password(&request.password)?;

    let digest = password_digest(&request.password);
    let user = db.staff().insert(username, &digest, request.role).await?;

    info!(username = %user.username, role = ?user.role, "Staff account created");

    Ok(StaffDto {
        id: user.id,
        username: user.username,
        role: user.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use gilded_db::DbConfig;

    async fn fresh() -> (Database, SessionState) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        (db, SessionState::new())
    }

    fn login(username: &str, password: &str) -> SignInRequest {
        SignInRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_admin_signs_in() {
        let (db, sessions) = fresh().await;

        let session = sign_in(&db, &sessions, login("admin", "admin")).await.unwrap();

        assert_eq!(session.username, "admin");
        assert!(session.is_manager());
        assert_eq!(sessions.current().unwrap(), session);
    }

    #[tokio::test]
    async fn test_rejection_message_does_not_reveal_accounts() {
        let (db, sessions) = fresh().await;

        let wrong_password = sign_in(&db, &sessions, login("admin", "nope"))
            .await
            .unwrap_err();
        let unknown_user = sign_in(&db, &sessions, login("ghost", "nope"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password.code, ErrorCode::InvalidCredentials);
        assert_eq!(unknown_user.code, ErrorCode::InvalidCredentials);
        assert_eq!(wrong_password.message, unknown_user.message);
        assert!(sessions.current().is_none());
    }

    #[tokio::test]
    async fn test_empty_fields_rejected_before_lookup() {
        let (db, sessions) = fresh().await;

        let err = sign_in(&db, &sessions, login("", "admin")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = sign_in(&db, &sessions, login("admin", "")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_username_is_trimmed() {
        let (db, sessions) = fresh().await;

        let session = sign_in(&db, &sessions, login("  admin  ", "admin"))
            .await
            .unwrap();
        assert_eq!(session.username, "admin");
    }

    #[tokio::test]
    async fn test_sign_out_clears_the_session() {
        let (db, sessions) = fresh().await;
        sign_in(&db, &sessions, login("admin", "admin")).await.unwrap();

        let departed = sign_out(&sessions).unwrap();
        assert_eq!(departed.username, "admin");
        assert!(sessions.current().is_none());
        assert!(sign_out(&sessions).is_none());
    }

    #[tokio::test]
    async fn test_create_staff_requires_manager() {
        let (db, sessions) = fresh().await;
        let request = CreateStaffRequest {
            username: "carla".to_string(),
            password: "s3cret".to_string(),
            role: Role::Server,
        };

        // Signed out entirely.
        let err = create_staff_account(&db, &sessions, request.clone())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        // Signed in as a server.
        sign_in(&db, &sessions, login("admin", "admin")).await.unwrap();
        create_staff_account(&db, &sessions, request).await.unwrap();
        sign_in(&db, &sessions, login("carla", "s3cret")).await.unwrap();

        let err = create_staff_account(
            &db,
            &sessions,
            CreateStaffRequest {
                username: "dave".to_string(),
                password: "pw".to_string(),
                role: Role::Server,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn test_created_account_can_sign_in() {
        let (db, sessions) = fresh().await;
        sign_in(&db, &sessions, login("admin", "admin")).await.unwrap();

        let created = create_staff_account(
            &db,
            &sessions,
            CreateStaffRequest {
                username: "carla".to_string(),
                password: "s3cret".to_string(),
                role: Role::Server,
            },
        )
        .await
        .unwrap();
        assert_eq!(created.role, Role::Server);

        let session = sign_in(&db, &sessions, login("carla", "s3cret")).await.unwrap();
        assert_eq!(session.user_id, created.id);
        assert!(!session.is_manager());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let (db, sessions) = fresh().await;
        sign_in(&db, &sessions, login("admin", "admin")).await.unwrap();

        let err = create_staff_account(
            &db,
            &sessions,
            CreateStaffRequest {
                username: "admin".to_string(),
                password: "other".to_string(),
                role: Role::Server,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("already exists"));
    }

    #[tokio::test]
    async fn test_malformed_username_rejected() {
        let (db, sessions) = fresh().await;
        sign_in(&db, &sessions, login("admin", "admin")).await.unwrap();

        let err = create_staff_account(
            &db,
            &sessions,
            CreateStaffRequest {
                username: "has space".to_string(),
                password: "pw".to_string(),
                role: Role::Server,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
