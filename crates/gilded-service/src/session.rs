//! # Session State
//!
//! Tracks who is signed in at the terminal.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple service calls may read the session concurrently
//! 2. Sign-in and sign-out must swap it atomically
//! 3. The UI shell may invoke operations from more than one thread
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Shell Action             Service Function        Session State Change  │
//! │  ────────────             ────────────────        ────────────────────  │
//! │                                                                         │
//! │  Submit Login ───────────► sign_in() ───────────► Some(Session)         │
//! │                                                                         │
//! │  Click Logout ───────────► sign_out() ──────────► None                  │
//! │                                                                         │
//! │  Any guarded call ───────► require() ───────────► (read only)           │
//! │                                                                         │
//! │  Manager screens ────────► require_manager() ───► (read only)           │
//! │                                                                         │
//! │  NOTE: A second sign-in replaces the active session. There is exactly   │
//! │        one terminal, so there is at most one session.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gilded_core::{Role, StaffUser};

use crate::error::{ServiceError, ServiceResult};

/// The signed-in staff member.
///
/// A frozen copy of the staff row at sign-in time. Renaming an account in
/// the database does not rename an already-active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    /// Staff row ID (used as `server_id` on orders opened by this session)
    pub user_id: i64,

    /// Username at sign-in time
    pub username: String,

    /// Role at sign-in time
    pub role: Role,
}

impl Session {
    /// Creates a session for a staff member who just authenticated.
    pub fn from_staff(user: &StaffUser) -> Self {
        Session {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }

    /// Returns true if this session belongs to a manager.
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}

/// Shared session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Option<Session>>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures sign-in/sign-out swap the session atomically
/// - `Option`: `None` means nobody is signed in
#[derive(Debug, Clone)]
pub struct SessionState {
    inner: Arc<Mutex<Option<Session>>>,
}

impl SessionState {
    /// Creates a new signed-out state.
    pub fn new() -> Self {
        SessionState {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Installs a session, replacing any active one.
    pub fn sign_in(&self, session: Session) {
        let mut guard = self.inner.lock().expect("Session mutex poisoned");
        *guard = Some(session);
    }

    /// Clears the session.
    ///
    /// ## Returns
    /// The session that was active, or `None` if nobody was signed in.
    pub fn sign_out(&self) -> Option<Session> {
        let mut guard = self.inner.lock().expect("Session mutex poisoned");
        guard.take()
    }

    /// Returns a copy of the active session, if any.
    pub fn current(&self) -> Option<Session> {
        let guard = self.inner.lock().expect("Session mutex poisoned");
        guard.clone()
    }

    /// Returns the active session or a `FORBIDDEN` error.
    ///
    /// Every guarded service function calls this first.
    pub fn require(&self) -> ServiceResult<Session> {
        self.current()
            .ok_or_else(|| ServiceError::forbidden("No staff member is signed in"))
    }

    /// Returns the active session if it belongs to a manager.
    pub fn require_manager(&self) -> ServiceResult<Session> {
        let session = self.require()?;
        if !session.is_manager() {
            return Err(ServiceError::forbidden("Manager role required"));
        }
        Ok(session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
