//! Persisted session store
//!
//! Holds the one piece of shared mutable client state. The record is loaded
//! once at startup and rewritten on every mutation (login, register, logout,
//! expiry, forced logout after a 401).

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::models::{PersistedSession, Session, SessionUser};
use super::storage::SessionStorage;
use crate::common::{safe_email_log, ApiError};

/// Storage key holding the session record.
pub const SESSION_STORAGE_KEY: &str = "auth-storage";

const SESSION_RECORD_VERSION: u32 = 0;

#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<Session>>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// Read the persisted record, falling back to a signed-out session when
    /// it is missing, unreadable or from another record version.
    pub async fn load(storage: Arc<dyn SessionStorage>) -> Result<Self, ApiError> {
        let session = match storage.get_item(SESSION_STORAGE_KEY).await? {
            Some(raw) => match serde_json::from_str::<PersistedSession>(&raw) {
                Ok(record) if record.version == SESSION_RECORD_VERSION => {
                    normalize(record.state)
                }
                Ok(record) => {
                    warn!(version = record.version, "Ignoring session record with unknown version");
                    Session::default()
                }
                Err(e) => {
                    warn!(error = %e, "Ignoring unreadable session record");
                    Session::default()
                }
            },
            None => Session::default(),
        };

        debug!(
            authenticated = session.is_authenticated,
            "Session loaded from storage"
        );

        Ok(Self {
            state: Arc::new(RwLock::new(session)),
            storage,
        })
    }

    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    pub async fn user(&self) -> Option<SessionUser> {
        self.state.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }

    /// Replace the session with a freshly authenticated one and persist it.
    pub async fn establish(&self, token: String, user: SessionUser) -> Result<Session, ApiError> {
        let session = Session::authenticated(token, user);
        let mut state = self.state.write().await;
        self.persist(&session).await?;
        *state = session.clone();

        if let Some(user) = &session.user {
            info!(
                email = %safe_email_log(&user.email),
                role = %user.role,
                "Session established"
            );
        }
        Ok(session)
    }

    /// Apply `update` to the stored user and persist the result.
    pub async fn update_user<F>(&self, update: F) -> Result<Option<SessionUser>, ApiError>
    where
        F: FnOnce(&mut SessionUser),
    {
        let mut state = self.state.write().await;
        let mut next = state.clone();
        match next.user.as_mut() {
            Some(user) => update(user),
            None => return Ok(None),
        }
        self.persist(&next).await?;
        *state = next;
        Ok(state.user.clone())
    }

    /// Drop the session and its persisted record. Safe to call repeatedly.
    ///
    /// Unlike `establish`, memory is reset before storage is touched: a
    /// record that cannot be removed must not keep the process signed in.
    pub async fn clear(&self) -> Result<(), ApiError> {
        let mut state = self.state.write().await;
        let was_authenticated = state.is_authenticated || state.token.is_some();
        *state = Session::default();
        self.storage.remove_item(SESSION_STORAGE_KEY).await?;

        if was_authenticated {
            info!("Session cleared");
        }
        Ok(())
    }

    async fn persist(&self, session: &Session) -> Result<(), ApiError> {
        let record = PersistedSession {
            state: session.clone(),
            version: SESSION_RECORD_VERSION,
        };
        let raw = serde_json::to_string(&record)?;
        self.storage.set_item(SESSION_STORAGE_KEY, &raw).await
    }
}

/// A record claiming authentication without a token or user cannot be
/// trusted; treat it as signed out.
fn normalize(session: Session) -> Session {
    if session.is_authenticated && (session.token.is_none() || session.user.is_none()) {
        warn!("Stored session is marked authenticated but incomplete; discarding");
        return Session::default();
    }
    session
}
