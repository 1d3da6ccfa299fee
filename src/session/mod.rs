//! Session lifecycle: login, restore on load, logout
//!
//! [`SessionManager`] is the single writer of the persisted tokens and of the
//! derived [`Identity`]. Everything else observes the session through a
//! [`SessionHandle`], which can read and wait but never write.
//!
//! Identity is present if and only if an unexpired session token is stored.
//! `initialize` and `login` update the store and the published snapshot
//! together while holding the commit guard; when they overlap, whichever
//! commits last wins. A failed login write rolls the store back.
//!
//! `logout` is the exception: it drops the in-memory session before touching
//! the store, so this process is signed out even if the store fails. That
//! store error is returned; until a later `logout` succeeds, the next
//! `initialize` would restore the leftover token.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use tokio::sync::{Mutex, watch};

use crate::client::AuthApi;
use crate::client::models::LoginRequest;
use crate::error::{Error, Result, StoreError};

mod identity;
pub mod store;
pub mod token;

pub use identity::{Identity, Role};
pub use store::{REFRESH_TOKEN_KEY, SqliteTokenStore, TOKEN_KEY, TokenStore};
pub use token::decode_claims;

/// Whether someone is logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// What readers see of the session at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// True until the stored token has been checked once
    pub loading: bool,
    pub identity: Option<Identity>,
    /// Token expiry, when the token could be decoded
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionSnapshot {
    fn loading() -> Self {
        Self {
            loading: true,
            identity: None,
            expires_at: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.identity.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

/// Read-only view of the session for consumers.
///
/// Consumers must not treat `Anonymous` as final while `loading` is true;
/// [`SessionHandle::ready`] waits for the first check to finish.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    rx: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    /// Current snapshot, possibly still loading
    pub fn snapshot(&self) -> SessionSnapshot {
        self.rx.borrow().clone()
    }

    /// Wait until the stored session has been checked
    pub async fn ready(&mut self) -> SessionSnapshot {
        if let Ok(snapshot) = self.rx.wait_for(|s| !s.loading).await {
            return snapshot.clone();
        }
        // Manager dropped; whatever was last published is final
        self.rx.borrow().clone()
    }

    /// Identity once ready, or `NotAuthenticated`
    pub async fn require_identity(&mut self) -> Result<Identity> {
        self.ready().await.identity.ok_or(Error::NotAuthenticated)
    }

    /// Identity once ready, checked against the allowed roles
    pub async fn require_any_role(&mut self, roles: &[Role]) -> Result<Identity> {
        let identity = self.require_identity().await?;
        if identity.has_any_role(roles) {
            Ok(identity)
        } else {
            let wanted: Vec<&str> = roles.iter().map(Role::as_str).collect();
            Err(Error::MissingRole(wanted.join(", ")))
        }
    }
}

/// Owner of the token lifecycle
pub struct SessionManager {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn TokenStore>,
    tx: watch::Sender<SessionSnapshot>,
    /// In-memory session token; also the commit guard
    token: Mutex<Option<String>>,
}

impl SessionManager {
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn TokenStore>) -> Self {
        let (tx, _rx) = watch::channel(SessionSnapshot::loading());
        Self {
            api,
            store,
            tx,
            token: Mutex::new(None),
        }
    }

    /// New read-only handle on this session
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            rx: self.tx.subscribe(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    /// Session token currently held in memory
    pub async fn token(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    /// Restore the session from the store.
    ///
    /// A malformed or expired token is a silent logout: both keys are cleared
    /// and the session ends up anonymous without an error. Only store failures
    /// are returned. `loading` is always false afterwards.
    pub async fn initialize(&self) -> Result<SessionState> {
        let result = self.restore().await;
        self.tx.send_modify(|s| s.loading = false);
        result
    }

    async fn restore(&self) -> Result<SessionState> {
        let mut held = self.token.lock().await;

        let stored = match self.store.get(TOKEN_KEY).await? {
            Some(stored) => stored,
            None => {
                debug!("No stored session token");
                *held = None;
                self.publish(None, None);
                return Ok(SessionState::Anonymous);
            }
        };

        let claims = match decode_claims(&stored) {
            Ok(claims) if !claims.is_expired() => claims,
            Ok(claims) => {
                info!(
                    "Stored session {} expired at {}, clearing",
                    token::fingerprint(&stored),
                    claims.expires_at
                );
                *held = None;
                self.publish(None, None);
                self.clear_store().await?;
                return Ok(SessionState::Anonymous);
            }
            Err(e) => {
                info!(
                    "Stored session {} is unreadable ({}), clearing",
                    token::fingerprint(&stored),
                    e
                );
                *held = None;
                self.publish(None, None);
                self.clear_store().await?;
                return Ok(SessionState::Anonymous);
            }
        };

        debug!(
            "Restored session {} for {}",
            token::fingerprint(&stored),
            claims.sub
        );
        let identity = Identity::new(claims.sub, claims.roles);
        *held = Some(stored);
        self.publish(Some(identity), Some(claims.expires_at));
        Ok(SessionState::Authenticated)
    }

    /// Log in with a credential.
    ///
    /// Identity takes the caller's email and the roles from the response.
    /// On any failure the previous session, stored or in memory, is untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&request).await?;

        let expires_at = match decode_claims(&response.token) {
            Ok(claims) => {
                if !claims.sub.eq_ignore_ascii_case(email) {
                    warn!(
                        "Token subject {} differs from login email {}",
                        claims.sub, email
                    );
                }
                Some(claims.expires_at)
            }
            Err(e) => {
                debug!("Login token is not decodable: {}", e);
                None
            }
        };

        let mut held = self.token.lock().await;

        self.persist(&response.token, response.refresh_token.as_deref())
            .await?;

        info!(
            "Logged in as {} (session {})",
            email,
            token::fingerprint(&response.token)
        );
        let identity = Identity::new(email, response.roles);
        *held = Some(response.token);
        self.publish(Some(identity.clone()), expires_at);

        Ok(identity)
    }

    /// End the session. Safe to call when already anonymous.
    ///
    /// The session is anonymous on return even when clearing the store fails.
    pub async fn logout(&self) -> Result<()> {
        let mut held = self.token.lock().await;
        *held = None;
        self.publish(None, None);
        self.clear_store().await?;
        debug!("Session cleared");
        Ok(())
    }

    fn publish(&self, identity: Option<Identity>, expires_at: Option<DateTime<Utc>>) {
        self.tx.send_modify(|s| {
            s.identity = identity;
            s.expires_at = expires_at;
        });
    }

    /// Write both keys, restoring the previous values if any write fails
    async fn persist(&self, token: &str, refresh: Option<&str>) -> Result<()> {
        let previous_token = self.store.get(TOKEN_KEY).await?;
        let previous_refresh = self.store.get(REFRESH_TOKEN_KEY).await?;

        let written: std::result::Result<(), StoreError> = async {
            self.store.set(TOKEN_KEY, token).await?;
            match refresh {
                Some(refresh) => self.store.set(REFRESH_TOKEN_KEY, refresh).await,
                None => self.store.remove(REFRESH_TOKEN_KEY).await,
            }
        }
        .await;

        if let Err(e) = written {
            warn!("Failed to persist session, restoring previous tokens: {}", e);
            self.restore_key(TOKEN_KEY, previous_token).await;
            self.restore_key(REFRESH_TOKEN_KEY, previous_refresh).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn restore_key(&self, key: &str, value: Option<String>) {
        let result = match value {
            Some(v) => self.store.set(key, &v).await,
            None => self.store.remove(key).await,
        };
        if let Err(e) = result {
            warn!("Failed to restore {}: {}", key, e);
        }
    }

    /// Remove both keys, attempting each even if the first fails
    async fn clear_store(&self) -> std::result::Result<(), StoreError> {
        let token = self.store.remove(TOKEN_KEY).await;
        let refresh = self.store.remove(REFRESH_TOKEN_KEY).await;
        token.and(refresh)
    }
}
