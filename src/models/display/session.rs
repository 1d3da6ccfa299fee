//! Session status display model

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::session::{Role, SessionSnapshot, SessionState};

/// Session summary for `status` output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDisplay {
    pub authenticated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub roles: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    pub api_host: String,
}

impl SessionDisplay {
    pub fn new(snapshot: &SessionSnapshot, api_host: &str) -> Self {
        let identity = snapshot.identity.as_ref();
        Self {
            authenticated: snapshot.state() == SessionState::Authenticated,
            email: identity.map(|i| i.email.clone()),
            roles: identity
                .map(|i| {
                    i.known_roles()
                        .iter()
                        .map(|r| r.as_str().to_string())
                        .collect()
                })
                .unwrap_or_default(),
            expires_at: snapshot.expires_at,
            api_host: api_host.to_string(),
        }
    }

    /// Roles as human labels, comma-separated
    pub fn role_labels(&self) -> String {
        self.roles
            .iter()
            .map(|r| Role::from(r.as_str()).label().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// "2h 15m" until expiry, or None when unknown or already passed
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<String> {
        let remaining = self.expires_at?.signed_duration_since(now);
        if remaining.num_seconds() <= 0 {
            return None;
        }
        Some(format!(
            "{}h {}m",
            remaining.num_hours(),
            remaining.num_minutes() % 60
        ))
    }
}
