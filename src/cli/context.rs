//! Command execution context
//!
//! Loads configuration, opens the session store, restores any saved session
//! and wires the API client, so each command starts from the same state.

use std::sync::Arc;

use log::{debug, warn};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::InspectionClient;
use crate::config::Config;
use crate::error::{ApiError, Error, Result};
use crate::session::{Identity, Role, SessionHandle, SessionManager, SqliteTokenStore};

/// Context for command execution containing config, client, session and output options.
pub struct CommandContext {
    pub config: Config,
    /// Resolved backend base URL
    pub api_host: String,
    /// API client; carries the session token once one is restored or issued
    pub client: Arc<InspectionClient>,
    pub session: SessionManager,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context and restore the saved session.
    ///
    /// A malformed or expired saved token leaves the session anonymous.
    ///
    /// # Errors
    /// Returns error if the config cannot be parsed or the session store
    /// cannot be opened or read.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default_at(opts.config_ref())?;
        let api_host = config.api_host(opts.api_host_ref());
        let format = opts.resolve_format(config.preferences.format.as_deref());

        debug!("Using API host {}", api_host);

        let client = Arc::new(InspectionClient::with_host(&api_host)?);
        let store_path = Config::session_store_path(opts.config_ref())?;
        let store = Arc::new(SqliteTokenStore::open_at(&store_path)?);

        let session = SessionManager::new(client.clone(), store);
        let state = session.initialize().await?;
        debug!("Session restored as {:?}", state);

        client.set_token(session.token().await).await;

        Ok(Self {
            config,
            api_host,
            client,
            session,
            format,
        })
    }

    pub fn handle(&self) -> SessionHandle {
        self.session.handle()
    }

    /// Identity of the signed-in user if they hold at least one of `roles`.
    pub async fn authorize(&self, roles: &[Role]) -> Result<Identity> {
        self.handle().require_any_role(roles).await
    }

    /// Pass `result` through, ending the session first when the backend
    /// rejected the token.
    pub async fn guard<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(Error::Api(ApiError::Unauthorized)) = result {
            warn!("Backend rejected the session token, signing out");
            if let Err(e) = self.session.logout().await {
                debug!("Failed to clear rejected session: {}", e);
            }
            self.client.set_token(None).await;
        }
        result
    }

    /// Default page size from preferences
    pub fn page_size(&self) -> usize {
        self.config.preferences.page_size
    }
}
