//! orgward-server - axum boundary guard for orgward access control
//!
//! This crate turns access decisions from `orgward-core` into HTTP
//! outcomes. Handlers either sit behind [`authorize_middleware`] with a
//! fixed [`Requirement`](orgward_core::Requirement), or call [`OrgGuard`]
//! themselves when the requirement depends on the request. A negative
//! decision becomes a 403 carrying the decision's reason.

mod error;
pub mod guard;
pub mod http;
pub mod identity;
pub mod middleware;
mod state;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

pub use error::{ErrorBody, GuardError, ServerError};
pub use guard::{OrgGuard, RouteGuard};
pub use http::create_router;
pub use identity::{Membership, Principal, RequestIdentity};
pub use middleware::{authorize_middleware, trusted_user_header};
pub use state::AppState;

/// Port the demo API binds to unless configured otherwise
pub const DEFAULT_PORT: u16 = 7480;

/// Where the demo API listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("127.0.0.1", DEFAULT_PORT)
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port` as given, used for binding and log lines
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Demo API: the guarded routes of [`create_router`] over shared state
pub struct OrgwardServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl OrgwardServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Serve until the process is interrupted
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
    }

    /// Serve until `shutdown` completes, letting in-flight requests finish
    pub async fn run_until(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        tracing::info!("orgward server listening on {}", addr);

        let app = create_router(self.state).into_make_service_with_connect_info::<SocketAddr>();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        tracing::info!("orgward server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_loopback() {
        assert_eq!(ServerConfig::default(), ServerConfig::new("127.0.0.1", DEFAULT_PORT));
        assert_eq!(ServerConfig::new("0.0.0.0", 8080).addr(), "0.0.0.0:8080");
    }

    #[test]
    fn server_shares_state() {
        let server = OrgwardServer::new(ServerConfig::new("127.0.0.1", 9000), AppState::empty());
        assert_eq!(server.config().port, 9000);
        assert!(Arc::ptr_eq(&server.state(), &server.state()));
    }

    #[tokio::test]
    async fn run_until_stops_on_shutdown() {
        let server = OrgwardServer::new(ServerConfig::new("127.0.0.1", 0), AppState::empty());
        server.run_until(async {}).await.unwrap();
    }

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let server = OrgwardServer::new(ServerConfig::new("127.0.0.1", port), AppState::empty());
        let err = server.run_until(async {}).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
