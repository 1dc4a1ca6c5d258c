//! Shared application state for the orgward server

use std::sync::Arc;

use axum::extract::FromRef;
use chrono::{DateTime, Utc};
use orgward_core::{GuardConfig, MembershipResolver, StaticMembershipResolver};

use crate::guard::OrgGuard;

/// Shared application state accessible by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Boundary guard for protected routes
    pub guard: OrgGuard,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(resolver: Arc<dyn MembershipResolver>, config: GuardConfig) -> Self {
        Self {
            guard: OrgGuard::new(resolver, config),
            started_at: Utc::now(),
        }
    }

    /// State with no memberships and default guard settings
    pub fn empty() -> Self {
        Self::new(
            Arc::new(StaticMembershipResolver::new()),
            GuardConfig::default(),
        )
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

impl FromRef<Arc<AppState>> for OrgGuard {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.guard.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_empty() {
        let state = AppState::empty();
        assert!(state.uptime_seconds() >= 0);
        assert_eq!(
            state.guard.config().organization_header,
            "x-organization-id"
        );
    }

    #[test]
    fn test_guard_from_ref_shares_config() {
        let state = Arc::new(AppState::new(
            Arc::new(StaticMembershipResolver::new()),
            GuardConfig::default().with_organization_header("x-tenant"),
        ));
        let guard = OrgGuard::from_ref(&state);
        assert_eq!(guard.config().organization_header, "x-tenant");
    }
}
