//! Boundary guard: resolve a membership, evaluate a requirement, and turn a
//! negative decision into a forbidden error.

use std::sync::Arc;

use orgward_core::{
    GuardConfig, MembershipResolver, OrganizationUserContext, Permission, Requirement, Role,
};
use tracing::{debug, warn};

use crate::error::GuardError;
use crate::identity::RequestIdentity;

/// Enforces requirements at API boundaries
#[derive(Clone)]
pub struct OrgGuard {
    resolver: Arc<dyn MembershipResolver>,
    config: Arc<GuardConfig>,
}

impl std::fmt::Debug for OrgGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrgGuard")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OrgGuard {
    pub fn new(resolver: Arc<dyn MembershipResolver>, config: GuardConfig) -> Self {
        Self {
            resolver,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Look up the caller's membership without enforcing anything
    pub async fn resolve(
        &self,
        identity: &RequestIdentity,
    ) -> Result<Option<OrganizationUserContext>, GuardError> {
        self.resolver
            .resolve(identity.user_id, identity.organization_id)
            .await
            .map_err(|e| {
                warn!(
                    user_id = %identity.user_id,
                    organization_id = %identity.organization_id,
                    "Membership lookup failed: {}",
                    e
                );
                GuardError::Resolver(e)
            })
    }

    /// Enforce `requirement`, returning the resolved membership on success
    pub async fn require(
        &self,
        identity: &RequestIdentity,
        requirement: &Requirement,
    ) -> Result<OrganizationUserContext, GuardError> {
        let context = self.resolve(identity).await?;
        let check = requirement.evaluate_for(context.as_ref());

        match context {
            Some(context) if check.is_granted() => Ok(context),
            _ => {
                let message = check
                    .reason
                    .unwrap_or_else(|| self.config.forbidden_message.clone());
                if self.config.log_denials {
                    debug!(
                        user_id = %identity.user_id,
                        organization_id = %identity.organization_id,
                        requirement = %requirement,
                        "Access denied: {}",
                        message
                    );
                }
                Err(GuardError::Forbidden(message))
            }
        }
    }

    pub async fn require_permission(
        &self,
        identity: &RequestIdentity,
        permission: Permission,
    ) -> Result<OrganizationUserContext, GuardError> {
        self.require(identity, &Requirement::Permission(permission))
            .await
    }

    pub async fn require_all(
        &self,
        identity: &RequestIdentity,
        permissions: &[Permission],
    ) -> Result<OrganizationUserContext, GuardError> {
        self.require(identity, &Requirement::AllPermissions(permissions.to_vec()))
            .await
    }

    pub async fn require_any(
        &self,
        identity: &RequestIdentity,
        permissions: &[Permission],
    ) -> Result<OrganizationUserContext, GuardError> {
        self.require(identity, &Requirement::AnyPermission(permissions.to_vec()))
            .await
    }

    pub async fn require_role(
        &self,
        identity: &RequestIdentity,
        role: Role,
    ) -> Result<OrganizationUserContext, GuardError> {
        self.require(identity, &Requirement::Role(role)).await
    }

    pub async fn require_owner(
        &self,
        identity: &RequestIdentity,
    ) -> Result<OrganizationUserContext, GuardError> {
        self.require(identity, &Requirement::Owner).await
    }

    pub async fn require_admin_or_owner(
        &self,
        identity: &RequestIdentity,
    ) -> Result<OrganizationUserContext, GuardError> {
        self.require(identity, &Requirement::AdminOrOwner).await
    }

    /// Require that the caller may manage users holding `target`
    pub async fn require_manage(
        &self,
        identity: &RequestIdentity,
        target: Role,
    ) -> Result<OrganizationUserContext, GuardError> {
        self.require(identity, &Requirement::ManageRole(target))
            .await
    }

    /// Bind a requirement for use as route middleware
    pub fn route(&self, requirement: impl Into<Requirement>) -> RouteGuard {
        RouteGuard {
            guard: self.clone(),
            requirement: Arc::new(requirement.into()),
        }
    }
}

/// A guard paired with the requirement of one route
#[derive(Debug, Clone)]
pub struct RouteGuard {
    pub(crate) guard: OrgGuard,
    pub(crate) requirement: Arc<Requirement>,
}

impl RouteGuard {
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }
}
