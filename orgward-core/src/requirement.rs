//! Access requirements shared by every enforcement adapter
//!
//! A [`Requirement`] names what a call site needs. The API guard, the UI
//! query cache and the render gates all evaluate it the same way through
//! [`Requirement::evaluate`], so they cannot drift apart.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Permission, Role};
use crate::check::PermissionCheck;
use crate::checker::{AccessChecker, INACTIVE_REASON};
use crate::context::OrganizationUserContext;

/// Reason given when no membership context exists
pub const NO_MEMBERSHIP_REASON: &str = "No organization membership";

/// What a call site requires of the acting user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Requirement {
    Permission(Permission),
    AllPermissions(Vec<Permission>),
    AnyPermission(Vec<Permission>),
    Role(Role),
    Owner,
    AdminOrOwner,
    /// May manage users holding the given role
    ManageRole(Role),
}

impl Requirement {
    pub fn evaluate(&self, checker: &AccessChecker) -> PermissionCheck {
        match self {
            Self::Permission(permission) => checker.can(*permission),
            Self::AllPermissions(permissions) => checker.can_all(permissions),
            Self::AnyPermission(permissions) => checker.can_any(permissions),
            Self::Role(role) => checker.has_role(*role),
            Self::Owner => role_flag(checker, checker.is_owner(), "Owner role required"),
            Self::AdminOrOwner => role_flag(
                checker,
                checker.is_admin_or_owner(),
                "Admin or owner role required",
            ),
            Self::ManageRole(target) => checker.can_manage_user(*target),
        }
    }

    /// Evaluate against a context that may be missing; absence denies
    pub fn evaluate_for(&self, context: Option<&OrganizationUserContext>) -> PermissionCheck {
        match context {
            Some(context) => self.evaluate(&AccessChecker::new(*context)),
            None => PermissionCheck::denied(NO_MEMBERSHIP_REASON),
        }
    }
}

fn role_flag(checker: &AccessChecker, allowed: bool, reason: &str) -> PermissionCheck {
    if allowed {
        PermissionCheck::granted()
    } else if !checker.context().is_active() {
        PermissionCheck::denied(INACTIVE_REASON)
    } else {
        PermissionCheck::denied(reason)
    }
}

impl From<Permission> for Requirement {
    fn from(permission: Permission) -> Self {
        Self::Permission(permission)
    }
}

impl From<Role> for Requirement {
    fn from(role: Role) -> Self {
        Self::Role(role)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(permissions: &[Permission]) -> String {
            permissions
                .iter()
                .map(Permission::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }

        match self {
            Self::Permission(permission) => write!(f, "permission {permission}"),
            Self::AllPermissions(permissions) => write!(f, "all of [{}]", join(permissions)),
            Self::AnyPermission(permissions) => write!(f, "any of [{}]", join(permissions)),
            Self::Role(role) => write!(f, "role {role} or above"),
            Self::Owner => f.write_str("owner"),
            Self::AdminOrOwner => f.write_str("admin or owner"),
            Self::ManageRole(target) => write!(f, "manage {target} users"),
        }
    }
}
