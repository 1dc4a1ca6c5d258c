//! Permission catalog
//!
//! The closed set of permissions, the four organization roles and the static
//! role → permission table. Lookups never fail: an unknown role string maps
//! to an empty permission set and hierarchy level 0.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A fine-grained `resource:action` permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Permission {
    OrganizationView,
    OrganizationUpdate,
    OrganizationDelete,
    OrganizationManageSettings,
    OrganizationManageBilling,
    MemberView,
    MemberInvite,
    MemberRemove,
    MemberUpdateRole,
    PostView,
    PostCreate,
    PostUpdate,
    PostDelete,
    PostPublish,
    ProjectView,
    ProjectCreate,
    ProjectUpdate,
    ProjectDelete,
    AnalyticsView,
}

impl Permission {
    /// Every permission, in declaration order
    pub const ALL: [Permission; 19] = [
        Self::OrganizationView,
        Self::OrganizationUpdate,
        Self::OrganizationDelete,
        Self::OrganizationManageSettings,
        Self::OrganizationManageBilling,
        Self::MemberView,
        Self::MemberInvite,
        Self::MemberRemove,
        Self::MemberUpdateRole,
        Self::PostView,
        Self::PostCreate,
        Self::PostUpdate,
        Self::PostDelete,
        Self::PostPublish,
        Self::ProjectView,
        Self::ProjectCreate,
        Self::ProjectUpdate,
        Self::ProjectDelete,
        Self::AnalyticsView,
    ];

    /// Canonical `resource:action` identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrganizationView => "organization:view",
            Self::OrganizationUpdate => "organization:update",
            Self::OrganizationDelete => "organization:delete",
            Self::OrganizationManageSettings => "organization:manage_settings",
            Self::OrganizationManageBilling => "organization:manage_billing",
            Self::MemberView => "member:view",
            Self::MemberInvite => "member:invite",
            Self::MemberRemove => "member:remove",
            Self::MemberUpdateRole => "member:update_role",
            Self::PostView => "post:view",
            Self::PostCreate => "post:create",
            Self::PostUpdate => "post:update",
            Self::PostDelete => "post:delete",
            Self::PostPublish => "post:publish",
            Self::ProjectView => "project:view",
            Self::ProjectCreate => "project:create",
            Self::ProjectUpdate => "project:update",
            Self::ProjectDelete => "project:delete",
            Self::AnalyticsView => "analytics:view",
        }
    }

    /// The resource half of the identifier
    pub fn resource(&self) -> &'static str {
        self.as_str()
            .split_once(':')
            .map(|(resource, _)| resource)
            .unwrap_or_default()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPermission(s.to_string()))
    }
}

impl TryFrom<String> for Permission {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for &'static str {
    fn from(permission: Permission) -> Self {
        permission.as_str()
    }
}

/// Organization role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full control, including deleting the organization and billing
    Owner,
    /// Manages the organization, its members and all content
    Admin,
    /// Creates and edits content
    Member,
    /// Read-only access
    Viewer,
}

impl Role {
    /// Every role, highest first
    pub const ALL: [Role; 4] = [Self::Owner, Self::Admin, Self::Member, Self::Viewer];

    /// Hierarchy level used for "at least this role" checks
    pub fn level(&self) -> u8 {
        match self {
            Self::Owner => 4,
            Self::Admin => 3,
            Self::Member => 2,
            Self::Viewer => 1,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Viewer => "viewer",
        }
    }

    /// Permissions carried by this role
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Self::Owner => &Permission::ALL,
            Self::Admin => ADMIN_PERMISSIONS,
            Self::Member => MEMBER_PERMISSIONS,
            Self::Viewer => VIEWER_PERMISSIONS,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            "viewer" => Ok(Self::Viewer),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::OrganizationView,
    Permission::OrganizationUpdate,
    Permission::OrganizationManageSettings,
    Permission::MemberView,
    Permission::MemberInvite,
    Permission::MemberRemove,
    Permission::MemberUpdateRole,
    Permission::PostView,
    Permission::PostCreate,
    Permission::PostUpdate,
    Permission::PostDelete,
    Permission::PostPublish,
    Permission::ProjectView,
    Permission::ProjectCreate,
    Permission::ProjectUpdate,
    Permission::ProjectDelete,
    Permission::AnalyticsView,
];

const MEMBER_PERMISSIONS: &[Permission] = &[
    Permission::OrganizationView,
    Permission::MemberView,
    Permission::PostView,
    Permission::PostCreate,
    Permission::PostUpdate,
    Permission::ProjectView,
    Permission::ProjectCreate,
    Permission::ProjectUpdate,
    Permission::AnalyticsView,
];

const VIEWER_PERMISSIONS: &[Permission] = &[
    Permission::OrganizationView,
    Permission::MemberView,
    Permission::PostView,
    Permission::ProjectView,
];

/// Permission set for a role
pub fn role_permissions(role: Role) -> &'static [Permission] {
    role.permissions()
}

/// Permission set for a role name; empty for unknown names
pub fn role_permissions_named(role: &str) -> &'static [Permission] {
    role.parse::<Role>()
        .map(|role| role.permissions())
        .unwrap_or(&[])
}

/// True iff `permission` is in the role's permission set
pub fn has_permission(role: Role, permission: Permission) -> bool {
    role.permissions().contains(&permission)
}

/// True iff the role carries every permission (vacuously true)
pub fn has_all_permissions(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().all(|p| has_permission(role, *p))
}

/// True iff the role carries at least one permission (vacuously false)
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| has_permission(role, *p))
}

/// True iff `user_role` sits at or above `required` in the hierarchy
pub fn has_role_level(user_role: Role, required: Role) -> bool {
    user_role.level() >= required.level()
}

/// Hierarchy level for a role name; 0 for unknown names
pub fn role_level_named(role: &str) -> u8 {
    role.parse::<Role>().map(|role| role.level()).unwrap_or(0)
}

/// Like [`has_role_level`] for a role name that may not be a known role
pub fn has_role_level_named(user_role: &str, required: Role) -> bool {
    role_level_named(user_role) >= required.level()
}

/// Permissions held by a lower role but missing from a higher one.
///
/// Each entry is `(higher, lower, permission)`. The table is maintained by
/// hand, so this is how the subset convention gets checked.
pub fn hierarchy_violations() -> Vec<(Role, Role, Permission)> {
    let mut violations = Vec::new();
    for higher in Role::ALL {
        for lower in Role::ALL.into_iter().filter(|r| r.level() < higher.level()) {
            for permission in lower.permissions() {
                if !has_permission(higher, *permission) {
                    violations.push((higher, lower, *permission));
                }
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_has_every_permission() {
        for permission in Permission::ALL {
            assert!(has_permission(Role::Owner, permission), "{permission}");
        }
    }

    #[test]
    fn test_admin_cannot_delete_organization_or_manage_billing() {
        assert!(!has_permission(Role::Admin, Permission::OrganizationDelete));
        assert!(!has_permission(
            Role::Admin,
            Permission::OrganizationManageBilling
        ));
        assert!(has_permission(Role::Admin, Permission::MemberUpdateRole));
    }

    #[test]
    fn test_member_permissions() {
        assert!(has_permission(Role::Member, Permission::PostCreate));
        assert!(has_permission(Role::Member, Permission::PostUpdate));
        assert!(!has_permission(Role::Member, Permission::PostDelete));
        assert!(!has_permission(Role::Member, Permission::MemberInvite));
        assert!(!has_permission(Role::Member, Permission::OrganizationDelete));
    }

    #[test]
    fn test_viewer_read_only() {
        for permission in role_permissions(Role::Viewer) {
            assert!(permission.as_str().ends_with(":view"), "{permission}");
        }
        assert!(!has_permission(Role::Viewer, Permission::AnalyticsView));
    }

    #[test]
    fn test_has_permission_matches_membership() {
        for role in Role::ALL {
            for permission in Permission::ALL {
                assert_eq!(
                    has_permission(role, permission),
                    role_permissions(role).contains(&permission)
                );
            }
        }
    }

    #[test]
    fn test_empty_lists() {
        for role in Role::ALL {
            assert!(has_all_permissions(role, &[]));
            assert!(!has_any_permission(role, &[]));
        }
    }

    #[test]
    fn test_all_and_any() {
        let mixed = [Permission::PostCreate, Permission::OrganizationDelete];
        assert!(!has_all_permissions(Role::Member, &mixed));
        assert!(has_any_permission(Role::Member, &mixed));
        assert!(has_all_permissions(Role::Owner, &mixed));
        assert!(!has_any_permission(
            Role::Viewer,
            &[Permission::PostCreate, Permission::OrganizationDelete]
        ));
    }

    #[test]
    fn test_role_level() {
        assert!(has_role_level(Role::Admin, Role::Member));
        assert!(has_role_level(Role::Member, Role::Member));
        assert!(!has_role_level(Role::Viewer, Role::Admin));
        assert!(has_role_level(Role::Owner, Role::Owner));
    }

    #[test]
    fn test_unknown_role_name() {
        assert!(role_permissions_named("unknown-role").is_empty());
        assert_eq!(role_level_named("unknown-role"), 0);
        assert!(!has_role_level_named("unknown-role", Role::Viewer));
        assert!(has_role_level_named("admin", Role::Member));
        assert_eq!(role_permissions_named("member"), role_permissions(Role::Member));
    }

    #[test]
    fn test_table_respects_hierarchy() {
        assert_eq!(hierarchy_violations(), Vec::new());
    }

    #[test]
    fn test_permission_str_roundtrip() {
        for permission in Permission::ALL {
            let parsed: Permission = permission.as_str().parse().unwrap();
            assert_eq!(parsed, permission);
        }
    }

    #[test]
    fn test_unknown_permission_is_error() {
        let err = "post:launch".parse::<Permission>().unwrap_err();
        assert_eq!(err, ParseError::UnknownPermission("post:launch".to_string()));
    }

    #[test]
    fn test_permission_resource() {
        assert_eq!(Permission::MemberUpdateRole.resource(), "member");
        assert_eq!(Permission::AnalyticsView.resource(), "analytics");
    }

    #[test]
    fn test_role_parse_is_exact() {
        assert_eq!("owner".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!(
            "Owner".parse::<Role>().unwrap_err(),
            ParseError::UnknownRole("Owner".to_string())
        );
        assert!("ADMIN".parse::<Role>().is_err());
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_mixed_case_role_names_grant_nothing() {
        assert!(role_permissions_named("OWNER").is_empty());
        assert_eq!(role_level_named("Admin"), 0);
        assert!(!has_role_level_named("OwNeR", Role::Viewer));
        assert_eq!(role_permissions_named("owner").len(), Permission::ALL.len());
    }

    #[test]
    fn test_serde_uses_canonical_strings() {
        let json = serde_json::to_string(&Permission::PostDelete).unwrap();
        assert_eq!(json, "\"post:delete\"");
        let role: Role = serde_json::from_str("\"viewer\"").unwrap();
        assert_eq!(role, Role::Viewer);
        assert!(serde_json::from_str::<Permission>("\"post:launch\"").is_err());
    }
}
