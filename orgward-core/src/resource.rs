//! Resource/action mapping for CRUD-shaped call sites

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Permission;
use crate::check::PermissionCheck;
use crate::context::OrganizationUserContext;
use crate::error::ParseError;

/// Resource kinds addressable by generic CRUD call sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Organization,
    Member,
    Post,
    Project,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        Self::Organization,
        Self::Member,
        Self::Post,
        Self::Project,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Member => "member",
            Self::Post => "post",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| ParseError::UnknownResource(s.to_string()))
    }
}

/// Generic CRUD actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
    Manage,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Self::View,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Manage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Manage => "manage",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

/// The permission a `(resource, action)` pair stands for, if any
pub fn resource_permission(resource: ResourceType, action: Action) -> Option<Permission> {
    use Action::*;
    use ResourceType::*;

    let permission = match (resource, action) {
        (Organization, View) => Permission::OrganizationView,
        (Organization, Update) => Permission::OrganizationUpdate,
        (Organization, Delete) => Permission::OrganizationDelete,
        (Organization, Manage) => Permission::OrganizationManageSettings,
        (Member, View) => Permission::MemberView,
        (Member, Create) => Permission::MemberInvite,
        (Member, Update) | (Member, Manage) => Permission::MemberUpdateRole,
        (Member, Delete) => Permission::MemberRemove,
        (Post, View) => Permission::PostView,
        (Post, Create) => Permission::PostCreate,
        (Post, Update) => Permission::PostUpdate,
        (Post, Delete) => Permission::PostDelete,
        (Post, Manage) => Permission::PostPublish,
        (Project, View) => Permission::ProjectView,
        (Project, Create) => Permission::ProjectCreate,
        (Project, Update) => Permission::ProjectUpdate,
        (Project, Delete) => Permission::ProjectDelete,
        (Organization, Create) | (Project, Manage) => return None,
    };
    Some(permission)
}

fn invalid_combination(resource: &str, action: &str) -> PermissionCheck {
    PermissionCheck::denied(format!(
        "Invalid resource/action combination: {resource}:{action}"
    ))
}

/// Typed resource access check
pub fn can_access(
    context: &OrganizationUserContext,
    resource: ResourceType,
    action: Action,
) -> PermissionCheck {
    match resource_permission(resource, action) {
        Some(permission) => context.checker().can(permission),
        None => invalid_combination(resource.as_str(), action.as_str()),
    }
}

/// Resource access check for string-typed call sites.
///
/// Unknown resources, unknown actions and unmapped pairs are all denied with
/// the same "invalid combination" reason.
pub fn can_access_resource(
    context: &OrganizationUserContext,
    resource: &str,
    action: &str,
) -> PermissionCheck {
    match (resource.parse::<ResourceType>(), action.parse::<Action>()) {
        (Ok(resource), Ok(action)) => can_access(context, resource, action),
        _ => invalid_combination(resource, action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Role;
    use crate::context::{MembershipStatus, OrganizationId, UserId};

    fn context(role: Role) -> OrganizationUserContext {
        OrganizationUserContext::new(UserId::generate(), OrganizationId::generate(), role)
    }

    #[test]
    fn test_post_delete_matches_can() {
        for role in Role::ALL {
            let ctx = context(role);
            assert_eq!(
                can_access_resource(&ctx, "post", "delete"),
                ctx.checker().can(Permission::PostDelete)
            );
        }
    }

    #[test]
    fn test_every_mapped_pair_matches_can() {
        let ctx = context(Role::Member);
        for resource in ResourceType::ALL {
            for action in Action::ALL {
                if let Some(permission) = resource_permission(resource, action) {
                    assert_eq!(
                        can_access(&ctx, resource, action),
                        ctx.checker().can(permission)
                    );
                }
            }
        }
    }

    #[test]
    fn test_invalid_action_is_denied_not_error() {
        let ctx = context(Role::Owner);
        let check = can_access_resource(&ctx, "organization", "invalid-action");
        assert!(!check.is_granted());
        assert_eq!(
            check.reason(),
            Some("Invalid resource/action combination: organization:invalid-action")
        );
    }

    #[test]
    fn test_unmapped_pair_is_denied() {
        let ctx = context(Role::Owner);
        let check = can_access(&ctx, ResourceType::Organization, Action::Create);
        assert!(
            check
                .reason()
                .unwrap()
                .contains("Invalid resource/action combination")
        );
        let check = can_access_resource(&ctx, "invoice", "view");
        assert!(!check.is_granted());
    }

    #[test]
    fn test_inactive_context_is_denied() {
        let ctx = context(Role::Owner).with_status(MembershipStatus::Invited);
        let check = can_access_resource(&ctx, "post", "view");
        assert!(!check.is_granted());
        assert!(check.reason().unwrap().contains("not active"));
    }
}
