//! Access checker bound to one organization user context
//!
//! Every enforcement path goes through [`AccessChecker`]. All operations are
//! pure: the result depends only on the static catalog and the context the
//! checker was built from. Denials are values, never errors.

use crate::catalog::{self, Permission, Role};
use crate::check::PermissionCheck;
use crate::context::OrganizationUserContext;

/// Reason given whenever the membership is not active
pub const INACTIVE_REASON: &str = "User is not active in this organization";

/// Who may manage (change the role of, remove) whom.
///
/// Independent of [`Role::level`]. Owners manage everyone, admins manage
/// members and viewers, nobody else manages anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagementPolicy;

impl ManagementPolicy {
    pub fn allows(actor: Role, target: Role) -> bool {
        match actor {
            Role::Owner => true,
            Role::Admin => matches!(target, Role::Member | Role::Viewer),
            Role::Member | Role::Viewer => false,
        }
    }
}

/// Evaluates access decisions for a single [`OrganizationUserContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessChecker {
    context: OrganizationUserContext,
}

impl AccessChecker {
    pub fn new(context: OrganizationUserContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &OrganizationUserContext {
        &self.context
    }

    pub fn role(&self) -> Role {
        self.context.role
    }

    /// Inactive memberships are denied before any role-based rule runs
    fn active_gate(&self) -> Option<PermissionCheck> {
        if self.context.is_active() {
            None
        } else {
            Some(PermissionCheck::denied(INACTIVE_REASON))
        }
    }

    pub fn can(&self, permission: Permission) -> PermissionCheck {
        if let Some(denied) = self.active_gate() {
            return denied;
        }
        let role = self.context.role;
        PermissionCheck::from_bool(catalog::has_permission(role, permission), || {
            format!("Role '{role}' does not have permission '{permission}'")
        })
    }

    /// Check a permission given as a string; unknown identifiers are denied
    pub fn can_str(&self, permission: &str) -> PermissionCheck {
        if let Some(denied) = self.active_gate() {
            return denied;
        }
        match permission.parse::<Permission>() {
            Ok(permission) => self.can(permission),
            Err(_) => PermissionCheck::denied(format!("Unknown permission '{permission}'")),
        }
    }

    pub fn can_all(&self, permissions: &[Permission]) -> PermissionCheck {
        if let Some(denied) = self.active_gate() {
            return denied;
        }
        let role = self.context.role;
        PermissionCheck::from_bool(catalog::has_all_permissions(role, permissions), || {
            format!("Role '{role}' does not have all required permissions")
        })
    }

    pub fn can_any(&self, permissions: &[Permission]) -> PermissionCheck {
        if let Some(denied) = self.active_gate() {
            return denied;
        }
        let role = self.context.role;
        PermissionCheck::from_bool(catalog::has_any_permission(role, permissions), || {
            format!("Role '{role}' does not have any of the required permissions")
        })
    }

    pub fn has_role(&self, required: Role) -> PermissionCheck {
        if let Some(denied) = self.active_gate() {
            return denied;
        }
        let role = self.context.role;
        PermissionCheck::from_bool(catalog::has_role_level(role, required), || {
            format!("Role '{role}' does not meet the required role '{required}'")
        })
    }

    pub fn is_owner(&self) -> bool {
        self.context.is_active() && self.context.role == Role::Owner
    }

    pub fn is_admin_or_owner(&self) -> bool {
        self.context.is_active() && matches!(self.context.role, Role::Owner | Role::Admin)
    }

    /// Whether this user may manage a user holding `target`.
    ///
    /// Decided by [`ManagementPolicy`], not by hierarchy level.
    pub fn can_manage_user(&self, target: Role) -> PermissionCheck {
        if let Some(denied) = self.active_gate() {
            return denied;
        }
        let role = self.context.role;
        PermissionCheck::from_bool(ManagementPolicy::allows(role, target), || {
            format!("Role '{role}' cannot manage users with role '{target}'")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{MembershipStatus, OrganizationId, UserId};

    fn context(role: Role, status: MembershipStatus) -> OrganizationUserContext {
        OrganizationUserContext::new(UserId::generate(), OrganizationId::generate(), role)
            .with_status(status)
    }

    fn active(role: Role) -> AccessChecker {
        AccessChecker::new(context(role, MembershipStatus::Active))
    }

    #[test]
    fn test_member_can_create_post() {
        let check = active(Role::Member).can(Permission::PostCreate);
        assert_eq!(check, PermissionCheck::granted());
    }

    #[test]
    fn test_member_cannot_delete_organization() {
        let check = active(Role::Member).can(Permission::OrganizationDelete);
        assert!(!check.is_granted());
        assert_eq!(
            check.reason(),
            Some("Role 'member' does not have permission 'organization:delete'")
        );
    }

    #[test]
    fn test_inactive_denies_every_permission() {
        for status in [MembershipStatus::Invited, MembershipStatus::Suspended] {
            let checker = AccessChecker::new(context(Role::Owner, status));
            for permission in Permission::ALL {
                let check = checker.can(permission);
                assert!(!check.is_granted());
                assert_eq!(check.reason(), Some(INACTIVE_REASON));
            }
        }
    }

    #[test]
    fn test_inactive_gate_applies_to_every_operation() {
        let checker = AccessChecker::new(context(Role::Owner, MembershipStatus::Suspended));
        assert_eq!(checker.can_all(&[]).reason(), Some(INACTIVE_REASON));
        assert_eq!(
            checker.can_any(&[Permission::PostView]).reason(),
            Some(INACTIVE_REASON)
        );
        assert_eq!(checker.has_role(Role::Viewer).reason(), Some(INACTIVE_REASON));
        assert_eq!(
            checker.can_manage_user(Role::Viewer).reason(),
            Some(INACTIVE_REASON)
        );
        assert_eq!(checker.can_str("post:view").reason(), Some(INACTIVE_REASON));
    }

    #[test]
    fn test_can_all_and_can_any() {
        let checker = active(Role::Member);
        let mixed = [Permission::PostCreate, Permission::PostDelete];
        assert!(!checker.can_all(&mixed).is_granted());
        assert_eq!(
            checker.can_all(&mixed).reason(),
            Some("Role 'member' does not have all required permissions")
        );
        assert!(checker.can_any(&mixed).is_granted());
        assert!(checker.can_all(&[]).is_granted());
        assert!(!checker.can_any(&[]).is_granted());
    }

    #[test]
    fn test_has_role() {
        assert!(active(Role::Admin).has_role(Role::Member).is_granted());
        let check = active(Role::Viewer).has_role(Role::Admin);
        assert_eq!(
            check.reason(),
            Some("Role 'viewer' does not meet the required role 'admin'")
        );
    }

    #[test]
    fn test_is_owner() {
        for role in Role::ALL {
            for status in [
                MembershipStatus::Active,
                MembershipStatus::Invited,
                MembershipStatus::Suspended,
            ] {
                let checker = AccessChecker::new(context(role, status));
                assert_eq!(
                    checker.is_owner(),
                    role == Role::Owner && status == MembershipStatus::Active
                );
            }
        }
    }

    #[test]
    fn test_is_admin_or_owner() {
        assert!(active(Role::Admin).is_admin_or_owner());
        assert!(active(Role::Owner).is_admin_or_owner());
        assert!(!active(Role::Member).is_admin_or_owner());
        let suspended = AccessChecker::new(context(Role::Admin, MembershipStatus::Suspended));
        assert!(!suspended.is_admin_or_owner());
    }

    #[test]
    fn test_owner_manages_anyone() {
        let checker = active(Role::Owner);
        for target in Role::ALL {
            assert!(checker.can_manage_user(target).is_granted());
        }
    }

    #[test]
    fn test_admin_manages_only_member_and_viewer() {
        let checker = active(Role::Admin);
        assert!(checker.can_manage_user(Role::Member).is_granted());
        assert!(checker.can_manage_user(Role::Viewer).is_granted());
        assert!(!checker.can_manage_user(Role::Owner).is_granted());
        let check = checker.can_manage_user(Role::Admin);
        assert_eq!(
            check.reason(),
            Some("Role 'admin' cannot manage users with role 'admin'")
        );
    }

    #[test]
    fn test_member_and_viewer_manage_no_one() {
        for role in [Role::Member, Role::Viewer] {
            let checker = active(role);
            for target in Role::ALL {
                assert!(!checker.can_manage_user(target).is_granted());
            }
        }
    }

    #[test]
    fn test_management_policy_is_stricter_than_levels() {
        // Same level never manages same level, except the owner.
        assert!(catalog::has_role_level(Role::Admin, Role::Admin));
        assert!(!ManagementPolicy::allows(Role::Admin, Role::Admin));
        assert!(ManagementPolicy::allows(Role::Owner, Role::Owner));
        assert!(catalog::has_role_level(Role::Member, Role::Viewer));
        assert!(!ManagementPolicy::allows(Role::Member, Role::Viewer));
    }

    #[test]
    fn test_can_str() {
        let checker = active(Role::Member);
        assert!(checker.can_str("post:create").is_granted());
        assert_eq!(
            checker.can_str("post:launch").reason(),
            Some("Unknown permission 'post:launch'")
        );
    }
}
