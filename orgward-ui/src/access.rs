//! Memoized access queries for UI code.
//!
//! An [`AccessQuery`] holds the current membership context, which may not
//! have loaded yet, and caches decisions per [`Requirement`]. The cache is
//! dropped whenever the context changes, so a decision never outlives the
//! context it was computed from.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use orgward_core::{
    OrganizationUserContext, Permission, PermissionCheck, Requirement, Role,
};
use serde::{Deserialize, Serialize};

/// Bundle of common checks for dashboard-style display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessSummary {
    pub can_view_organization: bool,
    pub can_manage_organization: bool,
    pub can_manage_members: bool,
    pub can_create_content: bool,
    pub can_manage_content: bool,
    pub can_view_analytics: bool,
    pub is_owner: bool,
    pub is_admin_or_owner: bool,
    pub role: Option<Role>,
}

/// Access queries against a possibly-absent context
#[derive(Debug, Default)]
pub struct AccessQuery {
    context: Option<OrganizationUserContext>,
    cache: RefCell<HashMap<Requirement, PermissionCheck>>,
    evaluations: Cell<usize>,
}

impl AccessQuery {
    pub fn new(context: Option<OrganizationUserContext>) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    pub fn context(&self) -> Option<&OrganizationUserContext> {
        self.context.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.context.is_some()
    }

    /// Replace the context, dropping cached decisions if it changed
    pub fn set_context(&mut self, context: Option<OrganizationUserContext>) {
        if self.context != context {
            tracing::trace!(
                cached = self.cache.get_mut().len(),
                "Access context changed, clearing cached decisions"
            );
            self.cache.get_mut().clear();
            self.context = context;
        }
    }

    /// Number of decisions actually computed (cache misses)
    pub fn evaluations(&self) -> usize {
        self.evaluations.get()
    }

    /// Decision for `requirement`, computed at most once per context
    pub fn check(&self, requirement: &Requirement) -> PermissionCheck {
        if let Some(check) = self.cache.borrow().get(requirement) {
            return check.clone();
        }

        let check = requirement.evaluate_for(self.context.as_ref());
        self.evaluations.set(self.evaluations.get() + 1);
        self.cache
            .borrow_mut()
            .insert(requirement.clone(), check.clone());
        check
    }

    fn allows(&self, requirement: Requirement) -> bool {
        self.check(&requirement).is_granted()
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.allows(Requirement::Permission(permission))
    }

    pub fn can_all(&self, permissions: &[Permission]) -> bool {
        self.allows(Requirement::AllPermissions(permissions.to_vec()))
    }

    pub fn can_any(&self, permissions: &[Permission]) -> bool {
        self.allows(Requirement::AnyPermission(permissions.to_vec()))
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.allows(Requirement::Role(role))
    }

    pub fn is_owner(&self) -> bool {
        self.allows(Requirement::Owner)
    }

    pub fn is_admin_or_owner(&self) -> bool {
        self.allows(Requirement::AdminOrOwner)
    }

    pub fn can_manage_user(&self, target: Role) -> bool {
        self.allows(Requirement::ManageRole(target))
    }

    pub fn summary(&self) -> AccessSummary {
        AccessSummary {
            can_view_organization: self.can(Permission::OrganizationView),
            can_manage_organization: self.can(Permission::OrganizationUpdate),
            can_manage_members: self.can(Permission::MemberInvite),
            can_create_content: self.can(Permission::PostCreate),
            can_manage_content: self.can(Permission::PostDelete),
            can_view_analytics: self.can(Permission::AnalyticsView),
            is_owner: self.is_owner(),
            is_admin_or_owner: self.is_admin_or_owner(),
            role: self.context.map(|context| context.role),
        }
    }
}
