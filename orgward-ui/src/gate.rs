//! Conditional rendering driven by access decisions

use orgward_core::{OrganizationUserContext, Permission, Requirement, Role};

/// Outcome of rendering through a [`Gate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<T> {
    /// The guarded content
    Granted(T),
    /// The gate's fallback branch
    Fallback(T),
    /// Muted explanation of a denial
    Notice(String),
    Nothing,
}

impl<T> Rendered<T> {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    /// The content to show, if any branch produced one
    pub fn into_content(self) -> Option<T> {
        match self {
            Self::Granted(content) | Self::Fallback(content) => Some(content),
            Self::Notice(_) | Self::Nothing => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Rendered<U> {
        match self {
            Self::Granted(content) => Rendered::Granted(f(content)),
            Self::Fallback(content) => Rendered::Fallback(f(content)),
            Self::Notice(message) => Rendered::Notice(message),
            Self::Nothing => Rendered::Nothing,
        }
    }
}

/// Renders content only when the context meets a requirement
#[derive(Debug, Clone)]
pub struct Gate<T> {
    requirement: Requirement,
    fallback: Option<T>,
    show_denied_message: bool,
}

impl<T> Gate<T> {
    pub fn new(requirement: impl Into<Requirement>) -> Self {
        Self {
            requirement: requirement.into(),
            fallback: None,
            show_denied_message: false,
        }
    }

    pub fn permission(permission: Permission) -> Self {
        Self::new(Requirement::Permission(permission))
    }

    /// Requires every listed permission
    pub fn all(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::new(Requirement::AllPermissions(permissions.into_iter().collect()))
    }

    /// Requires at least one listed permission
    pub fn any(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::new(Requirement::AnyPermission(permissions.into_iter().collect()))
    }

    pub fn role(role: Role) -> Self {
        Self::new(Requirement::Role(role))
    }

    pub fn owner() -> Self {
        Self::new(Requirement::Owner)
    }

    pub fn admin_or_owner() -> Self {
        Self::new(Requirement::AdminOrOwner)
    }

    /// Requires the right to manage users holding `target`
    pub fn manage(target: Role) -> Self {
        Self::new(Requirement::ManageRole(target))
    }

    pub fn fallback(mut self, fallback: T) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Show the denial reason when no fallback is set
    pub fn with_denied_message(mut self) -> Self {
        self.show_denied_message = true;
        self
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    pub fn render(self, context: Option<&OrganizationUserContext>, content: T) -> Rendered<T> {
        let check = self.requirement.evaluate_for(context);
        if check.has_permission {
            return Rendered::Granted(content);
        }

        match (self.fallback, self.show_denied_message) {
            (Some(fallback), _) => Rendered::Fallback(fallback),
            (None, true) => Rendered::Notice(
                check
                    .reason
                    .unwrap_or_else(|| "Access denied".to_string()),
            ),
            (None, false) => Rendered::Nothing,
        }
    }
}

/// Selects content by the acting user's role
#[derive(Debug, Clone)]
pub struct RoleSwitch<T> {
    owner: Option<T>,
    admin: Option<T>,
    member: Option<T>,
    viewer: Option<T>,
    fallback: Option<T>,
}

impl<T> Default for RoleSwitch<T> {
    fn default() -> Self {
        Self {
            owner: None,
            admin: None,
            member: None,
            viewer: None,
            fallback: None,
        }
    }
}

impl<T> RoleSwitch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(mut self, content: T) -> Self {
        self.owner = Some(content);
        self
    }

    pub fn admin(mut self, content: T) -> Self {
        self.admin = Some(content);
        self
    }

    pub fn member(mut self, content: T) -> Self {
        self.member = Some(content);
        self
    }

    pub fn viewer(mut self, content: T) -> Self {
        self.viewer = Some(content);
        self
    }

    pub fn fallback(mut self, content: T) -> Self {
        self.fallback = Some(content);
        self
    }

    /// Branch for the context's role; never borrows another role's branch
    pub fn render(self, context: Option<&OrganizationUserContext>) -> Option<T> {
        let role = match context {
            Some(context) if context.is_active() => context.role,
            _ => return self.fallback,
        };

        let branch = match role {
            Role::Owner => self.owner,
            Role::Admin => self.admin,
            Role::Member => self.member,
            Role::Viewer => self.viewer,
        };
        branch.or(self.fallback)
    }
}
