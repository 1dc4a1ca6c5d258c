//! orgward-core: role-based access control for multi-tenant organizations
//!
//! This crate holds the authorization core that every enforcement point
//! consults:
//!
//! - **Permission catalog** - [`Permission`], [`Role`] and the static
//!   role → permission table in [`catalog`]
//! - **Access checker** - [`AccessChecker`] evaluates decisions for one
//!   [`OrganizationUserContext`]
//! - **Requirements** - [`Requirement`] names what a call site needs and is
//!   evaluated identically by every adapter
//! - **Resource mapper** - [`can_access_resource`] for generic CRUD call sites
//! - **Membership seam** - [`MembershipResolver`] for the external store that
//!   produces contexts
//!
//! Checks never fail loudly: unknown input and inactive memberships produce
//! a denied [`PermissionCheck`], never an error or a panic.
//!
//! # Quick Start
//!
//! ```
//! use orgward_core::{
//!     MembershipStatus, OrganizationId, OrganizationUserContext, Permission, Role, UserId,
//! };
//!
//! let ctx = OrganizationUserContext::new(UserId::generate(), OrganizationId::generate(), Role::Member);
//! assert!(ctx.checker().can(Permission::PostCreate).is_granted());
//!
//! let suspended = ctx.with_status(MembershipStatus::Suspended);
//! assert!(!suspended.checker().can(Permission::PostView).is_granted());
//! ```

pub mod catalog;
mod check;
mod checker;
pub mod config;
mod context;
pub mod error;
mod requirement;
pub mod resolver;
pub mod resource;

pub use catalog::{Permission, Role};
pub use check::PermissionCheck;
pub use checker::{AccessChecker, INACTIVE_REASON, ManagementPolicy};
pub use config::GuardConfig;
pub use context::{MembershipStatus, OrganizationId, OrganizationUserContext, UserId};
pub use error::{ConfigError, ParseError, ResolveError};
pub use requirement::{NO_MEMBERSHIP_REASON, Requirement};
pub use resolver::{MembershipEntry, MembershipResolver, StaticMembershipResolver};
pub use resource::{Action, ResourceType, can_access, can_access_resource};
