//! orgward-ui - access decisions for interface code
//!
//! Two adapters sit on top of `orgward-core` here. [`AccessQuery`] answers
//! boolean questions about a context that may still be loading and caches
//! each answer until the context changes. [`Gate`] and [`RoleSwitch`] pick
//! what to render. The [`widgets`] module draws both with ratatui.
//!
//! ```
//! use orgward_core::{OrganizationId, OrganizationUserContext, Permission, Role, UserId};
//! use orgward_ui::{AccessQuery, Gate, Rendered};
//!
//! let ctx = OrganizationUserContext::new(UserId::generate(), OrganizationId::generate(), Role::Viewer);
//! let query = AccessQuery::new(Some(ctx));
//! assert!(!query.can(Permission::PostCreate));
//!
//! let button = Gate::permission(Permission::PostCreate).render(Some(&ctx), "New post");
//! assert_eq!(button, Rendered::Nothing);
//! ```

pub mod access;
pub mod gate;
mod theme;
pub mod widgets;

pub use access::{AccessQuery, AccessSummary};
pub use gate::{Gate, Rendered, RoleSwitch};
pub use theme::{Theme, orgward_default};
