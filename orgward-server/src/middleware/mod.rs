//! axum middleware for authentication hand-off and route authorization

mod authorize;
mod principal;

pub use authorize::authorize_middleware;
pub use principal::{USER_ID_HEADER, trusted_user_header};
