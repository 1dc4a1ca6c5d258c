//! Access decision result

use serde::{Deserialize, Serialize};

/// Outcome of one access evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionCheck {
    pub has_permission: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PermissionCheck {
    pub fn granted() -> Self {
        Self {
            has_permission: true,
            reason: None,
        }
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            has_permission: false,
            reason: Some(reason.into()),
        }
    }

    /// Grant when `allowed`, otherwise deny with the lazily built reason
    pub fn from_bool(allowed: bool, reason: impl FnOnce() -> String) -> Self {
        if allowed {
            Self::granted()
        } else {
            Self::denied(reason())
        }
    }

    pub fn is_granted(&self) -> bool {
        self.has_permission
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl From<PermissionCheck> for bool {
    fn from(check: PermissionCheck) -> Self {
        check.has_permission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granted_has_no_reason() {
        let check = PermissionCheck::granted();
        assert!(check.is_granted());
        assert!(check.reason().is_none());
    }

    #[test]
    fn test_from_bool_only_builds_reason_on_denial() {
        let check = PermissionCheck::from_bool(true, || panic!("reason built for grant"));
        assert!(check.is_granted());

        let check = PermissionCheck::from_bool(false, || "nope".to_string());
        assert_eq!(check.reason(), Some("nope"));
    }

    #[test]
    fn test_serialize_matches_wire_shape() {
        let json = serde_json::to_string(&PermissionCheck::granted()).unwrap();
        assert_eq!(json, r#"{"hasPermission":true}"#);

        let json = serde_json::to_string(&PermissionCheck::denied("inactive")).unwrap();
        assert_eq!(json, r#"{"hasPermission":false,"reason":"inactive"}"#);
    }
}
