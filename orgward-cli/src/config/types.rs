use orgward_core::{GuardConfig, MembershipEntry};
use serde::{Deserialize, Serialize};

/// Default port for the orgward server
pub const DEFAULT_PORT: u16 = orgward_server::DEFAULT_PORT;

/// Default host for the orgward server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawOrgwardConfig {
    #[serde(default)]
    pub server: RawServerConfig,

    #[serde(default)]
    pub guard: RawGuardConfig,

    #[serde(default)]
    pub memberships: Vec<MembershipEntry>,
}

/// Server config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Guard config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawGuardConfig {
    pub organization_header: Option<String>,
    pub forbidden_message: Option<String>,
    pub log_denials: Option<bool>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrgwardConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub guard: GuardConfig,

    #[serde(default)]
    pub memberships: Vec<MembershipEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSection {
    /// Host address to bind to
    pub host: String,

    /// Port for the orgward server
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
