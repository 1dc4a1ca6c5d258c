use super::types::{
    DEFAULT_HOST, DEFAULT_PORT, OrgwardConfig, RawGuardConfig, RawOrgwardConfig, RawServerConfig,
    ServerSection,
};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use orgward_core::GuardConfig;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user, then project, then `explicit`)
    ///
    /// An explicit path must exist; the user and project layers are skipped
    /// when missing.
    pub fn load(explicit: Option<&Path>) -> Result<OrgwardConfig> {
        let mut raw = RawOrgwardConfig::default();

        // Layer 1: User config
        if let Some(user_path) = Self::user_config_path()
            && user_path.exists()
        {
            raw = Self::merge_raw(raw, Self::read_raw(&user_path)?);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&project_path)?);
        }

        // Layer 3: Explicit config
        if let Some(path) = explicit {
            raw = Self::merge_raw(raw, Self::read_raw(path)?);
        }

        Self::finalize(raw)
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "orgward").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with ORGWARD_PROJECT_CONFIG_DIR env var
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("ORGWARD_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".orgward/config.toml")
        }
    }

    fn read_raw(path: &Path) -> Result<RawOrgwardConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    ///
    /// Memberships accumulate across layers; a later entry for the same user
    /// and organization replaces an earlier one when the resolver is built.
    fn merge_raw(base: RawOrgwardConfig, overlay: RawOrgwardConfig) -> RawOrgwardConfig {
        let mut memberships = base.memberships;
        memberships.extend(overlay.memberships);

        RawOrgwardConfig {
            server: RawServerConfig {
                host: overlay.server.host.or(base.server.host),
                port: overlay.server.port.or(base.server.port),
            },
            guard: RawGuardConfig {
                organization_header: overlay
                    .guard
                    .organization_header
                    .or(base.guard.organization_header),
                forbidden_message: overlay
                    .guard
                    .forbidden_message
                    .or(base.guard.forbidden_message),
                log_denials: overlay.guard.log_denials.or(base.guard.log_denials),
            },
            memberships,
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawOrgwardConfig) -> Result<OrgwardConfig> {
        let defaults = GuardConfig::default();
        let guard = GuardConfig {
            organization_header: raw
                .guard
                .organization_header
                .unwrap_or(defaults.organization_header),
            forbidden_message: raw
                .guard
                .forbidden_message
                .unwrap_or(defaults.forbidden_message),
            log_denials: raw.guard.log_denials.unwrap_or(defaults.log_denials),
        };
        guard.validate()?;

        Ok(OrgwardConfig {
            server: ServerSection {
                host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: raw.server.port.unwrap_or(DEFAULT_PORT),
            },
            guard,
            memberships: raw.memberships,
        })
    }
}
