//! Configuration loading and resolution.
//!
//! Supports profile-based configuration from `~/.arcade/config.huml` with
//! priority order: CLI flags > environment variables > config file > defaults.

use anyhow::{Context, Result, bail};
use arcade_core::source::CatalogSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "ARCADE_CONFIG";

/// Environment variable overriding the catalog source.
pub const CATALOG_ENV: &str = "ARCADE_CATALOG";

/// Written by `arcade config init`. Kept as literal HUML: nested maps need
/// the multi-line `key::` form, which the serializer does not emit.
pub const DEFAULT_CONFIG: &str = r#"%HUML v0.2.0
default_profile: "default"
profiles::
  default::
    catalog: "bundled"
"#;

/// Configuration loaded from config.huml.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Name of the default profile to use.
    pub default_profile: String,
    /// Map of profile name to profile configuration.
    pub profiles: HashMap<String, Profile>,
}

/// A named profile pointing at a catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Catalog source: `bundled`, an http(s) URL, or a path to a JSON file.
    pub catalog: String,
}

/// Resolved configuration after applying priority rules.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Where the catalog is loaded from.
    pub catalog: CatalogSource,
}

impl Default for CliConfig {
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            "default".to_string(),
            Profile {
                catalog: "bundled".to_string(),
            },
        );
        Self {
            default_profile: "default".to_string(),
            profiles,
        }
    }
}

/// Returns the config directory path (~/.arcade).
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".arcade"))
        .context("Could not determine home directory")
}

/// Returns the default config file path (~/.arcade/config.huml).
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.huml"))
}

/// Returns the config file path, honouring `ARCADE_CONFIG`.
pub fn config_path() -> Result<PathBuf> {
    match std::env::var(CONFIG_ENV) {
        Ok(p) if !p.is_empty() => Ok(PathBuf::from(p)),
        _ => default_config_path(),
    }
}

/// Load configuration from the config file.
///
/// Returns `Ok(None)` if the config file doesn't exist.
/// Returns an error if the file exists but is invalid.
pub fn load_config() -> Result<Option<CliConfig>> {
    load_config_from(&config_path()?)
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<Option<CliConfig>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file");
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: CliConfig = huml_rs::serde::from_str(&content)
        .with_context(|| format!("Invalid HUML in {}", path.display()))?;

    validate_config(&config)?;

    Ok(Some(config))
}

/// Writes [`DEFAULT_CONFIG`] to `path`, refusing to overwrite unless `force`.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(dir) = path.parent()
        && !dir.exists()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(())
}

/// Validate that the config has at least one profile, the default profile
/// exists, and every profile names a parseable catalog source.
pub fn validate_config(config: &CliConfig) -> Result<()> {
    if config.profiles.is_empty() {
        bail!("Config file must contain at least one profile");
    }

    if !config.profiles.contains_key(&config.default_profile) {
        bail!(
            "Default profile '{}' not found in profiles",
            config.default_profile
        );
    }

    for (name, profile) in &config.profiles {
        if profile.catalog.trim().is_empty() {
            bail!("Profile '{}' has an empty catalog source", name);
        }
        profile
            .catalog
            .parse::<CatalogSource>()
            .with_context(|| format!("Profile '{}' has an invalid catalog source", name))?;
    }

    Ok(())
}

/// Resolve configuration by applying priority rules.
///
/// Priority order (highest to lowest):
/// 1. CLI flag (`--catalog`)
/// 2. Environment variable (`ARCADE_CATALOG`)
/// 3. Config file profile
/// 4. The bundled catalog
pub fn resolve_config(
    profile_flag: Option<&str>,
    catalog_flag: Option<&str>,
    file_config: Option<CliConfig>,
) -> Result<ResolvedConfig> {
    let mut catalog = CatalogSource::Bundled;

    // Apply config file (lowest priority)
    if let Some(config) = file_config {
        let profile_name = profile_flag.unwrap_or(&config.default_profile);
        if let Some(profile) = config.profiles.get(profile_name) {
            catalog = profile.catalog.parse()?;
        } else if profile_flag.is_some() {
            bail!(
                "Profile '{}' not found. Run 'arcade config profiles' to see available profiles.",
                profile_name
            );
        }
    } else if let Some(requested_profile) = profile_flag
        && requested_profile != "default"
    {
        bail!(
            "Profile '{}' not found. No config file exists. Run 'arcade config init' to create one.",
            requested_profile
        );
    }

    // Apply environment variable (medium priority)
    if let Ok(env_catalog) = std::env::var(CATALOG_ENV)
        && !env_catalog.trim().is_empty()
    {
        catalog = env_catalog
            .parse()
            .with_context(|| format!("Invalid {}", CATALOG_ENV))?;
    }

    // Apply CLI flag (highest priority)
    if let Some(c) = catalog_flag {
        catalog = c.parse()?;
    }

    tracing::debug!(catalog = %catalog, "Resolved catalog source");

    Ok(ResolvedConfig { catalog })
}
