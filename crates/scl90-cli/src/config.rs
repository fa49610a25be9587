use std::path::{Path, PathBuf};

use scl90_access::token::DEFAULT_SECRET;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when changing the shape, and migrate
/// the previous shape in [`load_config`] before deserializing.
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "scl90";
const STORE_FILE: &str = "store.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scl90Config {
    /// Schema version. A hand-written config without one is read as current.
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// Directory holding the local store. Defaults to the platform data
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Salt for token derivation. Tokens derived under one secret do not
    /// verify under another.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default = "jiff::Timestamp::now")]
    pub created_at: jiff::Timestamp,
}

impl Default for Scl90Config {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: None,
            secret: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl Scl90Config {
    pub fn secret(&self) -> &str {
        self.secret.as_deref().unwrap_or(DEFAULT_SECRET)
    }

    pub fn data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let base = dirs::data_local_dir()
                    .ok_or_else(|| eyre::eyre!("no data directory found"))?;
                Ok(base.join(APP_DIR))
            }
        }
    }

    pub fn store_path(&self) -> eyre::Result<PathBuf> {
        Ok(self.data_dir()?.join(STORE_FILE))
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR).join("config.json"))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<Scl90Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Scl90Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so the version is checked before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    if !json.is_object() {
        return Err(eyre::eyre!("config at {} is not a JSON object", path.display()));
    }
    if let Some(raw) = json.get("config_version") {
        check_version(raw)?;
    }

    let config: Scl90Config = serde_json::from_value(json)?;
    Ok(config)
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

/// Reject versions this build cannot read. Version 1 is the first schema,
/// so there are no migration steps yet.
fn check_version(raw: &serde_json::Value) -> eyre::Result<()> {
    let version = raw
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| eyre::eyre!("config_version {raw} is not a valid version"))?;
    if version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update scl90."
        ));
    }
    if version == 0 {
        return Err(eyre::eyre!("config_version 0 is not a valid version"));
    }
    Ok(())
}

pub fn save_config(path: &Path, config: &Scl90Config) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
