use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::env::BRANCH_VAR;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "dockpatch.toml";

/// dockpatch.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DockpatchConfig {
    #[serde(default)]
    pub patch: PatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchConfig {
    /// Dockerfile to rewrite, relative to the working directory
    #[serde(default = "default_dockerfile")]
    pub dockerfile: PathBuf,
    /// Environment variable holding the branch slug
    #[serde(default = "default_branch_var")]
    pub branch_var: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            dockerfile: default_dockerfile(),
            branch_var: default_branch_var(),
        }
    }
}

impl DockpatchConfig {
    /// Load from dockpatch.toml in the given directory, or return defaults if not found.
    pub fn load(dir: &Path) -> crate::Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            let config = toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path.clone(),
                source: e,
            })?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}

fn default_dockerfile() -> PathBuf {
    PathBuf::from("Dockerfile")
}

fn default_branch_var() -> String {
    BRANCH_VAR.to_owned()
}
