mod patch;
mod resolve;
mod targets;

use dockpatch_core::{DockpatchConfig, ProcessEnv, branch_from_env};
use std::path::Path;

pub use patch::patch;
pub use resolve::resolve;
pub use targets::targets;

/// Load dockpatch.toml from the working directory.
pub(crate) fn load_config() -> anyhow::Result<DockpatchConfig> {
    Ok(DockpatchConfig::load(Path::new("."))?)
}

/// `--branch` wins, then the configured CI variable, then "dev".
pub(crate) fn current_branch(flag: Option<String>, config: &DockpatchConfig) -> String {
    flag.unwrap_or_else(|| branch_from_env(&ProcessEnv, &config.patch.branch_var))
}
