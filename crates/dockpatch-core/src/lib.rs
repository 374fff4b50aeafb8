//! Core types and configuration for dockpatch.
//!
//! This crate defines the branch→backend table ([`BACKEND_TARGETS`]),
//! branch discovery from the CI environment ([`branch_from_env`]), the
//! optional `dockpatch.toml` schema ([`DockpatchConfig`]), and shared error
//! types.

pub mod config;
pub mod env;
pub mod error;
pub mod target;

pub use config::{CONFIG_FILE, DockpatchConfig, PatchConfig};
pub use env::{BRANCH_VAR, Env, ProcessEnv, branch_from_env};
pub use error::{Error, Result};
pub use target::{BACKEND_TARGETS, BackendTarget, DEFAULT_BRANCH, resolve_backend_url};
