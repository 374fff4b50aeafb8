//! Dockerfile patching for dockpatch.
//!
//! # Patch flow
//!
//! ```text
//! dockpatch patch
//!   1. Branch     ── --branch, else $CI_COMMIT_REF_SLUG, else "dev"
//!   2. Resolve    ── dockpatch_core::resolve_backend_url()
//!   3. Read       ── std::fs::read(Dockerfile)
//!   4. Rewrite    ── patch_lines(): every `ENV BACKEND_URL` line
//!   5. Write back ── truncate + write (skipped with --dry-run)
//! ```
//!
//! Lines are handled as raw bytes, so content outside the rewritten lines
//! (CRLF terminators, non-UTF-8 bytes, a missing final newline) survives
//! unchanged.

pub mod dockerfile;

pub use dockerfile::{
    BACKEND_URL_PREFIX, PatchError, PatchReport, Patched, patch_file, patch_for_branch,
    patch_lines, preview_file,
};
