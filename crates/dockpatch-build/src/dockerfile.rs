use std::path::{Path, PathBuf};

/// Lines starting with this prefix are rewritten. The match is a plain byte
/// prefix, so `ENV BACKEND_URL_V2=...` is rewritten too.
pub const BACKEND_URL_PREFIX: &[u8] = b"ENV BACKEND_URL";

/// Result of running the transform over a Dockerfile's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub content: Vec<u8>,
    /// Number of lines rewritten
    pub replaced: usize,
    /// Number of lines seen, including a final line without a terminator
    pub lines: usize,
}

/// Summary of a patch run against a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub url: String,
    pub replaced: usize,
    pub lines: usize,
}

/// Rewrites every `ENV BACKEND_URL` line to point at `url`.
///
/// Every matching line is replaced, not just the first, and each replacement
/// ends in `\n` regardless of the original terminator. `\n`, `\r\n`, and a
/// lone `\r` all end a line. Non-matching lines are copied byte for byte,
/// terminators included. Nothing is inserted when no line matches.
pub fn patch_lines(content: &[u8], url: &str) -> Patched {
    let replacement = format!("ENV BACKEND_URL {url}\n");
    let mut out = Vec::with_capacity(content.len() + replacement.len());
    let mut replaced = 0;
    let mut lines = 0;

    for line in split_lines(content) {
        lines += 1;
        if line.starts_with(BACKEND_URL_PREFIX) {
            out.extend_from_slice(replacement.as_bytes());
            replaced += 1;
        } else {
            out.extend_from_slice(line);
        }
    }

    Patched {
        content: out,
        replaced,
        lines,
    }
}

/// Splits after each line terminator, keeping it attached to its line.
fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if rest[i] == b'\r' && rest.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Reads `path` and returns the patched contents without touching the file.
pub fn preview_file(path: &Path, url: &str) -> Result<(PatchReport, Vec<u8>), PatchError> {
    let original = std::fs::read(path).map_err(|e| PatchError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let patched = patch_lines(&original, url);
    log_outcome(path, &patched);

    let report = PatchReport {
        path: path.to_path_buf(),
        url: url.to_owned(),
        replaced: patched.replaced,
        lines: patched.lines,
    };
    Ok((report, patched.content))
}

/// Read-modify-write of the Dockerfile at `path`.
///
/// The file is always rewritten (truncated), even when no line matched.
pub fn patch_file(path: &Path, url: &str) -> Result<PatchReport, PatchError> {
    let (report, content) = preview_file(path, url)?;

    std::fs::write(path, &content).map_err(|e| PatchError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        url,
        replaced = report.replaced,
        "patched Dockerfile"
    );
    Ok(report)
}

/// Points the Dockerfile at the backend for `branch` (unknown branches get `dev`).
pub fn patch_for_branch(path: &Path, branch: &str) -> Result<PatchReport, PatchError> {
    let url = dockpatch_core::resolve_backend_url(branch);
    tracing::debug!(branch, url, "resolved backend");
    patch_file(path, url)
}

fn log_outcome(path: &Path, patched: &Patched) {
    match patched.replaced {
        0 => tracing::warn!(
            path = %path.display(),
            "no `ENV BACKEND_URL` line found; nothing to rewrite"
        ),
        1 => {}
        n => tracing::warn!(
            path = %path.display(),
            replaced = n,
            "multiple `ENV BACKEND_URL` lines found; all were rewritten"
        ),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("failed to read Dockerfile at {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write Dockerfile at {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
