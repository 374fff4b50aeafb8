/// Branch used when the CI environment names none, and the fallback entry
/// for branches missing from [`BACKEND_TARGETS`].
pub const DEFAULT_BRANCH: &str = "dev";

/// A backend deployment that a frontend build can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTarget {
    /// Branch slug as reported by CI
    pub branch: &'static str,
    /// Rewrite destination, including the `:path*` placeholder
    pub url: &'static str,
}

const MAIN: BackendTarget = BackendTarget {
    branch: "main",
    url: "https://backend-bjsh98db.app.spring25a.secoder.net/:path*",
};

const DEV: BackendTarget = BackendTarget {
    branch: DEFAULT_BRANCH,
    url: "https://dev-backend-bjsh98db.app.spring25a.secoder.net/:path*",
};

/// Known branch → backend URL table.
pub const BACKEND_TARGETS: &[BackendTarget] = &[MAIN, DEV];

impl BackendTarget {
    /// Exact-match lookup. Returns `None` for branches without a dedicated backend.
    pub fn find(branch: &str) -> Option<&'static BackendTarget> {
        BACKEND_TARGETS.iter().find(|t| t.branch == branch)
    }

    /// The target every unknown branch falls back to.
    pub fn fallback() -> &'static BackendTarget {
        &DEV
    }
}

/// Resolve the backend URL for `branch`, falling back to the `dev` backend.
pub fn resolve_backend_url(branch: &str) -> &'static str {
    match BackendTarget::find(branch) {
        Some(target) => target.url,
        None => {
            tracing::debug!(branch, fallback = DEFAULT_BRANCH, "no backend for branch");
            BackendTarget::fallback().url
        }
    }
}
