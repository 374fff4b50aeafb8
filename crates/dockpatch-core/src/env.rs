//! Isolates environment variable access.

use std::env::VarError;

use crate::target::DEFAULT_BRANCH;

/// Environment variable CI sets to the slug of the branch being built.
pub const BRANCH_VAR: &str = "CI_COMMIT_REF_SLUG";

#[cfg_attr(test, mockall::automock)]
pub trait Env {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

/// Reads the real process environment.
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

/// Branch slug from `var`, or [`DEFAULT_BRANCH`] when it is unset.
///
/// A value that is not valid Unicode can never name a known branch, so it is
/// treated as unset.
pub fn branch_from_env(env: &dyn Env, var: &str) -> String {
    match env.var(var) {
        Ok(branch) => branch,
        Err(VarError::NotPresent) => {
            tracing::debug!(var, default = DEFAULT_BRANCH, "branch variable not set");
            DEFAULT_BRANCH.to_owned()
        }
        Err(VarError::NotUnicode(raw)) => {
            tracing::warn!(var, value = ?raw, "branch variable is not valid unicode; using default");
            DEFAULT_BRANCH.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use mockall::predicate::eq;

    use super::*;

    #[test]
    fn reads_configured_variable() {
        let mut env = MockEnv::new();
        env.expect_var()
            .with(eq(BRANCH_VAR))
            .times(1)
            .returning(|_| Ok("main".to_owned()));

        assert_eq!(branch_from_env(&env, BRANCH_VAR), "main");
    }

    #[test]
    fn missing_variable_defaults_to_dev() {
        let mut env = MockEnv::new();
        env.expect_var().returning(|_| Err(VarError::NotPresent));

        assert_eq!(branch_from_env(&env, BRANCH_VAR), "dev");
    }

    #[test]
    fn non_unicode_variable_defaults_to_dev() {
        let mut env = MockEnv::new();
        env.expect_var()
            .returning(|_| Err(VarError::NotUnicode(OsString::from("ma\u{fffd}in"))));

        assert_eq!(branch_from_env(&env, BRANCH_VAR), "dev");
    }

    #[test]
    fn empty_variable_is_passed_through() {
        let mut env = MockEnv::new();
        env.expect_var().returning(|_| Ok(String::new()));

        assert_eq!(branch_from_env(&env, BRANCH_VAR), "");
    }

    #[test]
    fn honours_custom_variable_name() {
        let mut env = MockEnv::new();
        env.expect_var()
            .with(eq("GITHUB_REF_NAME"))
            .times(1)
            .returning(|_| Ok("feature-x".to_owned()));

        assert_eq!(branch_from_env(&env, "GITHUB_REF_NAME"), "feature-x");
    }
}
