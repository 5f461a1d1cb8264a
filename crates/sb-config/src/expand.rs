//! Environment variable expansion for deployment-specific settings.
//!
//! Only the braced forms are recognised:
//! - `${VAR}` - value of VAR, error when unset
//! - `${VAR:-default}` - value of VAR, or `default` when unset

use crate::ConfigError;

/// Expand `${...}` references in `value`.
///
/// `field` names the configuration key and is only used in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| -> Result<Option<String>, UnsetVar> {
        std::env::var(name).map(Some).map_err(|_| UnsetVar(name.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_is_unchanged() {
        let result = expand_env("https://snake-bytes.dev", "site.url").unwrap();
        assert_eq!(result, "https://snake-bytes.dev");
    }

    #[test]
    fn test_expands_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SB_TEST_DEPLOY_HOST", "books.example.com");
        }
        let result = expand_env("https://${SB_TEST_DEPLOY_HOST}", "site.url").unwrap();
        assert_eq!(result, "https://books.example.com");
        unsafe {
            std::env::remove_var("SB_TEST_DEPLOY_HOST");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SB_TEST_UNSET_BASE");
        }
        let result = expand_env("${SB_TEST_UNSET_BASE:-/}", "site.base_url").unwrap();
        assert_eq!(result, "/");
    }

    #[test]
    fn test_missing_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SB_TEST_MISSING");
        }
        let err = expand_env("${SB_TEST_MISSING}", "site.url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("SB_TEST_MISSING"));
        assert!(msg.contains("site.url"));
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        let result = expand_env("/cost$/", "site.base_url").unwrap();
        assert_eq!(result, "/cost$/");
    }
}
