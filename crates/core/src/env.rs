//! Required environment variable validation.
//!
//! Every service command validates its required variables through
//! [`require`] before constructing a network client, so a misconfigured
//! invocation fails with one message naming every missing variable instead
//! of a connection error halfway through.

use std::collections::HashMap;

use thiserror::Error;

/// Errors that can occur while reading configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Missing environment variables: {}", names.join(", "))]
    Missing { names: Vec<String> },
}

/// Result type for environment configuration.
pub type Result<T> = std::result::Result<T, EnvError>;

/// Returns the subset of `required` names for which `lookup` yields no
/// non-empty value, preserving the order of `required`.
///
/// Empty strings count as missing, matching shell conventions where
/// `VAR=` is indistinguishable from unset.
pub fn missing_vars<'a>(
    required: &[&'a str],
    lookup: impl Fn(&str) -> Option<String>,
) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|name| !lookup(name).is_some_and(|v| !v.is_empty()))
        .collect()
}

/// Reads every variable in `required` from the process environment.
///
/// Returns the full name-to-value map on success. On failure the error
/// names every missing variable, not only the first one encountered.
pub fn require(required: &[&str]) -> Result<HashMap<String, String>> {
    let missing = missing_vars(required, |name| std::env::var(name).ok());

    if !missing.is_empty() {
        return Err(EnvError::Missing {
            names: missing.iter().map(ToString::to_string).collect(),
        });
    }

    Ok(required
        .iter()
        .map(|name| (name.to_string(), std::env::var(name).unwrap_or_default()))
        .collect())
}

/// Reads an optional variable, falling back to `default` when unset or empty.
pub fn var_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_missing_vars_all_present() {
        let lookup = lookup_from(&[("RDS_HOST", "db.local"), ("RDS_USER", "admin")]);
        assert!(missing_vars(&["RDS_HOST", "RDS_USER"], lookup).is_empty());
    }

    #[test]
    fn test_missing_vars_reports_every_absent_name() {
        let lookup = lookup_from(&[("RDS_USER", "admin")]);
        let missing = missing_vars(
            &["RDS_HOST", "RDS_USER", "RDS_PASSWORD", "RDS_DATABASE"],
            lookup,
        );
        assert_eq!(missing, vec!["RDS_HOST", "RDS_PASSWORD", "RDS_DATABASE"]);
    }

    #[test]
    fn test_missing_vars_treats_empty_as_missing() {
        let lookup = lookup_from(&[("RDS_HOST", "")]);
        assert_eq!(missing_vars(&["RDS_HOST"], lookup), vec!["RDS_HOST"]);
    }

    #[test]
    fn test_env_error_names_every_variable() {
        let error = EnvError::Missing {
            names: vec!["connection_string".to_string(), "db_name".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Missing environment variables: connection_string, db_name"
        );
    }
}
