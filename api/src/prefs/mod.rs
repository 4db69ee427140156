//! User preferences, read from the environment with in-code defaults.

pub mod pricing_api_config;
pub mod purchase_prefs;
pub mod user_prefs;

use std::str::FromStr;

use thiserror::Error;

/// An environment variable held a value that could not be used.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrefsError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Reads `var` through `lookup` and parses it.
///
/// Returns `Ok(None)` when the variable is unset or blank.
pub(crate) fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, PrefsError> {
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PrefsError::Invalid { var, value }),
        _ => Ok(None),
    }
}

/// Like [`parse_var`], but logs an invalid value and falls back to `default`.
pub(crate) fn var_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> T {
    match parse_var(lookup, var) {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            dioxus_logger::tracing::warn!("{e}, using default");
            default
        }
    }
}
