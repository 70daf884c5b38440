/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::ConfigError;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable, treating an empty value as unset
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// The raw value when the variable is present and not empty
pub fn get_env(env_var: &str) -> Option<String> {
    env::var(env_var).ok().filter(|val| !val.is_empty())
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Display,
{
    match get_env(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            warn!("Failed to parse {}: {} ({}), using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Gets an environment variable through a custom parser, failing on invalid values
///
/// Unlike [`get_env_or_default`], a value that is present but cannot be parsed is
/// reported as a [`ConfigError`] so the composition root can refuse to start.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `target` - Human name of the target type, used in the error message
/// * `default` - Value used when the variable is unset or empty
/// * `parse` - Parser for the raw value
pub fn try_get_env_or_default<T, E, F>(
    env_var: &str,
    target: &'static str,
    default: T,
    parse: F,
) -> Result<T, ConfigError>
where
    F: FnOnce(&str) -> Result<T, E>,
    E: Display,
{
    match get_env(env_var) {
        Some(val) => parse(&val).map_err(|e| ConfigError::InvalidValue {
            key: env_var.to_string(),
            reason: e.to_string(),
            value: val,
            target,
        }),
        None => Ok(default),
    }
}
