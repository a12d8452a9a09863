// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Environment variable interpolation for configuration files.
//!
//! Configuration text may reference variables with POSIX-style syntax:
//! - `${VAR_NAME}` - required variable
//! - `${VAR_NAME:-default}` - variable with a default used when unset or empty
//!
//! ```
//! use sutta_server::config::env_interpolation::interpolate_with;
//!
//! let lookup = |name: &str| (name == "SUTTA_PORT").then(|| "9000".to_string());
//! let out = interpolate_with("port: ${SUTTA_PORT}\ndata_dir: ${SUTTA_DATA:-data/table}", lookup)
//!     .unwrap();
//! assert_eq!(out, "port: 9000\ndata_dir: data/table");
//! ```

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::env;

/// Upper bound on the size of an interpolated document.
const MAX_INTERPOLATED_LENGTH: usize = 10_000_000;

lazy_static! {
    /// `${NAME}` or `${NAME:-default}`; group 1 is the name, group 3 the default.
    static ref ENV_VAR_PATTERN: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(:-([^}]*))?\}").expect("Invalid regex pattern");
}

/// Errors that can occur during environment variable interpolation.
#[derive(Debug, thiserror::Error)]
pub enum InterpolationError {
    #[error("Environment variable '{name}' is not set and has no default value")]
    MissingVariable { name: String },

    #[error("Interpolated result exceeds maximum allowed length of {MAX_INTERPOLATED_LENGTH} bytes")]
    ResultTooLarge,
}

/// Interpolate variables from the process environment.
///
/// Variables holding non-Unicode data are treated as unset.
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    interpolate_with(input, |name| env::var(name).ok())
}

/// Interpolate variables resolved through `lookup`.
///
/// An empty value counts as unset, so `${VAR:-default}` falls back to the default
/// for both. Substituted values are not scanned again.
pub fn interpolate_with<F>(input: &str, lookup: F) -> Result<String, InterpolationError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(input.len());
    let mut copied_up_to = 0;
    let mut used = Vec::new();

    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();

        let value = match lookup(name).filter(|v| !v.is_empty()) {
            Some(value) => value,
            None => match caps.get(3) {
                Some(default) => default.as_str().to_string(),
                None => {
                    return Err(InterpolationError::MissingVariable {
                        name: name.to_string(),
                    })
                }
            },
        };

        result.push_str(&input[copied_up_to..whole.start()]);
        result.push_str(&value);
        copied_up_to = whole.end();
        used.push(name);

        if result.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::ResultTooLarge);
        }
    }

    result.push_str(&input[copied_up_to..]);

    // Names only, values may be secrets.
    if !used.is_empty() {
        debug!("Interpolated environment variables: {}", used.join(", "));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_substitutes_set_variables() {
        let lookup = vars(&[("HOST", "localhost"), ("PORT", "8080")]);
        let result = interpolate_with("url: http://${HOST}:${PORT}/api", lookup).unwrap();
        assert_eq!(result, "url: http://localhost:8080/api");
    }

    #[test]
    fn test_default_used_when_unset_or_empty() {
        let lookup = vars(&[("EMPTY", "")]);
        let result = interpolate_with("a: ${UNSET:-one}\nb: ${EMPTY:-two}", lookup).unwrap();
        assert_eq!(result, "a: one\nb: two");
    }

    #[test]
    fn test_value_overrides_default() {
        let lookup = vars(&[("DATA_DIR", "/srv/tables")]);
        let result = interpolate_with("data_dir: ${DATA_DIR:-data/table}", lookup).unwrap();
        assert_eq!(result, "data_dir: /srv/tables");
    }

    #[test]
    fn test_empty_default_is_allowed() {
        let result = interpolate_with("value: ${NOTHING:-}", vars(&[])).unwrap();
        assert_eq!(result, "value: ");
    }

    #[test]
    fn test_missing_variable_without_default() {
        let result = interpolate_with("value: ${REQUIRED}", vars(&[]));
        assert!(matches!(
            result,
            Err(InterpolationError::MissingVariable { ref name }) if name == "REQUIRED"
        ));
    }

    #[test]
    fn test_invalid_names_are_left_alone() {
        let input = "value: ${NOT-A-NAME} and ${9LIVES}";
        let result = interpolate_with(input, vars(&[])).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let lookup = vars(&[("OUTER", "${INNER}")]);
        let result = interpolate_with("x: ${OUTER}", lookup).unwrap();
        assert_eq!(result, "x: ${INNER}");
    }

    #[test]
    fn test_unicode_values_pass_through() {
        let lookup = vars(&[("TITLE", "Dīgha Nikāya – 長部")]);
        let result = interpolate_with("title: \"${TITLE}\"", lookup).unwrap();
        assert_eq!(result, "title: \"Dīgha Nikāya – 長部\"");
    }

    #[test]
    fn test_result_size_is_bounded() {
        let long_value = "x".repeat(MAX_INTERPOLATED_LENGTH + 1);
        let lookup = vars(&[("HUGE", long_value.as_str())]);
        let result = interpolate_with("${HUGE}", lookup);
        assert!(matches!(result, Err(InterpolationError::ResultTooLarge)));
    }

    #[test]
    fn test_process_environment_is_used_by_default() {
        env::set_var("SUTTA_INTERPOLATION_TEST_LEVEL", "debug");
        let result = interpolate("log_level: ${SUTTA_INTERPOLATION_TEST_LEVEL}").unwrap();
        assert_eq!(result, "log_level: debug");
    }
}
