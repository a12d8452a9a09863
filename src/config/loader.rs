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

//! Configuration loading with environment variable interpolation.

use super::env_interpolation;
use super::types::ServerConfig;
use std::fs;
use std::path::Path;

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] env_interpolation::InterpolationError),

    #[error("Failed to parse config file '{path}': YAML error: {yaml_err}, JSON error: {json_err}")]
    ParseError {
        path: String,
        yaml_err: String,
        json_err: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(#[from] anyhow::Error),
}

/// Load and validate a [`ServerConfig`].
///
/// The file is interpolated first, then parsed as YAML with a JSON fallback.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a required variable is unset,
/// the content is neither valid YAML nor valid JSON, or validation fails.
///
/// ```no_run
/// use sutta_server::config::load_config_file;
///
/// let config = load_config_file("config/server.yaml").unwrap();
/// println!("Reference tables in {}", config.data_dir.display());
/// ```
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ServerConfig, ConfigError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;
    let interpolated = env_interpolation::interpolate(&content)?;

    let config = match serde_yaml::from_str::<ServerConfig>(&interpolated) {
        Ok(config) => config,
        Err(yaml_err) => match serde_json::from_str::<ServerConfig>(&interpolated) {
            Ok(config) => config,
            Err(json_err) => {
                return Err(ConfigError::ParseError {
                    path: path_ref.display().to_string(),
                    yaml_err: yaml_err.to_string(),
                    json_err: json_err.to_string(),
                });
            }
        },
    };

    config.validate()?;

    Ok(config)
}

/// Write a [`ServerConfig`] as YAML.
///
/// Interpolated values are written out; `${...}` references are not preserved.
pub fn save_config_file<P: AsRef<Path>>(config: &ServerConfig, path: P) -> Result<(), ConfigError> {
    let content = serde_yaml::to_string(config)?;
    Ok(fs::write(path, content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_load_yaml_with_env_vars() {
        env::set_var("SUTTA_LOADER_TEST_PORT", "9191");
        env::set_var("SUTTA_LOADER_TEST_DATA", "/srv/sc-data/table");

        let file = write_config(
            r#"
host: 127.0.0.1
port: ${SUTTA_LOADER_TEST_PORT}
data_dir: ${SUTTA_LOADER_TEST_DATA}
"#,
        );

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9191);
        assert_eq!(config.data_dir, PathBuf::from("/srv/sc-data/table"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_uses_defaults_for_unset_vars() {
        env::remove_var("SUTTA_LOADER_TEST_MISSING_HOST");

        let file = write_config("host: ${SUTTA_LOADER_TEST_MISSING_HOST:-localhost}\n");

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_load_missing_required_var() {
        env::remove_var("SUTTA_LOADER_TEST_REQUIRED");

        let file = write_config("host: ${SUTTA_LOADER_TEST_REQUIRED}\n");

        let result = load_config_file(file.path());
        assert!(matches!(result, Err(ConfigError::InterpolationError(_))));
    }

    #[test]
    fn test_load_json_config() {
        let file = write_config(r#"{"port": 8181, "log_level": "debug"}"#);

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.port, 8181);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_rejects_invalid_settings() {
        let file = write_config("port: 0\n");

        let result = load_config_file(file.path());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_reports_both_parse_errors() {
        let file = write_config("port: [not, a, port\n");

        match load_config_file(file.path()) {
            Err(ConfigError::ParseError { path, .. }) => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config_file("/definitely/not/here/server.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_save_and_load_config_file() {
        let file = NamedTempFile::new().unwrap();
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 9090,
            data_dir: PathBuf::from("tables"),
            ..Default::default()
        };

        save_config_file(&config, file.path()).unwrap();
        let loaded = load_config_file(file.path()).unwrap();

        assert_eq!(loaded, config);
    }
}
