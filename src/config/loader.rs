//! Config file loading
//!
//! Looks for `salescope/config.toml` under the platform config directory
//! unless an explicit path is given. A missing file yields defaults; an
//! unreadable or invalid file is an error the user should see.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::Config;

/// Errors raised while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default config file location (`~/.config/salescope/config.toml` on Linux)
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("salescope").join("config.toml"))
}

/// Load configuration, then apply environment overrides
///
/// `path` comes from `--config`; when absent the default location is tried
/// and a missing file is not an error.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(explicit) => read_file(explicit)?,
        None => match default_path() {
            Some(default) if default.exists() => read_file(&default)?,
            _ => Config::default(),
        },
    };

    if let Ok(key) = std::env::var("GEMINI_API_KEY")
        && !key.trim().is_empty()
    {
        config.gemini.api_key = Some(key);
    }

    Ok(config)
}

fn read_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_config("[lookup]\ndebounce_ms = 300\n");
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.lookup.debounce_ms, 300);
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let result = load(Some(Path::new("/nonexistent/salescope.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let file = write_config("[lookup\ndebounce_ms = oops");
        let result = load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
