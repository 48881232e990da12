//! YAML config file loading and discovery.
//!
//! Configuration is discovered from `.docdiff.yaml` in the current
//! directory, then `~/.config/docdiff/config.yaml`. An explicitly passed
//! path always wins and must exist.

use super::types::AppConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name looked up in the working directory.
const LOCAL_CONFIG_NAME: &str = ".docdiff.yaml";

/// Config file name under the user config directory.
const USER_CONFIG_NAME: &str = "config.yaml";

/// Errors from config file handling.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Find a config file by the discovery rules, if any exists.
#[must_use]
pub fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("docdiff").join(USER_CONFIG_NAME))
        .filter(|path| path.is_file())
}

/// Load and parse a config file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.is_file() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the explicit path, a discovered file, or defaults — in that order.
///
/// Returns the config and the path it was loaded from (`None` when
/// defaults were used). An explicit path that fails to load is an error;
/// a discovered file that fails to parse is an error too, since silently
/// ignoring a broken config hides mistakes.
pub fn load_or_default(
    explicit: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    if let Some(path) = explicit {
        let config = load_config_file(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    match discover_config_file() {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!(path = %path.display(), "loaded discovered config file");
            Ok((config, Some(path)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}

/// Generate an example config file documenting the main settings.
#[must_use]
pub fn generate_example_config() -> String {
    let mut example = String::from(
        "# docdiff configuration\n\
         # Place as .docdiff.yaml in your project root or\n\
         # ~/.config/docdiff/config.yaml\n\n",
    );
    let default_yaml =
        serde_yaml::to_string(&AppConfig::default()).unwrap_or_else(|_| String::new());
    example.push_str(&default_yaml);
    example
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Algorithm;
    use std::io::Write;

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "compare:\n  algorithm: embedding\n  model_path: /m.txt\noutput:\n  max_diff_lines: 5"
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.compare.algorithm, Algorithm::Embedding);
        assert_eq!(config.output.max_diff_lines, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config_file(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "compare: [not, a, mapping]").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
    }

    #[test]
    fn test_load_or_default_without_files() {
        // Explicit None and no discoverable file in the test environment
        // current directory should still give usable defaults, unless a
        // developer happens to have a local config; tolerate both.
        if let Ok((config, _)) = load_or_default(None) {
            let _ = config.output.max_diff_lines;
        }
    }

    #[test]
    fn test_example_config_parses_back() {
        let example = generate_example_config();
        let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed.compare.algorithm, Algorithm::Lexical);
    }
}
