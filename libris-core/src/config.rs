//! Configuration discovery and loading
//!
//! ## Sources (first hit wins)
//!
//! 1. Explicit path from the CLI (`--config`)
//! 2. `LIBRIS_CONFIG` environment variable
//! 3. `<platform config dir>/libris/config.yml`
//! 4. Built-in defaults
//!
//! An explicitly named file must exist. The platform file is optional.
//! A leading `~` in a `preload` entry is expanded to the home directory.
//!
//! ```yaml
//! delimiter: ","
//! author_separator: "-"
//! skip_header: true
//! preload:
//!   - ~/books/library.csv
//! ```

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

use crate::loader::LoaderSettings;

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "LIBRIS_CONFIG";

/// File name looked up inside the platform config directory
const CONFIG_FILE_NAME: &str = "config.yml";

/// User configuration for a libris run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrisConfig {
    /// Field and author separators used when reading data files
    #[serde(flatten)]
    pub loader: LoaderSettings,
    /// Data files added before the requested command runs
    pub preload: Vec<PathBuf>,
}

impl LibrisConfig {
    /// Resolve and load configuration using the documented precedence
    pub fn discover(cli_override: Option<&Path>) -> Result<Self> {
        let env_override = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::discover_with(cli_override, env_override.as_deref(), platform_config_file())
    }

    fn discover_with(
        cli_override: Option<&Path>,
        env_override: Option<&Path>,
        platform_file: Option<PathBuf>,
    ) -> Result<Self> {
        trace!("Discovering libris configuration");

        if let Some(path) = cli_override {
            debug!("Using --config override: {}", path.display());
            return Self::from_file(path);
        }

        if let Some(path) = env_override.filter(|p| !p.as_os_str().is_empty()) {
            debug!("Using {CONFIG_ENV_VAR} override: {}", path.display());
            return Self::from_file(path);
        }

        match platform_file {
            Some(path) if path.is_file() => {
                info!("Found configuration at {}", path.display());
                Self::from_file(&path)
            }
            Some(path) => {
                debug!("No configuration found at {}", path.display());
                Ok(Self::default())
            }
            None => {
                debug!("No platform config directory available - using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load a config file. `.json` files are read as JSON, anything else as YAML.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("Config file does not exist: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let mut config: Self = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config {}", path.display()))?
        } else {
            Self::from_yaml(&content)
                .with_context(|| format!("Failed to parse YAML config {}", path.display()))?
        };

        config.validate()?;

        let home = home_dir();
        config.preload = config
            .preload
            .into_iter()
            .map(|entry| expand_home_with(entry, home.as_deref()))
            .collect();
        Ok(config)
    }

    fn from_yaml(content: &str) -> Result<Self> {
        // an empty YAML document deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Reject settings that would make data lines ambiguous
    pub fn validate(&self) -> Result<()> {
        if self.loader.delimiter == self.loader.author_separator {
            return Err(anyhow!(
                "delimiter and author_separator must differ (both are {:?})",
                self.loader.delimiter
            ));
        }
        Ok(())
    }
}

/// `<platform config dir>/libris/config.yml`, if the platform has one
fn platform_config_file() -> Option<PathBuf> {
    use directories::ProjectDirs;

    // On Linux: ~/.config/libris/
    // On macOS: ~/Library/Application Support/libris/
    // On Windows: %APPDATA%\libris\config\
    ProjectDirs::from("", "", "libris").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Replace a leading `~` component with `home`. `~user` forms are left alone.
fn expand_home_with(path: PathBuf, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = LibrisConfig::default();
        assert_eq!(config.loader.delimiter, ',');
        assert_eq!(config.loader.author_separator, '-');
        assert!(config.loader.skip_header);
        assert!(config.preload.is_empty());
    }

    #[test]
    fn test_yaml_partial_override() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "config.yml",
            "delimiter: \";\"\npreload:\n  - books.csv\n",
        );

        let config = LibrisConfig::from_file(&path).unwrap();
        assert_eq!(config.loader.delimiter, ';');
        assert_eq!(config.loader.author_separator, '-');
        assert_eq!(config.preload, vec![PathBuf::from("books.csv")]);
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/reader");
        assert_eq!(
            expand_home_with(PathBuf::from("~/books/library.csv"), Some(home)),
            PathBuf::from("/home/reader/books/library.csv")
        );
        assert_eq!(expand_home_with(PathBuf::from("~"), Some(home)), PathBuf::from("/home/reader"));
        assert_eq!(
            expand_home_with(PathBuf::from("books.csv"), Some(home)),
            PathBuf::from("books.csv")
        );
        assert_eq!(
            expand_home_with(PathBuf::from("~reader/books.csv"), Some(home)),
            PathBuf::from("~reader/books.csv")
        );
        assert_eq!(
            expand_home_with(PathBuf::from("~/books.csv"), None),
            PathBuf::from("~/books.csv")
        );
    }

    #[test]
    fn test_preload_tilde_expanded_on_load() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "config.yml",
            "preload:\n  - ~/books/library.csv\n  - local.csv\n",
        );

        let config = LibrisConfig::from_file(&path).unwrap();
        let expected = match home_dir() {
            Some(home) => home.join("books/library.csv"),
            None => PathBuf::from("~/books/library.csv"),
        };
        assert_eq!(config.preload, vec![expected, PathBuf::from("local.csv")]);
    }

    #[test]
    fn test_json_config() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "config.json",
            r#"{"author_separator": "&", "skip_header": false}"#,
        );

        let config = LibrisConfig::from_file(&path).unwrap();
        assert_eq!(config.loader.author_separator, '&');
        assert!(!config.loader.skip_header);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.yml", "\n");
        assert_eq!(LibrisConfig::from_file(&path).unwrap(), LibrisConfig::default());
    }

    #[test]
    fn test_conflicting_separators_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.yml", "delimiter: \"-\"\n");
        let err = LibrisConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("must differ"), "{err:#}");
    }

    #[test]
    fn test_precedence() {
        let dir = TempDir::new().unwrap();
        let cli = write(&dir, "cli.yml", "delimiter: \"|\"\n");
        let env = write(&dir, "env.yml", "delimiter: \";\"\n");
        let platform = write(&dir, "platform.yml", "delimiter: \"\\t\"\n");

        let config =
            LibrisConfig::discover_with(Some(&cli), Some(&env), Some(platform.clone())).unwrap();
        assert_eq!(config.loader.delimiter, '|');

        let config = LibrisConfig::discover_with(None, Some(&env), Some(platform.clone())).unwrap();
        assert_eq!(config.loader.delimiter, ';');

        let config = LibrisConfig::discover_with(None, None, Some(platform)).unwrap();
        assert_eq!(config.loader.delimiter, '\t');
    }

    #[test]
    fn test_missing_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yml");

        // explicit paths must exist
        assert!(LibrisConfig::discover_with(Some(&missing), None, None).is_err());
        assert!(LibrisConfig::discover_with(None, Some(&missing), None).is_err());

        // the platform file is optional
        let config = LibrisConfig::discover_with(None, None, Some(missing)).unwrap();
        assert_eq!(config, LibrisConfig::default());
    }
}
