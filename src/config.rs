use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Environment variables read by uve.
pub mod keys {
    /// Overrides the environment home directory.
    pub const UVE_HOME: &str = "UVE_HOME";
    /// Absolute path of the currently active environment.
    pub const VIRTUAL_ENV: &str = "VIRTUAL_ENV";
    /// Backup of PATH taken at activation.
    pub const OLD_PATH: &str = "UVE_OLD_PATH";
    /// Tells uv which environment project commands should use.
    pub const PROJECT_ENV: &str = "UV_PROJECT_ENVIRONMENT";
    /// The user's login shell.
    pub const SHELL: &str = "SHELL";
    /// Overrides the provisioner executable.
    pub const PROVISIONER: &str = "UVE_PROVISIONER";
    /// Overrides the config file location.
    pub const CONFIG: &str = "UVE_CONFIG";
    pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
}

const DEFAULT_PROVISIONER: &str = "uv";

/// Read access to named environment variables.
pub trait EnvLookup {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Optional user configuration file (`config.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Python version used by `create` when none is given.
    pub default_python: Option<String>,
    /// Install `bootstrap_packages` into new environments.
    pub bootstrap: bool,
    pub bootstrap_packages: Vec<String>,
    /// Provisioner executable.
    pub provisioner: Option<String>,
    /// Emit `UV_PROJECT_ENVIRONMENT` in activation scripts.
    pub export_project_environment: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_python: None,
            bootstrap: true,
            bootstrap_packages: vec!["pip".to_string()],
            provisioner: None,
            export_project_environment: true,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Packages to bootstrap, or `None` when bootstrapping is disabled.
    pub fn bootstrap_packages(&self) -> Option<&[String]> {
        if self.bootstrap && !self.bootstrap_packages.is_empty() {
            Some(&self.bootstrap_packages)
        } else {
            None
        }
    }
}

/// Locate the config file.
///
/// Returns `$UVE_CONFIG`, else `$XDG_CONFIG_HOME/uve/config.toml`, else
/// `~/.config/uve/config.toml`. `None` when no candidate can be built.
pub fn config_path(lookup: &dyn EnvLookup) -> Option<PathBuf> {
    if let Some(path) = lookup.var(keys::CONFIG).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let base = match lookup.var(keys::XDG_CONFIG_HOME).filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => paths::user_home().ok()?.join(".config"),
    };
    Some(base.join("uve").join("config.toml"))
}

/// Everything uve reads from its surroundings, resolved once per process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Environment home. Not created here.
    pub home: PathBuf,
    /// Value of `VIRTUAL_ENV`, if set and non-empty.
    pub active_env: Option<String>,
    /// Value of `SHELL`, if set.
    pub shell: Option<String>,
    /// Provisioner executable.
    pub provisioner: String,
    pub config: Config,
}

impl Settings {
    pub fn resolve(lookup: &dyn EnvLookup) -> Result<Self> {
        let home = paths::resolve_home(lookup)?;
        let config = match config_path(lookup) {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };
        Ok(Self::from_parts(lookup, home, config))
    }

    pub(crate) fn from_parts(lookup: &dyn EnvLookup, home: PathBuf, config: Config) -> Self {
        let provisioner = lookup
            .var(keys::PROVISIONER)
            .filter(|v| !v.is_empty())
            .or_else(|| config.provisioner.clone())
            .unwrap_or_else(|| DEFAULT_PROVISIONER.to_string());

        tracing::debug!(home = %home.display(), %provisioner, "resolved settings");

        Self {
            home,
            active_env: lookup.var(keys::VIRTUAL_ENV).filter(|v| !v.is_empty()),
            shell: lookup.var(keys::SHELL).filter(|v| !v.is_empty()),
            provisioner,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn lookup(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    #[serial]
    fn test_process_env_lookup() {
        env::set_var("UVE_TEST_LOOKUP", "value");
        assert_eq!(ProcessEnv.var("UVE_TEST_LOOKUP").as_deref(), Some("value"));
        env::remove_var("UVE_TEST_LOOKUP");
        assert!(ProcessEnv.var("UVE_TEST_LOOKUP").is_none());
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.bootstrap_packages(),
            Some(&["pip".to_string()][..])
        );
    }

    #[test]
    fn test_config_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "default_python = \"3.12\"\nbootstrap_packages = [\"pip\", \"wheel\"]\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_python.as_deref(), Some("3.12"));
        assert!(config.bootstrap);
        assert!(config.export_project_environment);
        assert_eq!(config.bootstrap_packages().unwrap().len(), 2);
    }

    #[test]
    fn test_config_bootstrap_disabled() {
        let config = Config {
            bootstrap: false,
            ..Config::default()
        };
        assert!(config.bootstrap_packages().is_none());

        let empty = Config {
            bootstrap_packages: Vec::new(),
            ..Config::default()
        };
        assert!(empty.bootstrap_packages().is_none());
    }

    #[test]
    fn test_config_invalid_file_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "bootstrap = \"maybe\"").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_path_precedence() {
        let env = lookup(&[
            ("UVE_CONFIG", "/etc/uve.toml"),
            ("XDG_CONFIG_HOME", "/xdg"),
        ]);
        assert_eq!(config_path(&env), Some(PathBuf::from("/etc/uve.toml")));

        let env = lookup(&[("XDG_CONFIG_HOME", "/xdg")]);
        assert_eq!(
            config_path(&env),
            Some(PathBuf::from("/xdg/uve/config.toml"))
        );
    }

    #[test]
    fn test_settings_from_parts() {
        let env = lookup(&[
            ("VIRTUAL_ENV", "/tmp/uve/web"),
            ("SHELL", "/usr/bin/fish"),
            ("UVE_PROVISIONER", "/opt/uv"),
        ]);
        let config = Config {
            provisioner: Some("from-config".to_string()),
            ..Config::default()
        };
        let settings = Settings::from_parts(&env, PathBuf::from("/tmp/uve"), config);

        assert_eq!(settings.active_env.as_deref(), Some("/tmp/uve/web"));
        assert_eq!(settings.shell.as_deref(), Some("/usr/bin/fish"));
        assert_eq!(settings.provisioner, "/opt/uv");
    }

    #[test]
    fn test_settings_provisioner_fallbacks() {
        let env = lookup(&[("VIRTUAL_ENV", "")]);
        let config = Config {
            provisioner: Some("from-config".to_string()),
            ..Config::default()
        };
        let settings = Settings::from_parts(&env, PathBuf::from("/tmp/uve"), config);
        assert_eq!(settings.provisioner, "from-config");
        assert!(settings.active_env.is_none());

        let settings = Settings::from_parts(&env, PathBuf::from("/tmp/uve"), Config::default());
        assert_eq!(settings.provisioner, "uv");
    }

    #[test]
    fn test_settings_resolve_reads_config_file() {
        let temp = TempDir::new().unwrap();
        let config_file = temp.path().join("uve.toml");
        fs::write(&config_file, "export_project_environment = false\n").unwrap();

        let env = lookup(&[
            ("UVE_HOME", temp.path().join("envs").to_str().unwrap()),
            ("UVE_CONFIG", config_file.to_str().unwrap()),
        ]);
        let settings = Settings::resolve(&env).unwrap();
        assert_eq!(settings.home, temp.path().join("envs"));
        assert!(!settings.config.export_project_environment);
        // resolve never creates the home
        assert!(!settings.home.exists());
    }
}
