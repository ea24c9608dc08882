use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::{keys, EnvLookup};
use crate::error::UveError;

/// Directory name used under the user's home when `UVE_HOME` is not set.
pub const DEFAULT_HOME_DIR: &str = ".uve";

/// Get the user's home directory
pub fn user_home() -> Result<PathBuf, UveError> {
    directories::BaseDirs::new()
        .map(|bd| bd.home_dir().to_path_buf())
        .ok_or_else(|| {
            UveError::Configuration("Could not determine the user home directory".to_string())
        })
}

/// Resolve the environment home directory.
///
/// Returns `$UVE_HOME` when set and non-empty, otherwise `~/.uve`. The result
/// is always absolute so it can be compared with `VIRTUAL_ENV`.
pub fn resolve_home(lookup: &dyn EnvLookup) -> Result<PathBuf, UveError> {
    resolve_home_with(lookup, user_home)
}

pub(crate) fn resolve_home_with(
    lookup: &dyn EnvLookup,
    user_home: impl FnOnce() -> Result<PathBuf, UveError>,
) -> Result<PathBuf, UveError> {
    let home = match lookup.var(keys::UVE_HOME).filter(|v| !v.is_empty()) {
        Some(value) => PathBuf::from(value),
        None => user_home()?.join(DEFAULT_HOME_DIR),
    };
    absolutize(&home)
}

/// Create the environment home (and parents) if it is missing.
pub fn ensure_home(home: &Path) -> Result<(), UveError> {
    if home.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(home)
        .map_err(|source| UveError::io(home, source))?;
    tracing::debug!(home = %home.display(), "created environment home");
    Ok(())
}

/// Path of a named environment under `home`. No existence check.
pub fn env_path(home: &Path, name: &str) -> PathBuf {
    home.join(name)
}

/// Reject names that are not exactly one plain path segment.
pub fn validate_name(name: &str) -> Result<(), UveError> {
    let invalid = |reason: &str| UveError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name must not contain path separators"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("name must be a single directory name")),
    }
}

fn absolutize(path: &Path) -> Result<PathBuf, UveError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|source| UveError::io(path, source))?;
    Ok(cwd.join(path))
}
