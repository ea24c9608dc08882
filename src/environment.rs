use std::path::{Path, PathBuf};

use crate::shell::Shell;

/// A named environment under the environment home
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub name: String,
    pub path: PathBuf,
    pub active: bool,
}

impl Environment {
    pub fn new(name: impl Into<String>, path: PathBuf, active_env: Option<&str>) -> Self {
        let active = active_env.is_some_and(|active| is_same_env(active, &path));
        Self {
            name: name.into(),
            path,
            active,
        }
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Interpreter inside the environment, used to pin clones and installs.
    pub fn interpreter(&self) -> PathBuf {
        interpreter_path(&self.path)
    }
}

/// Directory holding the environment's executables, as text for the shell.
pub fn bin_dir(env_path: &Path, shell: Shell) -> String {
    match shell {
        Shell::PowerShell => format!("{}\\Scripts", env_path.display()),
        _ => env_path.join("bin").display().to_string(),
    }
}

pub fn interpreter_path(env_path: &Path) -> PathBuf {
    if cfg!(windows) {
        env_path.join("Scripts").join("python.exe")
    } else {
        env_path.join("bin").join("python")
    }
}

/// Whether `active` (the `VIRTUAL_ENV` value) names the environment at `path`.
///
/// Compares the literal paths first, then the canonical forms so symlinked or
/// `..`-laden spellings of the same directory still match.
pub fn is_same_env(active: &str, path: &Path) -> bool {
    let active = Path::new(active);
    if active == path {
        return true;
    }
    match (active.canonicalize(), path.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
