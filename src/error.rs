use std::path::PathBuf;
use thiserror::Error;

use crate::provisioner::ProvisionError;

/// Stable process exit codes, one per fatal error kind.
pub mod exit_code {
    pub const OK: u8 = 0;
    /// Anything not covered below (config file parse errors, bad flags, ...).
    pub const GENERAL: u8 = 1;
    pub const CONFIGURATION: u8 = 2;
    pub const ALREADY_EXISTS: u8 = 3;
    pub const NOT_FOUND: u8 = 4;
    pub const ACTIVE_ENVIRONMENT: u8 = 5;
    pub const UNSAFE_PATH: u8 = 6;
    pub const INVALID_NAME: u8 = 7;
    pub const PROVISIONING: u8 = 8;
}

/// Fatal errors raised by registry operations.
#[derive(Debug, Error)]
pub enum UveError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Environment '{name}' already exists at {}", path.display())]
    AlreadyExists { name: String, path: PathBuf },

    #[error("Environment '{name}' does not exist (looked in {})", path.display())]
    NotFound { name: String, path: PathBuf },

    #[error(
        "Cannot delete active environment '{name}' ({}). Deactivate it first.",
        path.display()
    )]
    ActiveEnvironment { name: String, path: PathBuf },

    #[error(
        "Security error: environment path {} is outside UVE_HOME {}: {reason}",
        path.display(),
        home.display()
    )]
    UnsafePath {
        path: PathBuf,
        home: PathBuf,
        reason: String,
    },

    #[error("Invalid environment name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Failed to create environment '{name}'")]
    Provisioning {
        name: String,
        #[source]
        source: ProvisionError,
    },

    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UveError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            UveError::Configuration(_) => exit_code::CONFIGURATION,
            UveError::AlreadyExists { .. } => exit_code::ALREADY_EXISTS,
            UveError::NotFound { .. } => exit_code::NOT_FOUND,
            UveError::ActiveEnvironment { .. } => exit_code::ACTIVE_ENVIRONMENT,
            UveError::UnsafePath { .. } => exit_code::UNSAFE_PATH,
            UveError::InvalidName { .. } => exit_code::INVALID_NAME,
            UveError::Provisioning { .. } => exit_code::PROVISIONING,
            UveError::Io { .. } => exit_code::GENERAL,
        }
    }
}

/// Map any command error to the process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<UveError>()
        .map(UveError::exit_code)
        .unwrap_or(exit_code::GENERAL)
}

/// Non-fatal outcome of a best-effort step. The operation that produced it
/// still succeeded.
#[derive(Debug, Error)]
pub enum Warning {
    #[error("Bootstrap of {packages:?} into {} failed: {source}", env.display())]
    Bootstrap {
        env: PathBuf,
        packages: Vec<String>,
        #[source]
        source: ProvisionError,
    },

    #[error("No package directory found in {}; nothing copied", env.display())]
    NoPackageDirectory { env: PathBuf },

    #[error(
        "Multiple package directories found in {}: {}; nothing copied",
        env.display(),
        candidates
            .iter()
            .map(|c| c.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )]
    AmbiguousPackageDirectory {
        env: PathBuf,
        candidates: Vec<PathBuf>,
    },

    #[error("Failed to copy {}: {message}", path.display())]
    CopyFailed { path: PathBuf, message: String },
}
