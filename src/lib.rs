// Public API
pub mod cli;
pub mod commands;
pub mod ui;

// Core domain types
mod config;
mod environment;
mod error;
mod paths;
mod provisioner;
mod registry;
mod script;
mod shell;

// Re-export main types
pub use config::{keys, Config, EnvLookup, ProcessEnv, Settings};
pub use environment::{interpreter_path, Environment};
pub use error::{exit_code, exit_code_for, UveError, Warning};
pub use paths::{ensure_home, env_path, resolve_home, validate_name};
pub use provisioner::{ProvisionError, ProvisionFailure, Provisioner, UvProvisioner};
pub use registry::{package_dirs, Cloned, Created, Registry};
pub use script::{activation_script, deactivation_script, ActivateOptions};
pub use shell::Shell;
