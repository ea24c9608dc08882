use std::fmt;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// External tool that materializes environment trees.
pub trait Provisioner {
    /// Create an environment at `target`, optionally pinned to a Python
    /// version or interpreter path.
    fn create(&self, target: &Path, python: Option<&str>) -> Result<(), ProvisionError>;

    /// Install `packages` into the environment at `env`.
    fn install(&self, env: &Path, packages: &[String]) -> Result<(), ProvisionError>;
}

/// A provisioner invocation that could not be started or exited non-zero.
#[derive(Debug, Error)]
pub struct ProvisionError {
    pub command: String,
    pub kind: ProvisionFailure,
}

#[derive(Debug)]
pub enum ProvisionFailure {
    Spawn(std::io::Error),
    Exit(ExitStatus),
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ProvisionFailure::Spawn(err) => write!(f, "could not run `{}`: {}", self.command, err),
            ProvisionFailure::Exit(status) => write!(f, "`{}` exited with {}", self.command, status),
        }
    }
}

/// Provisioner backed by the `uv` command line.
#[derive(Debug, Clone)]
pub struct UvProvisioner {
    program: String,
}

impl UvProvisioner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn venv_args(target: &Path, python: Option<&str>) -> Vec<String> {
        let mut args = vec!["venv".to_string()];
        if let Some(python) = python {
            args.push("--python".to_string());
            args.push(python.to_string());
        }
        args.push(target.display().to_string());
        args
    }

    fn pip_install_args(env: &Path, packages: &[String]) -> Vec<String> {
        let mut args = vec![
            "pip".to_string(),
            "install".to_string(),
            "--python".to_string(),
            crate::environment::interpreter_path(env).display().to_string(),
        ];
        args.extend(packages.iter().cloned());
        args
    }

    /// Run the program with inherited stdio and wait for it.
    fn run(&self, args: &[String]) -> Result<(), ProvisionError> {
        let command = format!("{} {}", self.program, args.join(" "));
        tracing::debug!(%command, "running provisioner");

        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|err| ProvisionError {
                command: command.clone(),
                kind: ProvisionFailure::Spawn(err),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ProvisionError {
                command,
                kind: ProvisionFailure::Exit(status),
            })
        }
    }
}

impl Provisioner for UvProvisioner {
    fn create(&self, target: &Path, python: Option<&str>) -> Result<(), ProvisionError> {
        self.run(&Self::venv_args(target, python))
    }

    fn install(&self, env: &Path, packages: &[String]) -> Result<(), ProvisionError> {
        self.run(&Self::pip_install_args(env, packages))
    }
}
