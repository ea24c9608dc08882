use crate::cli::{Cli, Commands};
use crate::config::{keys, EnvLookup, ProcessEnv, Settings};
use crate::provisioner::UvProvisioner;
use crate::registry::Registry;
use crate::shell::Shell;
use anyhow::Result;

mod activate;
mod clone_cmd;
mod create;
mod deactivate;
mod delete;
mod list;

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        // Deactivation needs neither the home nor the config file
        Commands::Deactivate { shell } => deactivate::execute(&ProcessEnv, shell.as_deref()),
        command => execute_with_settings(command),
    }
}

fn execute_with_settings(command: Commands) -> Result<()> {
    // Settings are read once; everything below works from this snapshot
    let settings = Settings::resolve(&ProcessEnv)?;
    let registry = Registry::new(settings.home.clone(), settings.active_env.clone());
    let provisioner = UvProvisioner::new(settings.provisioner.clone());

    match command {
        Commands::Create {
            name,
            python,
            no_bootstrap,
        } => create::execute(&settings, &registry, &provisioner, &name, python, no_bootstrap),

        Commands::Activate {
            name,
            shell,
            no_project_env,
        } => activate::execute(&settings, &registry, &name, shell.as_deref(), no_project_env),

        Commands::Deactivate { .. } => unreachable!("handled before settings are resolved"),

        Commands::Delete { name } => delete::execute(&registry, &name),

        Commands::Clone { source, dest } => {
            clone_cmd::execute(&registry, &provisioner, &source, &dest)
        }

        Commands::List => list::execute(&registry),
    }
}

/// Pick the shell from an explicit `--shell` value or detect it from the
/// login shell.
fn resolve_shell(login_shell: Option<&str>, requested: Option<&str>) -> Result<Shell> {
    match requested.filter(|s| !s.is_empty()) {
        Some(name) => Shell::from_name(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported shell '{}' (expected bash, sh, zsh, fish or powershell)",
                name
            )
        }),
        None => Ok(Shell::detect(login_shell)),
    }
}

/// `$SHELL` read straight from the environment.
fn login_shell(lookup: &dyn EnvLookup) -> Option<String> {
    lookup.var(keys::SHELL).filter(|v| !v.is_empty())
}
