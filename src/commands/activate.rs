use crate::config::Settings;
use crate::registry::Registry;
use crate::script::{activation_script, ActivateOptions};
use anyhow::Result;

pub fn execute(
    settings: &Settings,
    registry: &Registry,
    name: &str,
    shell: Option<&str>,
    no_project_env: bool,
) -> Result<()> {
    let environment = registry.get(name)?;
    let shell = super::resolve_shell(settings.shell.as_deref(), shell)?;
    let options = ActivateOptions {
        project_env: settings.config.export_project_environment && !no_project_env,
    };

    tracing::debug!(env_name = name, shell = shell.as_str(), "printing activation script");
    print!("{}", activation_script(&environment.path, shell, options));
    Ok(())
}
