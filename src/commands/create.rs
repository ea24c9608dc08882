use crate::config::Settings;
use crate::provisioner::Provisioner;
use crate::registry::Registry;
use crate::ui;
use anyhow::Result;

pub fn execute(
    settings: &Settings,
    registry: &Registry,
    provisioner: &dyn Provisioner,
    name: &str,
    python: Option<String>,
    no_bootstrap: bool,
) -> Result<()> {
    let python = python.or_else(|| settings.config.default_python.clone());
    let bootstrap = if no_bootstrap {
        None
    } else {
        settings.config.bootstrap_packages()
    };

    let progress = ui::Progress::new("Creating", format!("environment '{name}'"));
    let created = match registry.create(provisioner, name, python.as_deref(), bootstrap) {
        Ok(created) => created,
        Err(err) => {
            progress.fail("Failed");
            return Err(err.into());
        }
    };
    progress.success("Created", Some(format!("at {}", created.environment.path.display())));

    for warning in &created.warnings {
        ui::warn(warning);
    }
    Ok(())
}
