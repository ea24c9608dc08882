use crate::registry::Registry;
use crate::ui;
use anyhow::Result;

pub fn execute(registry: &Registry) -> Result<()> {
    let environments = registry.list()?;
    if environments.is_empty() {
        ui::info("No environments found. Use 'uve create <name>' to create one.");
        return Ok(());
    }

    for environment in environments {
        if environment.active {
            ui::success("Active", &environment.name);
        } else {
            ui::status("Env", &environment.name);
        }
    }
    Ok(())
}
