use crate::registry::Registry;
use crate::ui;
use anyhow::Result;

pub fn execute(registry: &Registry, name: &str) -> Result<()> {
    let deleted = registry.delete(name)?;
    ui::success("Deleted", format!("environment '{}'", deleted.name));
    Ok(())
}
