use crate::provisioner::Provisioner;
use crate::registry::Registry;
use crate::ui;
use anyhow::Result;

pub fn execute(
    registry: &Registry,
    provisioner: &dyn Provisioner,
    source: &str,
    dest: &str,
) -> Result<()> {
    let cloned = registry.clone_env(provisioner, source, dest)?;
    ui::success(
        "Cloned",
        format!(
            "'{source}' into '{dest}' ({} package file(s) copied)",
            cloned.copied_files
        ),
    );

    if !cloned.warnings.is_empty() {
        for warning in &cloned.warnings {
            ui::warn(warning);
        }
        ui::info(format!(
            "'{dest}' was created but may be missing packages from '{source}'."
        ));
    }
    Ok(())
}
