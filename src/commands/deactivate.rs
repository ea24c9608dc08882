use crate::config::EnvLookup;
use crate::script::deactivation_script;
use anyhow::Result;

pub fn execute(lookup: &dyn EnvLookup, shell: Option<&str>) -> Result<()> {
    let login_shell = super::login_shell(lookup);
    let shell = super::resolve_shell(login_shell.as_deref(), shell)?;
    print!("{}", deactivation_script(shell));
    Ok(())
}
