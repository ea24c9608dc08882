//! Activation and deactivation script text.
//!
//! uve runs as a child of the user's shell and cannot change that shell's
//! environment. It prints a script instead and the shell evaluates it
//! (`eval "$(uve activate web)"`, `uve activate web | source`,
//! `uve activate web | Out-String | Invoke-Expression`).

use std::path::Path;

use crate::config::keys::{OLD_PATH, PROJECT_ENV, VIRTUAL_ENV};
use crate::environment::bin_dir;
use crate::shell::Shell;

/// Options for [`activation_script`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivateOptions {
    /// Also export `UV_PROJECT_ENVIRONMENT`.
    pub project_env: bool,
}

impl Default for ActivateOptions {
    fn default() -> Self {
        Self { project_env: true }
    }
}

/// Script that saves PATH, marks `env_path` active and puts its executables first.
pub fn activation_script(env_path: &Path, shell: Shell, options: ActivateOptions) -> String {
    let env = env_path.display().to_string();
    let bin = bin_dir(env_path, shell);
    match shell {
        Shell::Bash => posix_activate(&env, &bin, options, Some("hash -r 2>/dev/null")),
        Shell::Sh => posix_activate(&env, &bin, options, None),
        Shell::Zsh => posix_activate(&env, &bin, options, Some("rehash")),
        Shell::Fish => fish_activate(&env, &bin, options),
        Shell::PowerShell => powershell_activate(&env, &bin, options),
    }
}

/// Script that restores PATH and clears the active markers.
///
/// Evaluating it with nothing active is a no-op.
pub fn deactivation_script(shell: Shell) -> String {
    match shell {
        Shell::Bash => posix_deactivate(Some("hash -r 2>/dev/null")),
        Shell::Sh => posix_deactivate(None),
        Shell::Zsh => posix_deactivate(Some("rehash")),
        Shell::Fish => fish_deactivate(),
        Shell::PowerShell => powershell_deactivate(),
    }
}

fn posix_activate(env: &str, bin: &str, options: ActivateOptions, rehash: Option<&str>) -> String {
    let env = posix_quote(env);
    let mut script = format!("export {OLD_PATH}=\"$PATH\"\nexport {VIRTUAL_ENV}=\"{env}\"\n");
    if options.project_env {
        script.push_str(&format!("export {PROJECT_ENV}=\"{env}\"\n"));
    }
    script.push_str(&format!("export PATH=\"{}:$PATH\"\n", posix_quote(bin)));
    if let Some(rehash) = rehash {
        script.push_str(rehash);
        script.push('\n');
    }
    script
}

fn posix_deactivate(rehash: Option<&str>) -> String {
    let mut script = format!(
        "if [ -n \"${{{OLD_PATH}+x}}\" ]; then\n    export PATH=\"${OLD_PATH}\"\n    unset {OLD_PATH}\nfi\nunset {VIRTUAL_ENV}\nunset {PROJECT_ENV}\n"
    );
    if let Some(rehash) = rehash {
        script.push_str(rehash);
        script.push('\n');
    }
    script
}

fn fish_activate(env: &str, bin: &str, options: ActivateOptions) -> String {
    let env = fish_quote(env);
    let mut script = format!("set -gx {OLD_PATH} $PATH\nset -gx {VIRTUAL_ENV} \"{env}\"\n");
    if options.project_env {
        script.push_str(&format!("set -gx {PROJECT_ENV} \"{env}\"\n"));
    }
    script.push_str(&format!("set -gx PATH \"{}\" $PATH\n", fish_quote(bin)));
    script
}

fn fish_deactivate() -> String {
    format!(
        "if set -q {OLD_PATH}\n    set -gx PATH ${OLD_PATH}\n    set -e {OLD_PATH}\nend\nset -e {VIRTUAL_ENV}\nset -e {PROJECT_ENV}\n"
    )
}

fn powershell_activate(env: &str, bin: &str, options: ActivateOptions) -> String {
    let env = powershell_quote(env);
    let mut script = format!("$env:{OLD_PATH} = $env:PATH\n$env:{VIRTUAL_ENV} = \"{env}\"\n");
    if options.project_env {
        script.push_str(&format!("$env:{PROJECT_ENV} = \"{env}\"\n"));
    }
    script.push_str(&format!(
        "$env:PATH = \"{};\" + $env:PATH\n",
        powershell_quote(bin)
    ));
    script
}

fn powershell_deactivate() -> String {
    format!(
        "if (Test-Path Env:\\{OLD_PATH}) {{\n    $env:PATH = $env:{OLD_PATH}\n    Remove-Item Env:\\{OLD_PATH}\n}}\nRemove-Item Env:\\{VIRTUAL_ENV} -ErrorAction SilentlyContinue\nRemove-Item Env:\\{PROJECT_ENV} -ErrorAction SilentlyContinue\n"
    )
}

/// Escape for a double-quoted POSIX shell word.
fn posix_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Escape for a double-quoted fish string.
fn fish_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '"' | '$') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Escape for an expandable PowerShell string.
fn powershell_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '`' | '"' | '$') {
            out.push('`');
        }
        out.push(ch);
    }
    out
}
