use std::path::Path;

/// Shell family used to pick activation script syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Sh,
    Zsh,
    Fish,
    PowerShell,
}

impl Shell {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bash" => Some(Shell::Bash),
            "sh" | "dash" => Some(Shell::Sh),
            "zsh" => Some(Shell::Zsh),
            "fish" => Some(Shell::Fish),
            "powershell" | "pwsh" => Some(Shell::PowerShell),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Sh => "sh",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::PowerShell => "powershell",
        }
    }

    /// Guess the calling shell from the OS and `$SHELL`.
    ///
    /// This is a heuristic. A wrong guess produces a script the real shell
    /// fails to parse.
    pub fn detect(shell_var: Option<&str>) -> Self {
        Self::detect_for(cfg!(windows), shell_var)
    }

    pub(crate) fn detect_for(windows: bool, shell_var: Option<&str>) -> Self {
        if windows {
            return Shell::PowerShell;
        }

        let name = shell_var
            .and_then(|s| Path::new(s).file_name())
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if name.contains("fish") {
            Shell::Fish
        } else if name.contains("zsh") {
            Shell::Zsh
        } else {
            Shell::Bash
        }
    }
}
