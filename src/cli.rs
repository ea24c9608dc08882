use clap::{Parser, Subcommand};

/// uve - named Python virtual environments backed by uv
///
/// Environments live under $UVE_HOME (default ~/.uve). `activate` and
/// `deactivate` print a script for your shell to evaluate, e.g.
/// `eval "$(uve activate web)"`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new environment
    Create {
        /// Environment name
        #[arg(value_name = "NAME")]
        name: String,

        /// Python version to use (defaults to config `default_python`, then uv's choice)
        #[arg(value_name = "PYTHON")]
        python: Option<String>,

        /// Skip installing bootstrap packages (pip) into the new environment
        #[arg(long)]
        no_bootstrap: bool,
    },

    /// Print the activation script for an environment
    Activate {
        /// Environment name
        #[arg(value_name = "NAME")]
        name: String,

        /// Shell syntax (bash, sh, zsh, fish, powershell); auto-detects from $SHELL
        #[arg(short, long, value_name = "SHELL", env = "UVE_SHELL")]
        shell: Option<String>,

        /// Do not export UV_PROJECT_ENVIRONMENT
        #[arg(long)]
        no_project_env: bool,
    },

    /// Print the deactivation script
    Deactivate {
        /// Shell syntax (bash, sh, zsh, fish, powershell); auto-detects from $SHELL
        #[arg(short, long, value_name = "SHELL", env = "UVE_SHELL")]
        shell: Option<String>,
    },

    /// Delete an environment
    Delete {
        /// Environment name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Clone an environment, including its installed packages
    Clone {
        /// Source environment name
        #[arg(value_name = "SOURCE")]
        source: String,

        /// New environment name
        #[arg(value_name = "DEST")]
        dest: String,
    },

    /// List environments
    List,
}
