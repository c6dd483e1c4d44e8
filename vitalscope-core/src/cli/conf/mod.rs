mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to config file
        #[arg(long, default_value = crate::conf::DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Print errors without diagnostics formatting
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print resolved configuration as JSON
    Dump {
        #[arg(long, default_value = crate::conf::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Print a starter config, or write it to PATH
    Init {
        path: Option<PathBuf>,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { config, plain } => check(config, plain),
        ConfigCmd::Dump { config } => dump(config),
        ConfigCmd::Init { path: Some(path) } => init(&path),
        ConfigCmd::Init { path: None } => {
            print!("{}", CONFIG_TEMPLATE.trim_start());
            Ok(())
        }
    }
}
