//! Configuration management commands.

use crate::cli::ConfigCommand;
use crate::output::{output_single, success};
use crate::{CliConfig, CliResult};

/// Runs a config command.
pub fn run_config(cmd: ConfigCommand, config: &mut CliConfig) -> CliResult<()> {
    match cmd {
        ConfigCommand::Show => output_single(config),
        ConfigCommand::SetIterations { iterations } => {
            config.default_iterations = iterations;
            config.save()?;
            success(&format!("Default iteration count set to {}", iterations));
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", CliConfig::config_path()?.display());
            Ok(())
        }
    }
}
