//! # scramgen
//!
//! Command-line SCRAM credential generator.

#![forbid(unsafe_code)]
#![deny(warnings)]

use clap::Parser;
use scram_cli::{
    cli::{Cli, Command},
    commands::{run_config, run_generate},
    config::CliConfig,
    output::error,
};

fn main() {
    let cli = Cli::parse();

    let mut config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    let output_format = cli.output.unwrap_or(config.output_format);

    let result = match cli.command {
        Command::Generate(args) => run_generate(args, &config, output_format),
        Command::Config(cmd) => run_config(cmd, &mut config),
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(1);
    }
}
