//! CLI argument parsing.

use clap::{Parser, Subcommand, ValueEnum};
use scram_credential::ScramMechanism;

use crate::config::OutputFormat;

/// scramgen - SCRAM credential generator.
#[derive(Debug, Parser)]
#[command(name = "scramgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate SCRAM credentials for a password.
    Generate(GenerateArgs),

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the generate command.
#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Plaintext password. Prompted for (hidden) when omitted.
    pub password: Option<String>,

    /// PBKDF2 iteration count (overrides the configured default).
    #[arg(short, long, env = "SCRAMGEN_ITERATIONS")]
    pub iterations: Option<u32>,

    /// Mechanisms to generate credentials for. Repeatable; defaults to
    /// both SCRAM-SHA-256 and SCRAM-SHA-512.
    #[arg(short, long = "mechanism", value_enum)]
    pub mechanisms: Vec<MechanismArg>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration.
    Show,

    /// Set the default iteration count.
    SetIterations {
        /// New default iteration count.
        iterations: u32,
    },

    /// Print the configuration file path.
    Path,
}

/// Mechanism selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MechanismArg {
    /// SCRAM-SHA-256.
    #[value(name = "sha-256", alias = "sha256")]
    Sha256,

    /// SCRAM-SHA-512.
    #[value(name = "sha-512", alias = "sha512")]
    Sha512,
}

impl From<MechanismArg> for ScramMechanism {
    fn from(arg: MechanismArg) -> Self {
        match arg {
            MechanismArg::Sha256 => Self::Sha256,
            MechanismArg::Sha512 => Self::Sha512,
        }
    }
}

impl GenerateArgs {
    /// Resolves the requested mechanisms, defaulting to all of them.
    #[must_use]
    pub fn selected_mechanisms(&self) -> Vec<ScramMechanism> {
        if self.mechanisms.is_empty() {
            ScramMechanism::ALL.to_vec()
        } else {
            let mut mechanisms: Vec<ScramMechanism> =
                self.mechanisms.iter().map(|&m| m.into()).collect();
            mechanisms.dedup();
            mechanisms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_parses_password_and_options() {
        let cli = Cli::parse_from([
            "scramgen",
            "generate",
            "hunter2",
            "--iterations",
            "8192",
            "--mechanism",
            "sha-256",
        ]);

        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.password.as_deref(), Some("hunter2"));
        assert_eq!(args.iterations, Some(8192));
        assert_eq!(args.selected_mechanisms(), vec![ScramMechanism::Sha256]);
    }

    #[test]
    fn generate_defaults_to_both_mechanisms() {
        let cli = Cli::parse_from(["scramgen", "generate", "hunter2"]);

        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(
            args.selected_mechanisms(),
            vec![ScramMechanism::Sha256, ScramMechanism::Sha512]
        );
    }

    #[test]
    fn mechanism_aliases_parse() {
        let cli = Cli::parse_from(["scramgen", "generate", "-m", "sha256", "-m", "sha512", "pw"]);

        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.selected_mechanisms().len(), 2);
    }

    #[test]
    fn unknown_mechanism_is_rejected() {
        let result = Cli::try_parse_from(["scramgen", "generate", "-m", "md5", "pw"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_subcommands_parse() {
        let cli = Cli::parse_from(["scramgen", "config", "set-iterations", "10000"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::SetIterations { iterations: 10000 })
        ));
    }
}
