//! Output formatting utilities.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use colored::Colorize;
use scram_credential::CredentialSet;
use tabled::{settings::Style, Table, Tabled};

use crate::config::OutputFormat;

/// Prints a success message.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints a warning message.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Table row for a derived credential.
#[derive(Tabled)]
struct CredentialRow {
    #[tabled(rename = "Mechanism")]
    mechanism: String,
    #[tabled(rename = "Iterations")]
    iterations: u32,
    #[tabled(rename = "Salt (base64)")]
    salt: String,
    #[tabled(rename = "Stored key (base64)")]
    stored_key: String,
    #[tabled(rename = "Server key (base64)")]
    server_key: String,
}

/// Outputs a credential set in the requested format.
///
/// JSON goes to stdout so it can be redirected straight into a credential
/// file; status messages go to stderr.
pub fn output_credentials(set: &CredentialSet, format: OutputFormat) -> crate::CliResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(set)?;
            println!("{json}");
        }
        OutputFormat::Table => {
            let rows: Vec<CredentialRow> = set
                .iter()
                .map(|(name, credential)| CredentialRow {
                    mechanism: name.clone(),
                    iterations: credential.iterations,
                    salt: STANDARD.encode(&credential.salt),
                    stored_key: STANDARD.encode(&credential.stored_key),
                    server_key: STANDARD.encode(&credential.server_key),
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Outputs a single serializable item as pretty JSON.
pub fn output_single<T: serde::Serialize>(item: &T) -> crate::CliResult<()> {
    let json = serde_json::to_string_pretty(item)?;
    println!("{json}");
    Ok(())
}

/// Prompts for password input (hidden).
pub fn prompt_password(prompt: &str) -> crate::CliResult<String> {
    rpassword::prompt_password(prompt).map_err(crate::CliError::Io)
}
