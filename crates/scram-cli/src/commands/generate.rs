//! The generate command: derive SCRAM credentials for a password.

use scram_credential::generate_credentials;

use crate::cli::GenerateArgs;
use crate::config::OutputFormat;
use crate::output::{output_credentials, prompt_password, success};
use crate::{CliConfig, CliError, CliResult};

/// Runs the generate command.
///
/// The password comes from the argument or, when omitted, a hidden
/// prompt. Empty passwords are rejected here as caller policy; the
/// derivation layer itself does not enforce a minimum length.
pub fn run_generate(
    args: GenerateArgs,
    config: &CliConfig,
    output_format: OutputFormat,
) -> CliResult<()> {
    let password = resolve_password(&args)?;
    let iterations = config.effective_iterations(args.iterations);
    let mechanisms = args.selected_mechanisms();

    let set = generate_credentials(&password, iterations, &mechanisms)?;

    output_credentials(&set, output_format)?;
    if output_format != OutputFormat::Json {
        success(&format!(
            "Generated credentials for {} mechanism(s) at {} iterations",
            set.len(),
            iterations
        ));
    }
    Ok(())
}

fn resolve_password(args: &GenerateArgs) -> CliResult<String> {
    let password = match &args.password {
        Some(p) => p.clone(),
        None => prompt_password("Enter password: ")?,
    };

    if password.is_empty() {
        return Err(CliError::Validation("no password provided".to_string()));
    }
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(password: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            password: password.map(String::from),
            iterations: None,
            mechanisms: Vec::new(),
        }
    }

    #[test]
    fn empty_password_is_rejected() {
        let result = resolve_password(&args(Some("")));
        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn supplied_password_is_used() {
        let password = resolve_password(&args(Some("hunter2"))).unwrap();
        assert_eq!(password, "hunter2");
    }

    #[test]
    fn generate_with_default_config() {
        let config = CliConfig::default();
        let result = run_generate(args(Some("hunter2")), &config, OutputFormat::Quiet);
        assert!(result.is_ok());
    }

    #[test]
    fn zero_iterations_surfaces_derivation_error() {
        let config = CliConfig::default();
        let mut generate_args = args(Some("hunter2"));
        generate_args.iterations = Some(0);

        let result = run_generate(generate_args, &config, OutputFormat::Quiet);
        assert!(matches!(result, Err(CliError::Scram(_))));
    }
}
