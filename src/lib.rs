//! Agent, manager and property linkage for brokerage back-office forms.
//!
//! The [`linkage`] module is the library core; the remaining modules wrap it
//! in the `proplink` CLI, which works against a captured roster on disk.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod linkage;
pub mod logging;
pub mod model;
pub mod ports;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version land here and are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    let config = config::LinkageConfig::from_env().map_err(|err| err.to_string())?;
    logging::init(&config.log_level);
    commands::dispatch(&cli.command, &config)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["proplink", "unknown"]);
        assert!(result.unwrap_err().contains("unrecognized subcommand"));
    }

    #[test]
    fn run_treats_help_as_success() {
        assert!(run(["proplink", "--help"]).is_ok());
    }
}
