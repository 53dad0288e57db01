//! pincell - Segmented PIN Entry Demo
//!
//! Hosts one PIN control in the terminal and echoes the entered value below it.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use pincell::render::TerminalUI;
use pincell::{AppSettings, Application, CompletionMode, PincellError};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("pincell")
        .version(pincell::VERSION)
        .about("A segmented PIN entry control for the terminal")
        .long_about(
            "pincell shows a row of PIN cells backed by a single hidden input. Type digits, \
             paste a code, or click the cells to focus them.",
        )
        .arg(
            Arg::new("length")
                .long("length")
                .short('n')
                .help("Number of cells")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("no-autofocus")
                .long("no-autofocus")
                .help("Start without focus; click the cells or press Tab to begin")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("secure")
                .long("secure")
                .help("Mask entered digits")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("level-completion")
                .long("level-completion")
                .help("Report completion on every change that leaves the PIN full")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clear-on-complete")
                .long("clear-on-complete")
                .help("Empty the cells after each completed PIN")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .help("Cell theme")
                .value_parser(["default", "monochrome", "high-contrast"]),
        )
        .arg(
            Arg::new("autofill")
                .long("autofill")
                .value_name("CODE")
                .help("Deliver a one-time code through autofill on startup"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Configuration file (defaults to the platform config directory)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Built-in defaults, then the configuration file, then command-line flags.
fn resolve_settings(matches: &ArgMatches) -> Result<AppSettings> {
    let mut settings = AppSettings::default();

    #[cfg(feature = "config")]
    {
        let explicit = matches.get_one::<PathBuf>("config");
        pincell::config::FileConfig::load(explicit.map(PathBuf::as_path))?
            .apply_to(&mut settings)
            .context("applying configuration file")?;
    }
    #[cfg(not(feature = "config"))]
    {
        if matches.get_one::<PathBuf>("config").is_some() {
            return Err(PincellError::invalid_argument(
                "--config needs the `config` feature",
            )
            .into());
        }
    }

    if let Some(&length) = matches.get_one::<usize>("length") {
        if length == 0 {
            return Err(PincellError::invalid_argument("--length must be at least 1").into());
        }
        settings.pin_length = length;
    }
    if matches.get_flag("no-autofocus") {
        settings.auto_focus = false;
    }
    if matches.get_flag("secure") {
        settings.secure = true;
    }
    if matches.get_flag("level-completion") {
        settings.completion = CompletionMode::Level;
    }
    if matches.get_flag("clear-on-complete") {
        settings.clear_on_complete = true;
    }
    if let Some(theme) = matches.get_one::<String>("theme") {
        settings.theme = theme.clone();
    }
    if let Some(code) = matches.get_one::<String>("autofill") {
        settings.autofill = Some(code.clone());
    }

    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; set RUST_LOG to see them
    env_logger::init();

    let matches = cli().get_matches();
    let settings = resolve_settings(&matches)?;
    log::debug!("Resolved settings: {:?}", settings);

    let ui_renderer = Box::new(TerminalUI::new()?);
    let mut app = Application::new(settings, ui_renderer)?;

    app.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!pincell::VERSION.is_empty());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let matches = cli()
            .try_get_matches_from([
                "pincell",
                "--length",
                "4",
                "--no-autofocus",
                "--secure",
                "--level-completion",
                "--theme",
                "monochrome",
                "--autofill",
                "123456",
            ])
            .unwrap();

        let settings = resolve_settings(&matches).unwrap();
        assert_eq!(settings.pin_length, 4);
        assert!(!settings.auto_focus);
        assert!(settings.secure);
        assert_eq!(settings.completion, CompletionMode::Level);
        assert_eq!(settings.theme, "monochrome");
        assert_eq!(settings.autofill.as_deref(), Some("123456"));
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let matches = cli()
            .try_get_matches_from(["pincell", "--length", "0"])
            .unwrap();
        let err = resolve_settings(&matches).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PincellError>(),
            Some(PincellError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_unknown_theme_is_rejected_by_parser() {
        assert!(cli()
            .try_get_matches_from(["pincell", "--theme", "neon"])
            .is_err());
    }
}
