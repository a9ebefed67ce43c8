//! dermtui - Main entry point
//!
//! Dispatches between the interactive TUI wizard and the headless
//! profile-file subcommands.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dermtui::app::App;
use dermtui::catalog;
use dermtui::cli::{Cli, Commands};
use dermtui::error::DermTuiError;
use dermtui::profile::SkinProfile;

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so the alternate screen stays intact; `RUST_LOG`
/// overrides the default `info` level.
fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    info!("dermtui starting up");

    let cli = Cli::parse_args();

    match cli.command {
        Some(Commands::Recommend { profile, json }) => run_recommend(&profile, json)?,
        Some(Commands::Validate { profile }) => run_validate(&profile)?,
        None => run_tui()?,
    }

    Ok(())
}

/// Run the interactive TUI wizard.
fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()
        .map_err(|e| DermTuiError::terminal(format!("failed to enable raw mode: {e}")))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| DermTuiError::terminal(format!("failed to enter alternate screen: {e}")))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| DermTuiError::terminal(format!("failed to create terminal: {e}")))?;

    let mut app = App::new();
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}

/// Print recommendations for a profile file (headless mode).
fn run_recommend(path: &Path, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let profile = load_checked_profile(path)?;
    let products = catalog::recommend(&profile);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    println!(
        "Recommendations for {} skin ({} concern(s)):",
        profile.skin_type,
        profile.concerns.len()
    );
    println!();
    for product in &products {
        println!(
            "  {:<28} {:<12} {:<24} ₹{}",
            product.name, product.category, product.usage, product.price
        );
    }
    Ok(())
}

/// Validate a profile file and report the result.
fn run_validate(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let profile = load_checked_profile(path)?;
    info!("profile validation successful");
    println!("✓ Profile is valid: {} skin, {} concern(s)", profile.skin_type, profile.concerns.len());
    Ok(())
}

fn load_checked_profile(path: &Path) -> Result<SkinProfile, Box<dyn std::error::Error>> {
    match SkinProfile::load_from_file(path) {
        Ok(profile) => match profile.validate() {
            Ok(()) => Ok(profile),
            Err(e) => {
                error!("profile validation failed: {e}");
                eprintln!("✗ Profile validation failed: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("failed to load profile file: {e}");
            eprintln!("✗ Failed to load profile file: {e}");
            std::process::exit(1);
        }
    }
}
