use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dermtui - skin analysis and routine builder
#[derive(Parser)]
#[command(name = "dermtui")]
#[command(about = "A terminal-based skin analysis quiz and skincare routine builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print product recommendations for a saved profile (headless mode)
    Recommend {
        /// Path to a skin profile JSON file
        #[arg(short, long)]
        profile: PathBuf,

        /// Emit the recommendation list as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate a skin profile JSON file
    Validate {
        /// Path to a skin profile JSON file
        profile: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["dermtui"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_recommend_parses_profile_path() {
        let cli = Cli::try_parse_from(["dermtui", "recommend", "--profile", "me.json", "--json"])
            .unwrap();
        match cli.command {
            Some(Commands::Recommend { profile, json }) => {
                assert_eq!(profile, PathBuf::from("me.json"));
                assert!(json);
            }
            _ => panic!("expected recommend subcommand"),
        }
    }

    #[test]
    fn test_validate_requires_path() {
        assert!(Cli::try_parse_from(["dermtui", "validate"]).is_err());
        let cli = Cli::try_parse_from(["dermtui", "validate", "me.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Validate { .. })));
    }
}
