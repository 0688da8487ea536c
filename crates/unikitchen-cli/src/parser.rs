//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Every
//! global option can also come from the environment (or a `.env` file).

use clap::Parser;

use crate::commands::Commands;

/// Command-line client for the UniKitchen recipe service.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "unikitchen")]
#[command(about = "Browse, rate and manage recipes on a UniKitchen server")]
#[command(version)]
pub struct Cli {
    /// Origin of the recipe service
    #[arg(long = "base-url", env = "UNIKITCHEN_API_URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer token for authenticated commands
    #[arg(long, env = "UNIKITCHEN_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "UNIKITCHEN_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::RecipeCommand;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "unikitchen",
            "--verbose",
            "--base-url",
            "https://kitchen.example.org",
            "--timeout",
            "5",
            "recipes",
            "latest",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("https://kitchen.example.org"));
        assert_eq!(cli.timeout, Some(5));
        assert!(matches!(
            cli.command,
            Some(Commands::Recipes {
                command: RecipeCommand::Latest { .. }
            })
        ));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["unikitchen", "favorites", "list", "--token", "abc"]);
        assert_eq!(cli.token.as_deref(), Some("abc"));
    }
}
