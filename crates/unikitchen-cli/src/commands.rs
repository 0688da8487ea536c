//! Subcommand definitions.
//!
//! One enum per resource group, mirroring the service's endpoint groups.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use unikitchen_core::{Category, DifficultyLevel, RatingValue, RecipeId};

/// Top-level command groups.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse and manage recipes
    Recipes {
        #[command(subcommand)]
        command: RecipeCommand,
    },

    /// Manage your favorite recipes
    Favorites {
        #[command(subcommand)]
        command: FavoriteCommand,
    },

    /// Read and submit ratings
    Rating {
        #[command(subcommand)]
        command: RatingCommand,
    },

    /// Log in or create an account
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Show or edit your profile
    Me {
        #[command(subcommand)]
        command: MeCommand,
    },
}

#[derive(Subcommand)]
pub enum RecipeCommand {
    /// Show the newest recipes
    Latest {
        /// Also download each recipe's image
        #[arg(long)]
        with_images: bool,
    },

    /// Search recipes with filters
    Search(SearchArgs),

    /// List the recipes you own
    Mine,

    /// Show one recipe in full
    Show {
        /// Recipe ID
        id: RecipeId,
        /// Also download the recipe image
        #[arg(long)]
        with_image: bool,
    },

    /// Create a recipe
    Create(RecipeFields),

    /// Change fields of an existing recipe
    Update {
        /// Recipe ID
        id: RecipeId,
        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: RecipeId,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Upload the image of a recipe
    UploadImage {
        /// Recipe ID
        id: RecipeId,
        /// Image file (content type guessed from the extension)
        file: PathBuf,
    },
}

/// Filters for `recipes search`.
#[allow(clippy::struct_excessive_bools)] // independent CLI switches
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Category (KUCHEN, NUDELN, REIS, FLEISCH, VEGETARISCH)
    #[arg(long)]
    pub category: Option<Category>,
    /// Only cheap recipes
    #[arg(long)]
    pub cheap: bool,
    /// Only quick recipes
    #[arg(long)]
    pub quick: bool,
    /// Difficulty (EINFACH, MITTEL, SCHWIERIG)
    #[arg(long)]
    pub difficulty: Option<DifficultyLevel>,
    /// Zero-based page index
    #[arg(long)]
    pub page: Option<u32>,
    /// Page size
    #[arg(long, default_value = "10")]
    pub size: u32,
    /// Field to sort by, e.g. averageRating
    #[arg(long)]
    pub sort_by: Option<String>,
    /// Sort ascending instead of descending
    #[arg(long)]
    pub ascending: bool,
    /// Extra query parameter forwarded verbatim (key=value, repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
    /// Also download each recipe's image
    #[arg(long)]
    pub with_images: bool,
}

/// Recipe content given on the command line.
///
/// For `create`, `--name` is required; for `update` every field is optional
/// and unset fields keep their current value.
#[derive(Args, Debug, Default)]
pub struct RecipeFields {
    /// Recipe name
    #[arg(long)]
    pub name: Option<String>,
    /// Price in euros
    #[arg(long)]
    pub price: Option<f64>,
    /// Preparation time in minutes
    #[arg(long)]
    pub duration: Option<u32>,
    /// Difficulty (EINFACH, MITTEL, SCHWIERIG)
    #[arg(long)]
    pub difficulty: Option<DifficultyLevel>,
    /// Category (KUCHEN, NUDELN, REIS, FLEISCH, VEGETARISCH)
    #[arg(long)]
    pub category: Option<Category>,
    /// Preparation instructions
    #[arg(long)]
    pub preparation: Option<String>,
    /// Ingredient as NAME:QUANTITY:UNIT, quantity and unit may be empty (repeatable; replaces all ingredients)
    #[arg(long = "ingredient", value_name = "NAME:QUANTITY:UNIT")]
    pub ingredients: Vec<String>,
}

#[derive(Subcommand)]
pub enum FavoriteCommand {
    /// Add or remove a recipe from your favorites
    Toggle {
        /// Recipe ID
        id: RecipeId,
    },
    /// List your favorites
    List,
}

#[derive(Subcommand)]
pub enum RatingCommand {
    /// Show your rating of a recipe
    Show {
        /// Recipe ID
        id: RecipeId,
    },
    /// Rate a recipe from 1 to 5
    Submit {
        /// Recipe ID
        id: RecipeId,
        /// Rating value (1-5)
        value: RatingValue,
    },
    /// List all ratings of a recipe
    List {
        /// Recipe ID
        id: RecipeId,
    },
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Log in and print a token for UNIKITCHEN_TOKEN
    Login {
        /// Username
        username: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = "UNIKITCHEN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Create an account
    Register {
        /// Username
        username: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = "UNIKITCHEN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Short profile text
        #[arg(long)]
        bio: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum MeCommand {
    /// Show your profile
    Show,
    /// Change username or bio
    Update {
        /// New username
        #[arg(long)]
        username: Option<String>,
        /// New bio
        #[arg(long)]
        bio: Option<String>,
    },
    /// Upload a profile image
    UploadImage {
        /// Image file (content type guessed from the extension)
        file: PathBuf,
    },
    /// Print your profile image as a data URI
    Image,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    fn recipe_command(args: &[&str]) -> RecipeCommand {
        let argv = ["unikitchen", "recipes"].iter().chain(args);
        match Cli::parse_from(argv).command {
            Some(Commands::Recipes { command }) => command,
            _ => panic!("expected recipes command"),
        }
    }

    #[test]
    fn test_search_parses_wire_names_case_insensitively() {
        let RecipeCommand::Search(args) = recipe_command(&[
            "search",
            "--category",
            "kuchen",
            "--difficulty",
            "EINFACH",
            "--cheap",
            "--param",
            "maxPrice=5",
        ]) else {
            panic!("expected search");
        };
        assert_eq!(args.category, Some(Category::Cake));
        assert_eq!(args.difficulty, Some(DifficultyLevel::Easy));
        assert!(args.cheap);
        assert!(!args.quick);
        assert_eq!(args.size, 10);
        assert_eq!(args.params, vec!["maxPrice=5".to_string()]);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = Cli::try_parse_from(["unikitchen", "recipes", "search", "--category", "soup"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rating_value_is_validated() {
        assert!(Cli::try_parse_from(["unikitchen", "rating", "submit", "7", "4"]).is_ok());
        assert!(Cli::try_parse_from(["unikitchen", "rating", "submit", "7", "6"]).is_err());
    }

    #[test]
    fn test_update_fields_are_optional() {
        let RecipeCommand::Update { id, fields } = recipe_command(&["update", "3", "--price", "2.5"])
        else {
            panic!("expected update");
        };
        assert_eq!(id, RecipeId(3));
        assert_eq!(fields.price, Some(2.5));
        assert!(fields.name.is_none());
    }
}
