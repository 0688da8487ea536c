//! Command handlers that delegate to the recipe port.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn <command>(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `RecipeApiPort` methods through `CliContext::run`
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Build HTTP requests or know about URLs
//! - Hold tokens beyond the context they were given

pub mod auth;
pub mod favorites;
pub mod me;
pub mod ratings;
pub mod recipes;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::{
    AuthCommand, Commands, FavoriteCommand, MeCommand, RatingCommand, RecipeCommand,
};

/// Route a parsed command to its handler.
pub async fn dispatch(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Recipes { command } => match command {
            RecipeCommand::Latest { with_images } => recipes::latest(ctx, with_images).await,
            RecipeCommand::Search(args) => recipes::search(ctx, &args).await,
            RecipeCommand::Mine => recipes::mine(ctx).await,
            RecipeCommand::Show { id, with_image } => recipes::show(ctx, id, with_image).await,
            RecipeCommand::Create(fields) => recipes::create(ctx, fields).await,
            RecipeCommand::Update { id, fields } => recipes::update(ctx, id, fields).await,
            RecipeCommand::Delete { id, force } => recipes::delete(ctx, id, force).await,
            RecipeCommand::UploadImage { id, file } => {
                recipes::upload_image(ctx, id, &file).await
            }
        },
        Commands::Favorites { command } => match command {
            FavoriteCommand::Toggle { id } => favorites::toggle(ctx, id).await,
            FavoriteCommand::List => favorites::list(ctx).await,
        },
        Commands::Rating { command } => match command {
            RatingCommand::Show { id } => ratings::show(ctx, id).await,
            RatingCommand::Submit { id, value } => ratings::submit(ctx, id, value).await,
            RatingCommand::List { id } => ratings::list(ctx, id).await,
        },
        Commands::Auth { command } => match command {
            AuthCommand::Login { username, password } => {
                auth::login(ctx, username, password).await
            }
            AuthCommand::Register {
                username,
                password,
                bio,
            } => auth::register(ctx, username, password, bio).await,
        },
        Commands::Me { command } => match command {
            MeCommand::Show => me::show(ctx).await,
            MeCommand::Update { username, bio } => me::update(ctx, username, bio).await,
            MeCommand::UploadImage { file } => me::upload_image(ctx, &file).await,
            MeCommand::Image => me::image(ctx).await,
        },
    }
}
