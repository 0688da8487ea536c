//! Profile handlers for the logged-in user.

use std::path::Path;

use anyhow::Result;
use unikitchen_core::{ImageUpload, RecipeApiError, RecipeImage};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_user;

/// Execute `me show`.
pub async fn show(ctx: &CliContext) -> Result<()> {
    let token = ctx.require_token()?;
    let user = ctx.run(ctx.api().fetch_current_user(token)).await?;
    display_user(&user);
    Ok(())
}

/// Execute `me update`.
///
/// The service expects the full profile, so the current one is fetched and
/// the given fields are overlaid.
pub async fn update(
    ctx: &CliContext,
    username: Option<String>,
    bio: Option<String>,
) -> Result<()> {
    if username.is_none() && bio.is_none() {
        return Err(CliError::Arguments("pass --username and/or --bio".to_string()).into());
    }
    let token = ctx.require_token()?;

    let mut profile = ctx.run(ctx.api().fetch_current_user(token)).await?;
    if let Some(username) = username {
        profile.username = username;
    }
    if bio.is_some() {
        profile.bio = bio;
    }

    let message = ctx
        .run(ctx.api().update_current_user(token, &profile))
        .await?;
    if message.trim().is_empty() {
        println!("✅ Profile updated.");
    } else {
        println!("✅ {}", message.trim());
    }
    Ok(())
}

/// Execute `me upload-image`.
pub async fn upload_image(ctx: &CliContext, file: &Path) -> Result<()> {
    let token = ctx.require_token()?;
    let image = ImageUpload::from_path(file)
        .await
        .map_err(|e| CliError::Io(format!("{}: {e}", file.display())))?;

    ctx.run(ctx.api().upload_profile_image(token, &image))
        .await?;
    println!("✅ Profile image '{}' uploaded.", image.file_name);
    Ok(())
}

/// Execute `me image`.
pub async fn image(ctx: &CliContext) -> Result<()> {
    let token = ctx.require_token()?;
    let image = ctx
        .run(async { Ok::<_, RecipeApiError>(ctx.api().fetch_profile_image(token).await) })
        .await?;
    match image {
        RecipeImage::Loaded { data_uri } => println!("{data_uri}"),
        RecipeImage::Unavailable => println!("No profile image available."),
    }
    Ok(())
}
