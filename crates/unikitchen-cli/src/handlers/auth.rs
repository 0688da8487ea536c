//! Login and registration handlers.
//!
//! The CLI keeps no session. A successful login prints the token so the user
//! can export it as `UNIKITCHEN_TOKEN` for later commands.

use anyhow::Result;
use unikitchen_core::Credentials;

use crate::bootstrap::CliContext;
use crate::presentation::display_user;
use crate::utils::input;

fn password_or_prompt(password: Option<String>) -> Result<String> {
    match password.filter(|p| !p.is_empty()) {
        Some(p) => Ok(p),
        None => input::prompt_required("Password"),
    }
}

/// Execute `auth login`.
pub async fn login(ctx: &CliContext, username: String, password: Option<String>) -> Result<()> {
    let credentials = Credentials::new(username, password_or_prompt(password)?);
    let session = ctx.run(ctx.api().login(&credentials)).await?;

    println!("✅ Logged in as {}.", session.user.username);
    println!();
    println!("export UNIKITCHEN_TOKEN={}", session.token.expose());
    Ok(())
}

/// Execute `auth register`.
pub async fn register(
    ctx: &CliContext,
    username: String,
    password: Option<String>,
    bio: Option<String>,
) -> Result<()> {
    let mut credentials = Credentials::new(username, password_or_prompt(password)?);
    if let Some(bio) = bio {
        credentials = credentials.with_bio(bio);
    }

    let user = ctx.run(ctx.api().register(&credentials)).await?;
    println!("✅ Account created.");
    display_user(&user);
    println!();
    println!("Run 'unikitchen auth login {}' to get a token.", user.username);
    Ok(())
}
