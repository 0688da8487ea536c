//! Favorite command handlers.

use anyhow::Result;
use serde_json::Value;
use unikitchen_core::RecipeId;

use crate::bootstrap::CliContext;
use crate::presentation::display_favorites;

/// Human-readable form of the toggle answer.
///
/// The service's body is passed through undecoded, so anything it sends is
/// shown as-is; an empty body becomes a generic confirmation.
pub fn describe_toggle(id: RecipeId, answer: &Value) -> String {
    match answer {
        Value::Null => format!("Favorite toggled for recipe {id}."),
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Execute `favorites toggle`.
pub async fn toggle(ctx: &CliContext, id: RecipeId) -> Result<()> {
    let token = ctx.require_token()?;
    let answer = ctx.run(ctx.api().toggle_favorite(token, id)).await?;
    println!("{}", describe_toggle(id, &answer));
    Ok(())
}

/// Execute `favorites list`.
pub async fn list(ctx: &CliContext) -> Result<()> {
    let token = ctx.require_token()?;
    let favorites = ctx.run(ctx.api().fetch_favorites(token)).await?;
    display_favorites(&favorites);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{TOKEN, context};
    use serde_json::json;
    use unikitchen_core::ports::MockRecipeApiPort;

    #[test]
    fn test_describe_toggle() {
        assert_eq!(
            describe_toggle(RecipeId(3), &Value::Null),
            "Favorite toggled for recipe 3."
        );
        assert_eq!(
            describe_toggle(RecipeId(3), &json!("Recipe removed from favorites")),
            "Recipe removed from favorites"
        );
        assert!(describe_toggle(RecipeId(3), &json!({"favorite": true})).contains("\"favorite\": true"));
    }

    #[tokio::test]
    async fn test_toggle_calls_port_once() {
        let mut port = MockRecipeApiPort::new();
        port.expect_toggle_favorite()
            .withf(|token, id| token.expose() == TOKEN && *id == RecipeId(3))
            .times(1)
            .returning(|_, _| Ok(json!({"favorite": true})));

        toggle(&context(port), RecipeId(3)).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_decodes_favorites() {
        let mut port = MockRecipeApiPort::new();
        port.expect_fetch_favorites().times(1).returning(|_| {
            Ok(serde_json::from_value(json!([
                {"recipeId": 1, "recipeName": "Apfelkuchen", "category": "KUCHEN"}
            ]))
            .unwrap())
        });

        list(&context(port)).await.unwrap();
    }
}
