//! Rating command handlers.

use anyhow::Result;
use unikitchen_core::{RatingValue, RecipeId, UserRating};

use crate::bootstrap::CliContext;
use crate::presentation::{display_ratings, format_timestamp};

/// One-line summary of the user's own rating.
pub fn describe_user_rating(id: RecipeId, rating: Option<&UserRating>) -> String {
    match rating {
        Some(r) => match r.created_at {
            Some(ref at) => format!(
                "Your rating for recipe {id}: {}/5 (since {})",
                r.rating_value,
                format_timestamp(Some(at))
            ),
            None => format!("Your rating for recipe {id}: {}/5", r.rating_value),
        },
        None => format!("You have not rated recipe {id} yet."),
    }
}

/// Execute `rating show`.
pub async fn show(ctx: &CliContext, id: RecipeId) -> Result<()> {
    let token = ctx.require_token()?;
    let rating = ctx.run(ctx.api().fetch_user_rating(token, id)).await?;
    println!("{}", describe_user_rating(id, rating.as_ref()));
    Ok(())
}

/// Execute `rating submit`.
pub async fn submit(ctx: &CliContext, id: RecipeId, value: RatingValue) -> Result<()> {
    let token = ctx.require_token()?;
    ctx.run(ctx.api().submit_rating(token, id, value)).await?;
    println!("✅ Rated recipe {id} with {value}/5.");
    Ok(())
}

/// Execute `rating list`.
pub async fn list(ctx: &CliContext, id: RecipeId) -> Result<()> {
    let ratings = ctx
        .run(ctx.api().fetch_recipe_ratings(ctx.token(), id))
        .await?;
    display_ratings(&ratings);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{anonymous_context, context};
    use serde_json::json;
    use unikitchen_core::RecipeApiError;
    use unikitchen_core::ports::MockRecipeApiPort;

    fn rating(value: i64) -> UserRating {
        serde_json::from_value(json!({"ratingValue": value})).unwrap()
    }

    #[test]
    fn test_describe_user_rating() {
        assert_eq!(
            describe_user_rating(RecipeId(7), Some(&rating(4))),
            "Your rating for recipe 7: 4/5"
        );
        assert_eq!(
            describe_user_rating(RecipeId(7), None),
            "You have not rated recipe 7 yet."
        );
        // Legacy out-of-range rows are shown as stored
        assert_eq!(
            describe_user_rating(RecipeId(7), Some(&rating(9))),
            "Your rating for recipe 7: 9/5"
        );
    }

    #[tokio::test]
    async fn test_show_unrated_is_not_an_error() {
        let mut port = MockRecipeApiPort::new();
        port.expect_fetch_user_rating()
            .times(1)
            .returning(|_, _| Ok(None));

        show(&context(port), RecipeId(7)).await.unwrap();
    }

    #[tokio::test]
    async fn test_show_propagates_other_failures() {
        let mut port = MockRecipeApiPort::new();
        port.expect_fetch_user_rating().returning(|_, _| {
            Err(RecipeApiError::Server {
                status: 502,
                message: "bad gateway".to_string(),
            })
        });

        let err = show(&context(port), RecipeId(7)).await.unwrap_err();
        assert_eq!(crate::error::exit_code_for(&err), 69);
    }

    #[tokio::test]
    async fn test_submit_passes_value() {
        let mut port = MockRecipeApiPort::new();
        port.expect_submit_rating()
            .withf(|_, id, value| *id == RecipeId(7) && value.get() == 4)
            .times(1)
            .returning(|_, _, _| Ok(()));

        submit(&context(port), RecipeId(7), RatingValue::new(4).unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_works_anonymously() {
        let mut port = MockRecipeApiPort::new();
        port.expect_fetch_recipe_ratings()
            .withf(|token, id| token.is_none() && *id == RecipeId(7))
            .times(1)
            .returning(|_, _| Ok(vec![rating(5), rating(3)]));

        list(&anonymous_context(port), RecipeId(7)).await.unwrap();
    }
}
