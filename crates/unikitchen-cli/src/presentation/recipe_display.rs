//! Recipe, rating and profile display for CLI output.

use chrono::NaiveDateTime;
use unikitchen_core::{
    FavoriteRecipe, Ingredient, RecipeDetails, RecipeListing, RecipeOverview, UserInfo,
    UserRating,
};

use super::tables::{format_optional, print_separator, truncate_string};

const TABLE_WIDTH: usize = 96;

/// Price in euros with two decimals.
pub fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| "--".to_string(), |p| format!("{p:.2} €"))
}

/// Average rating with the number of votes, e.g. `4.3 (12)`.
pub fn format_rating(average: Option<f64>, count: u32) -> String {
    match average {
        Some(avg) if count > 0 => format!("{avg:.1} ({count})"),
        _ => "--".to_string(),
    }
}

/// Timestamp as `YYYY-MM-DD HH:MM`, or `--`.
pub fn format_timestamp(at: Option<&NaiveDateTime>) -> String {
    at.map_or_else(
        || "--".to_string(),
        |t| t.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Ingredient line such as `500 g Mehl`; missing quantity or unit is left out.
pub fn format_ingredient(ingredient: &Ingredient) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if let Some(quantity) = ingredient.quantity {
        parts.push(quantity.to_string());
    }
    if let Some(unit) = ingredient.unit.as_deref().filter(|u| !u.is_empty()) {
        parts.push(unit.to_string());
    }
    parts.push(ingredient.name.clone());
    parts.join(" ")
}

fn image_marker(image_src: Option<&String>) -> &'static str {
    if image_src.is_some() { "yes" } else { "" }
}

fn print_overview_row(recipe: &RecipeOverview) {
    println!(
        "{:<6} {:<28} {:<12} {:<10} {:<8} {:<10} {:<3} {}",
        recipe.id,
        truncate_string(&recipe.name, 27),
        format_optional(recipe.category.as_ref(), "--"),
        format_optional(recipe.difficulty_level.as_ref(), "--"),
        format_price(recipe.price),
        format_rating(recipe.average_rating, recipe.rating_count),
        if recipe.is_favorite { "*" } else { "" },
        image_marker(recipe.image_src.as_ref()),
    );
}

/// Print a listing as a table, with a page footer for paged results.
pub fn display_recipe_listing(listing: &RecipeListing) {
    if listing.is_empty() {
        println!("No recipes found.");
        return;
    }

    println!(
        "{:<6} {:<28} {:<12} {:<10} {:<8} {:<10} {:<3} Image",
        "ID", "Name", "Category", "Level", "Price", "Rating", "Fav"
    );
    print_separator(TABLE_WIDTH);
    for recipe in listing.items() {
        print_overview_row(recipe);
    }

    if let Some(page) = listing.page() {
        print_separator(TABLE_WIDTH);
        println!(
            "Page {} of {} ({} recipes)",
            page.number + 1,
            page.total_pages.max(1),
            page.total_elements
        );
    }
}

/// Print every field of a recipe.
pub fn display_recipe_details(recipe: &RecipeDetails) {
    println!("{} (ID {})", recipe.name, recipe.id);
    print_separator(TABLE_WIDTH);
    println!(
        "  Category:   {}",
        format_optional(recipe.category.as_ref(), "--")
    );
    println!(
        "  Difficulty: {}",
        format_optional(recipe.difficulty_level.as_ref(), "--")
    );
    println!("  Price:      {}", format_price(recipe.price));
    println!(
        "  Duration:   {}",
        recipe
            .duration
            .map_or_else(|| "--".to_string(), |d| format!("{d} min"))
    );
    println!(
        "  Rating:     {}",
        format_rating(recipe.average_rating, recipe.rating_count)
    );
    println!("  Views:      {}", recipe.view_count);
    if let Some(ref owner) = recipe.owner_username {
        println!("  Owner:      {owner}");
    }
    if recipe.is_favorite {
        println!("  In your favorites");
    }

    if !recipe.ingredients.is_empty() {
        println!();
        println!("Ingredients:");
        for ingredient in &recipe.ingredients {
            println!("  - {}", format_ingredient(ingredient));
        }
    }

    if let Some(ref preparation) = recipe.preparation {
        println!();
        println!("Preparation:");
        for line in preparation.lines() {
            println!("  {line}");
        }
    }

    if let Some(ref image) = recipe.image_src {
        println!();
        println!("Image: {}", truncate_string(image, 72));
    }
}

/// Print the user's favorites.
pub fn display_favorites(favorites: &[FavoriteRecipe]) {
    if favorites.is_empty() {
        println!("You have no favorite recipes yet.");
        return;
    }

    println!(
        "{:<6} {:<32} {:<12} {:<10} Price",
        "ID", "Name", "Category", "Level"
    );
    print_separator(72);
    for favorite in favorites {
        println!(
            "{:<6} {:<32} {:<12} {:<10} {}",
            favorite.recipe_id,
            truncate_string(&favorite.recipe_name, 31),
            format_optional(favorite.category.as_ref(), "--"),
            format_optional(favorite.difficulty_level.as_ref(), "--"),
            format_price(favorite.price),
        );
    }
}

/// Print all ratings of a recipe with their average.
pub fn display_ratings(ratings: &[UserRating]) {
    if ratings.is_empty() {
        println!("No ratings yet.");
        return;
    }

    println!("{:<8} {:<8} Rated at", "User", "Stars");
    print_separator(40);
    for rating in ratings {
        println!(
            "{:<8} {:<8} {}",
            format_optional(rating.user_id.as_ref(), "--"),
            rating.rating_value,
            format_timestamp(rating.created_at.as_ref()),
        );
    }

    let total: i64 = ratings.iter().map(|r| r.rating_value).sum();
    #[allow(clippy::cast_precision_loss)] // a handful of ratings
    let average = total as f64 / ratings.len() as f64;
    print_separator(40);
    println!("Average: {average:.1} from {} rating(s)", ratings.len());
}

/// Print a user profile.
pub fn display_user(user: &UserInfo) {
    println!("Username: {}", user.username);
    if let Some(id) = user.id {
        println!("  ID:      {id}");
    }
    println!("  Bio:     {}", user.bio.as_deref().unwrap_or("--"));
    println!("  Joined:  {}", format_timestamp(user.created_at.as_ref()));
    println!("  Updated: {}", format_timestamp(user.updated_at.as_ref()));
}
