//! Recipe command handlers.
//!
//! Listing commands work without a token; the token only personalizes the
//! result. Everything that reads a single recipe or changes one needs it.

use std::path::Path;

use anyhow::Result;
use unikitchen_core::{
    ImageUpload, Ingredient, QueryParams, RecipeApiError, RecipeCreationRequest, RecipeFilter,
    RecipeId, RecipeListing, RecipeUpdateRequest, SortDirection, attach_recipe_image,
    attach_recipe_images,
};

use crate::bootstrap::CliContext;
use crate::commands::{RecipeFields, SearchArgs};
use crate::error::CliError;
use crate::presentation::{display_recipe_details, display_recipe_listing};
use crate::utils::input;

/// Page size the service uses when none is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Parse `NAME:QUANTITY:UNIT`.
///
/// The name may itself contain colons; quantity and unit are taken from the
/// right and may be left empty.
pub fn parse_ingredient(raw: &str) -> Result<Ingredient, CliError> {
    let invalid = || {
        CliError::Arguments(format!(
            "ingredient '{raw}' must look like NAME:QUANTITY:UNIT, e.g. Mehl:500:g"
        ))
    };

    let mut parts = raw.rsplitn(3, ':');
    let unit = parts.next().ok_or_else(invalid)?.trim();
    let quantity = parts.next().ok_or_else(invalid)?.trim();
    let name = parts.next().ok_or_else(invalid)?.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    // Empty quantity or unit, as in `Salz::`, means "to taste".
    let quantity = if quantity.is_empty() {
        None
    } else {
        Some(quantity.replace(',', ".").parse::<f64>().map_err(|_| invalid())?)
    };

    Ok(Ingredient {
        name: name.to_string(),
        quantity,
        unit: (!unit.is_empty()).then(|| unit.to_string()),
    })
}

/// Parse a raw `KEY=VALUE` query parameter.
pub fn parse_param(raw: &str) -> Result<(String, String), CliError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(CliError::Arguments(format!(
            "query parameter '{raw}' must look like KEY=VALUE"
        ))),
    }
}

/// Translate search flags into the query string sent to the service.
///
/// Typed filters come first, raw `--param` pairs are appended in order.
pub fn search_query(args: &SearchArgs) -> Result<QueryParams, CliError> {
    let mut filter = RecipeFilter::new();
    if let Some(category) = args.category {
        filter = filter.with_category(category);
    }
    if args.cheap {
        filter = filter.with_cheap(true);
    }
    if args.quick {
        filter = filter.with_quick(true);
    }
    if let Some(level) = args.difficulty {
        filter = filter.with_difficulty(level);
    }
    if args.page.is_some() || args.size != DEFAULT_PAGE_SIZE {
        filter = filter.with_page(args.page.unwrap_or(0), args.size);
    }
    if let Some(ref sort_by) = args.sort_by {
        let direction = if args.ascending {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        filter = filter.with_sort(sort_by.clone(), direction);
    }

    let mut params = filter.to_query();
    for raw in &args.params {
        let (key, value) = parse_param(raw)?;
        params.push(key, value);
    }
    Ok(params)
}

fn parse_ingredients(raw: &[String]) -> Result<Vec<Ingredient>, CliError> {
    raw.iter().map(|r| parse_ingredient(r)).collect()
}

/// Build the body for a new recipe. `--name` is mandatory.
pub fn creation_request(fields: RecipeFields) -> Result<RecipeCreationRequest, CliError> {
    let name = fields
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| {
            CliError::Arguments("--name is required to create a recipe".to_string())
        })?;

    Ok(RecipeCreationRequest {
        name,
        price: fields.price,
        duration: fields.duration,
        difficulty_level: fields.difficulty,
        category: fields.category,
        preparation: fields.preparation,
        ingredients: parse_ingredients(&fields.ingredients)?,
    })
}

/// Overlay the given fields onto an update body. Unset fields keep their value.
pub fn apply_fields(
    request: &mut RecipeUpdateRequest,
    fields: RecipeFields,
) -> Result<(), CliError> {
    if let Some(name) = fields.name {
        request.name = name;
    }
    if fields.price.is_some() {
        request.price = fields.price;
    }
    if fields.duration.is_some() {
        request.duration = fields.duration;
    }
    if fields.difficulty.is_some() {
        request.difficulty_level = fields.difficulty;
    }
    if fields.category.is_some() {
        request.category = fields.category;
    }
    if fields.preparation.is_some() {
        request.preparation = fields.preparation;
    }
    if !fields.ingredients.is_empty() {
        request.ingredients = parse_ingredients(&fields.ingredients)?;
    }
    Ok(())
}

async fn show_listing(
    ctx: &CliContext,
    mut listing: RecipeListing,
    with_images: bool,
) -> Result<()> {
    if with_images {
        let attached = ctx
            .run(async {
                Ok::<_, RecipeApiError>(attach_recipe_images(ctx.api(), listing.items_mut()).await)
            })
            .await?;
        tracing::debug!(attached, total = listing.len(), "recipe images attached");
    }
    display_recipe_listing(&listing);
    Ok(())
}

/// Execute `recipes latest`.
pub async fn latest(ctx: &CliContext, with_images: bool) -> Result<()> {
    let listing = ctx.run(ctx.api().fetch_last_recipes(ctx.token())).await?;
    show_listing(ctx, listing, with_images).await
}

/// Execute `recipes search`.
pub async fn search(ctx: &CliContext, args: &SearchArgs) -> Result<()> {
    let params = search_query(args)?;
    let listing = ctx
        .run(ctx.api().fetch_filtered_recipes(ctx.token(), &params))
        .await?;
    show_listing(ctx, listing, args.with_images).await
}

/// Execute `recipes mine`.
pub async fn mine(ctx: &CliContext) -> Result<()> {
    let token = ctx.require_token()?;
    let listing = ctx.run(ctx.api().fetch_user_recipes(token)).await?;
    display_recipe_listing(&listing);
    Ok(())
}

/// Execute `recipes show`.
pub async fn show(ctx: &CliContext, id: RecipeId, with_image: bool) -> Result<()> {
    let token = ctx.require_token()?;
    let mut recipe = ctx.run(ctx.api().fetch_recipe_details(token, id)).await?;
    if with_image {
        let attached = ctx
            .run(async {
                Ok::<_, RecipeApiError>(attach_recipe_image(ctx.api(), &mut recipe).await)
            })
            .await?;
        if !attached {
            println!("(no image available)");
        }
    }
    display_recipe_details(&recipe);
    Ok(())
}

/// Execute `recipes create`.
pub async fn create(ctx: &CliContext, fields: RecipeFields) -> Result<()> {
    let token = ctx.require_token()?;
    let request = creation_request(fields)?;
    let created = ctx.run(ctx.api().create_recipe(token, &request)).await?;
    println!("✅ Created recipe '{}' (ID {}).", created.name, created.id);
    Ok(())
}

/// Execute `recipes update`.
///
/// The service replaces the whole recipe, so the current state is fetched
/// first and only the given fields are changed.
pub async fn update(ctx: &CliContext, id: RecipeId, fields: RecipeFields) -> Result<()> {
    let token = ctx.require_token()?;
    let current = ctx.run(ctx.api().fetch_recipe_details(token, id)).await?;

    let mut request = RecipeUpdateRequest::from(&current);
    apply_fields(&mut request, fields)?;
    if request == RecipeUpdateRequest::from(&current) {
        println!("Nothing to change for recipe {id}.");
        return Ok(());
    }

    let updated = ctx
        .run(ctx.api().update_recipe(token, id, &request))
        .await?;
    println!("✅ Updated recipe '{}' (ID {}).", updated.name, updated.id);
    Ok(())
}

/// Execute `recipes delete`.
pub async fn delete(ctx: &CliContext, id: RecipeId, force: bool) -> Result<()> {
    let token = ctx.require_token()?;

    if !force {
        let recipe = ctx.run(ctx.api().fetch_recipe_details(token, id)).await?;
        println!("Recipe to delete: {} (ID {})", recipe.name, recipe.id);
        if !input::prompt_confirmation("Are you sure you want to delete this recipe?")? {
            println!("Delete operation cancelled.");
            return Ok(());
        }
    }

    ctx.run(ctx.api().delete_recipe(token, id)).await?;
    println!("✅ Recipe {id} deleted.");
    Ok(())
}

/// Execute `recipes upload-image`.
pub async fn upload_image(ctx: &CliContext, id: RecipeId, file: &Path) -> Result<()> {
    let token = ctx.require_token()?;
    let image = ImageUpload::from_path(file)
        .await
        .map_err(|e| CliError::Io(format!("{}: {e}", file.display())))?;

    ctx.run(ctx.api().upload_recipe_image(token, id, &image))
        .await?;
    println!(
        "✅ Uploaded '{}' ({}, {} bytes) for recipe {id}.",
        image.file_name,
        image.content_type,
        image.bytes.len()
    );
    Ok(())
}
