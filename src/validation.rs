//! Validation helpers for imported recipes.
//!
//! The importer itself never fails; these checks exist for the enclosing
//! application to run before shipping a confirmed import to persistence:
//!
//! - Recipe titles
//! - Ingredient records (non-empty product names and subtitles)
//! - Whole parsed recipes

use crate::model::{IngredientLine, ParsedRecipe};

/// Validates a recipe title
///
/// # Arguments
/// * `title` - The recipe title to validate
///
/// # Returns
/// * `Ok(&str)` - The trimmed title if valid
/// * `Err(&str)` - Error type: "empty" or "too_long"
///
/// # Examples
/// ```
/// use recipe_import::validation::validate_recipe_title;
///
/// assert!(validate_recipe_title("עוגת שוקולד").is_ok());
/// assert_eq!(validate_recipe_title(""), Err("empty"));
/// assert_eq!(validate_recipe_title(&"a".repeat(256)), Err("too_long"));
/// ```
pub fn validate_recipe_title(title: &str) -> Result<&str, &'static str> {
    let trimmed = title.trim();

    if trimmed.is_empty() {
        return Err("empty");
    }

    if trimmed.chars().count() > 255 {
        return Err("too_long");
    }

    Ok(trimmed)
}

/// Validate a single ingredient-list row against its invariants:
/// ingredient rows carry a non-empty product name, subtitle rows carry
/// non-empty text.
///
/// # Returns
/// * `Ok(())` - Row is valid
/// * `Err(&str)` - Error type indicating which invariant failed
pub fn validate_ingredient_line(line: &IngredientLine) -> Result<(), &'static str> {
    match line {
        IngredientLine::Ingredient { product_name, .. } => {
            if product_name.trim().is_empty() {
                return Err("empty-product-name");
            }
            if product_name.chars().count() > 100 {
                return Err("product-name-too-long");
            }
            Ok(())
        }
        IngredientLine::Subtitle { text } => {
            if text.trim().is_empty() {
                return Err("empty-subtitle");
            }
            Ok(())
        }
    }
}

/// Validate a whole parsed recipe before it is persisted.
///
/// An all-empty recipe is structurally valid: it is the importer's
/// "nothing recognized" terminal state and the caller decides what to do
/// with it. What this rejects is a recipe whose rows violate their own
/// invariants.
pub fn validate_parsed_recipe(recipe: &ParsedRecipe) -> Result<(), &'static str> {
    if let Some(title) = &recipe.title {
        validate_recipe_title(title)?;
    }

    for line in &recipe.ingredients {
        validate_ingredient_line(line)?;
    }

    if recipe.steps.iter().any(|step| step.trim().is_empty()) {
        return Err("empty-step");
    }

    Ok(())
}
