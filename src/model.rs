//! Data model for imported recipes.
//!
//! These are plain values: a parse produces a fresh [`ParsedRecipe`] every
//! time and nothing here is mutated in place. The serde field names follow
//! the camelCase payload the surrounding application ships to its
//! persistence service after the user confirms an import.

use serde::{Deserialize, Serialize};

use crate::amount::parse_amount_to_decimal;

/// How much of an ingredient: the user-entered text plus its canonical value.
///
/// `decimal` is `0.0` when the raw text holds nothing parseable; that is a
/// valid degraded value, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// The original user-entered string (e.g. "1 1/4", "½", "2.5")
    pub raw: String,
    /// Canonical numeric value, used for any future scaling or sorting
    pub decimal: f64,
}

impl Quantity {
    /// Build a quantity from its raw text, deriving the canonical decimal.
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            decimal: parse_amount_to_decimal(raw),
        }
    }

    /// The zero quantity with empty raw text.
    pub fn empty() -> Self {
        Self {
            raw: String::new(),
            decimal: 0.0,
        }
    }
}

/// One row of a recipe's ingredient list.
///
/// Either a real ingredient record or a subtitle, a section header inside
/// the ingredient list such as "לבצק" ("For the dough").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IngredientLine {
    #[serde(rename_all = "camelCase")]
    Ingredient {
        /// What the ingredient is; non-empty
        product_name: String,
        /// Matched unit word, empty when the line carried none
        unit: String,
        quantity: Quantity,
        /// Trailing parenthesized remark or post-comma text, empty when absent
        comment: String,
    },
    Subtitle {
        /// Section header text; non-empty
        text: String,
    },
}

/// The output of importing free text: best-effort structure, never an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecipe {
    pub title: Option<String>,
    pub ingredients: Vec<IngredientLine>,
    /// Ordered; order is significant and preserved
    pub steps: Vec<String>,
    pub servings: Option<String>,
    pub prep_minutes: Option<String>,
    pub total_minutes: Option<String>,
}

impl ParsedRecipe {
    /// True when nothing at all was recognized in the source text.
    ///
    /// Callers should treat this as a signal to show the user the editable
    /// raw-text preview rather than silently accepting an empty recipe.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.ingredients.is_empty()
            && self.steps.is_empty()
            && self.servings.is_none()
            && self.prep_minutes.is_none()
            && self.total_minutes.is_none()
    }
}
