//! # RecipeImport
//!
//! Parsing core for a Hebrew-localized recipe-sharing application: turns a
//! pasted block of free text into a structured recipe preview and converts
//! cooking quantities between human notation and canonical decimals.

pub mod amount;
pub mod config;
pub mod errors;
pub mod importer;
pub mod ingredient_line;
pub mod model;
pub mod patterns;
pub mod validation;

// Re-export types for easier access
pub use amount::{format_amount_to_fraction, parse_amount_to_decimal};
pub use config::ImporterConfig;
pub use importer::{parse, RecipeTextImporter};
pub use model::{IngredientLine, ParsedRecipe, Quantity};
