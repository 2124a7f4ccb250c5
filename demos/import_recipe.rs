//! # Recipe Import Example
//!
//! Demonstrates parsing pasted recipe text into a structured recipe, for
//! both the explicit-header form (Hebrew) and the positional-fallback form
//! (English), plus the amount conversion helpers.

use recipe_import::{format_amount_to_fraction, parse, parse_amount_to_decimal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🍳 Recipe Text Import Example");
    println!("==============================\n");

    // Example 1: Hebrew recipe with explicit headers
    println!("📖 Example 1: Hebrew Recipe with Headers");
    println!("----------------------------------------");

    let hebrew_recipe = "שם: עוגת שוקולד\n\
                         מנות: 8\n\
                         זמן הכנה: 20\n\
                         מצרכים:\n\
                         2 כוסות קמח\n\
                         1/2 כוס סוכר\n\
                         1 ביצה (גדולה)\n\
                         הוראות:\n\
                         לערבב הכל\n\
                         לאפות 30 דקות";

    let recipe = parse(hebrew_recipe);
    println!("{}\n", serde_json::to_string_pretty(&recipe)?);

    // Example 2: English recipe with no headers at all
    println!("🧁 Example 2: English Recipe, Positional Fallback");
    println!("-------------------------------------------------");

    let english_recipe = "Classic Pancakes\n\
                          - 2 cups flour\n\
                          - 1 tbsp sugar\n\
                          - 1½ cups milk\n\
                          1. Whisk everything together\n\
                          2. Fry until golden";

    let recipe = parse(english_recipe);
    println!("{}\n", serde_json::to_string_pretty(&recipe)?);

    // Example 3: Amount conversion in both directions
    println!("🔢 Example 3: Amount Conversion");
    println!("-------------------------------");

    for raw in ["1 1/4", "½", "1½", "2,5", "3/4"] {
        println!("  \"{}\" -> {}", raw, parse_amount_to_decimal(raw));
    }
    for decimal in [0.5, 1.25, 0.97, 2.0] {
        println!("  {} -> \"{}\"", decimal, format_amount_to_fraction(decimal));
    }

    Ok(())
}
