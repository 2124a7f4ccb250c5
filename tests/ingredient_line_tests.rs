#[cfg(test)]
mod tests {
    use recipe_import::{ImporterConfig, IngredientLine, RecipeTextImporter};

    fn create_importer() -> RecipeTextImporter {
        RecipeTextImporter::new()
    }

    fn expect_ingredient(line: IngredientLine) -> (String, String, String, f64, String) {
        match line {
            IngredientLine::Ingredient {
                product_name,
                unit,
                quantity,
                comment,
            } => (product_name, unit, quantity.raw, quantity.decimal, comment),
            IngredientLine::Subtitle { text } => panic!("expected ingredient, got subtitle '{}'", text),
        }
    }

    #[test]
    fn test_basic_hebrew_ingredient() {
        let importer = create_importer();
        let parsed = importer.parse_ingredient_line("2 כוסות קמח").unwrap();
        let (product, unit, raw, decimal, comment) = expect_ingredient(parsed);
        assert_eq!(product, "קמח");
        assert_eq!(unit, "כוסות");
        assert_eq!(raw, "2");
        assert_eq!(decimal, 2.0);
        assert_eq!(comment, "");
    }

    #[test]
    fn test_fraction_quantity() {
        let importer = create_importer();
        let parsed = importer.parse_ingredient_line("1/2 כוס סוכר").unwrap();
        let (product, unit, raw, decimal, _) = expect_ingredient(parsed);
        assert_eq!(product, "סוכר");
        assert_eq!(unit, "כוס");
        assert_eq!(raw, "1/2");
        assert_eq!(decimal, 0.5);
    }

    #[test]
    fn test_glyph_quantity() {
        let importer = create_importer();
        let parsed = importer.parse_ingredient_line("½ כוס חלב").unwrap();
        let (product, unit, _, decimal, _) = expect_ingredient(parsed);
        assert_eq!(product, "חלב");
        assert_eq!(unit, "כוס");
        assert_eq!(decimal, 0.5);
    }

    #[test]
    fn test_parenthesized_remark_becomes_comment() {
        let importer = create_importer();
        let parsed = importer.parse_ingredient_line("1 ביצה (גדולה)").unwrap();
        let (product, unit, _, decimal, comment) = expect_ingredient(parsed);
        assert_eq!(product, "ביצה");
        assert_eq!(unit, "");
        assert_eq!(decimal, 1.0);
        assert_eq!(comment, "גדולה");
    }

    #[test]
    fn test_text_after_comma_becomes_comment() {
        let importer = create_importer();
        let parsed = importer.parse_ingredient_line("2 כפות סוכר, מנופה").unwrap();
        let (product, unit, _, _, comment) = expect_ingredient(parsed);
        assert_eq!(product, "סוכר");
        assert_eq!(unit, "כפות");
        assert_eq!(comment, "מנופה");
    }

    #[test]
    fn test_unit_before_its_own_fraction() {
        let importer = create_importer();
        let parsed = importer.parse_ingredient_line("כוסות 1/4 שמן").unwrap();
        let (product, unit, raw, decimal, _) = expect_ingredient(parsed);
        assert_eq!(product, "שמן");
        assert_eq!(unit, "כוסות");
        assert_eq!(raw, "1/4");
        assert_eq!(decimal, 0.25);
    }

    #[test]
    fn test_unit_with_no_quantity_defaults_to_one() {
        let importer = create_importer();
        let parsed = importer.parse_ingredient_line("כוס קמח").unwrap();
        let (product, unit, raw, decimal, _) = expect_ingredient(parsed);
        assert_eq!(product, "קמח");
        assert_eq!(unit, "כוס");
        assert_eq!(raw, "1");
        assert_eq!(decimal, 1.0);
    }

    #[test]
    fn test_bullet_markers_are_stripped() {
        let importer = create_importer();
        for line in ["- 2 cups flour", "* 2 cups flour", "• 2 cups flour"] {
            let parsed = importer.parse_ingredient_line(line).unwrap();
            let (product, unit, _, decimal, _) = expect_ingredient(parsed);
            assert_eq!(product, "flour");
            assert_eq!(unit, "cups");
            assert_eq!(decimal, 2.0);
        }
    }

    #[test]
    fn test_english_units_match_case_insensitively() {
        let importer = create_importer();
        let parsed = importer.parse_ingredient_line("2 Cups flour").unwrap();
        let (_, unit, _, _, _) = expect_ingredient(parsed);
        assert_eq!(unit, "cups");
    }

    #[test]
    fn test_line_without_quantity_or_unit_is_all_product() {
        let importer = create_importer();
        let parsed = importer.parse_ingredient_line("מלח לפי הטעם").unwrap();
        let (product, unit, raw, decimal, _) = expect_ingredient(parsed);
        assert_eq!(product, "מלח לפי הטעם");
        assert_eq!(unit, "");
        assert_eq!(raw, "");
        assert_eq!(decimal, 0.0);
    }

    #[test]
    fn test_subtitle_line() {
        let importer = create_importer();
        let parsed = importer.parse_ingredient_line("לבצק:").unwrap();
        assert_eq!(
            parsed,
            IngredientLine::Subtitle {
                text: "לבצק".to_string()
            }
        );
    }

    #[test]
    fn test_unparseable_lines_are_dropped() {
        let importer = create_importer();
        assert_eq!(importer.parse_ingredient_line(""), None);
        assert_eq!(importer.parse_ingredient_line("-"), None);
        assert_eq!(importer.parse_ingredient_line("2"), None);
        assert_eq!(importer.parse_ingredient_line("2:"), None);
    }

    #[test]
    fn test_product_name_truncates_at_word_boundary() {
        let config = ImporterConfig {
            max_product_name_length: 10,
            ..Default::default()
        };
        let importer = RecipeTextImporter::with_config(config).unwrap();
        let parsed = importer
            .parse_ingredient_line("2 cups finely ground almonds")
            .unwrap();
        let (product, _, _, _, _) = expect_ingredient(parsed);
        assert_eq!(product, "finely");
    }

    #[test]
    fn test_custom_unit_vocabulary() {
        let config = ImporterConfig {
            custom_unit_words: Some(vec!["pinch".to_string()]),
            ..Default::default()
        };
        let importer = RecipeTextImporter::with_config(config).unwrap();

        let parsed = importer.parse_ingredient_line("2 pinch salt").unwrap();
        let (product, unit, _, _, _) = expect_ingredient(parsed);
        assert_eq!(product, "salt");
        assert_eq!(unit, "pinch");

        // Built-in words are no longer recognized as units
        let parsed = importer.parse_ingredient_line("2 cups flour").unwrap();
        let (product, unit, _, _, _) = expect_ingredient(parsed);
        assert_eq!(product, "cups flour");
        assert_eq!(unit, "");
    }
}
