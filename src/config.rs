//! Importer configuration.

use crate::errors::{AppError, AppResult};

/// Configuration options for [`crate::RecipeTextImporter`].
#[derive(Debug, Clone)]
pub struct ImporterConfig {
    /// How many lines past a leading section word the fallback strategy
    /// scans when looking for a title
    pub max_title_scan_lines: usize,
    /// Custom unit vocabulary. If None, uses the built-in Hebrew/English words
    pub custom_unit_words: Option<Vec<String>>,
    /// Whether trailing parenthesized remarks and post-comma text are split
    /// off ingredient lines as comments
    pub enable_comment_extraction: bool,
    /// Maximum length for product names in characters (truncated at a word
    /// boundary if longer)
    pub max_product_name_length: usize,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            max_title_scan_lines: 4,
            custom_unit_words: None,
            enable_comment_extraction: true,
            max_product_name_length: 100,
        }
    }
}

impl ImporterConfig {
    /// Validate importer configuration parameters
    pub fn validate(&self) -> AppResult<()> {
        if self.max_title_scan_lines == 0 {
            return Err(AppError::Config(
                "max_title_scan_lines must be greater than 0".to_string(),
            ));
        }

        if self.max_product_name_length == 0 {
            return Err(AppError::Config(
                "max_product_name_length must be greater than 0".to_string(),
            ));
        }

        if let Some(words) = &self.custom_unit_words {
            if words.is_empty() {
                return Err(AppError::Config(
                    "custom_unit_words cannot be empty if provided".to_string(),
                ));
            }
            for (i, word) in words.iter().enumerate() {
                if word.trim().is_empty() {
                    return Err(AppError::Config(format!(
                        "custom_unit_words[{}] cannot be empty",
                        i
                    )));
                }
                if word.chars().any(|c| c.is_control()) {
                    return Err(AppError::Config(format!(
                        "custom_unit_words[{}] '{}' contains control characters",
                        i, word
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importer_config_validation() {
        let mut config = ImporterConfig::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Test invalid max_title_scan_lines
        config.max_title_scan_lines = 0;
        assert!(config.validate().is_err());
        config.max_title_scan_lines = 4;

        // Test invalid max_product_name_length
        config.max_product_name_length = 0;
        assert!(config.validate().is_err());
        config.max_product_name_length = 100;

        // Test empty custom unit vocabulary
        config.custom_unit_words = Some(vec![]);
        assert!(config.validate().is_err());

        // Test blank unit word
        config.custom_unit_words = Some(vec!["כוס".to_string(), "  ".to_string()]);
        assert!(config.validate().is_err());

        // Test control characters in unit word
        config.custom_unit_words = Some(vec!["cup\ntablespoon".to_string()]);
        assert!(config.validate().is_err());

        // Test valid custom vocabulary
        config.custom_unit_words = Some(vec!["cup".to_string(), "כוס".to_string()]);
        assert!(config.validate().is_ok());
    }
}
