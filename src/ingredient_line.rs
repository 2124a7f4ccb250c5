//! Single-line ingredient parsing.
//!
//! Turns one ingredient-region line into a structured record: leading
//! bullet stripped, leading quantity run scanned off and converted, unit
//! word matched against the vocabulary, trailing remark split off as a
//! comment, and whatever tokens remain become the product name.

use tracing::{debug, trace, warn};

use crate::importer::RecipeTextImporter;
use crate::model::{IngredientLine, Quantity};
use crate::patterns::{fraction_for_glyph, BULLET};

/// True for characters that can belong to a leading quantity run.
fn is_amount_char(ch: char) -> bool {
    ch.is_ascii_digit()
        || ch == '/'
        || ch == '.'
        || ch == ','
        || fraction_for_glyph(ch).is_some()
}

/// Scan the leading quantity run off a line.
///
/// Spaces are consumed only when more quantity characters follow, so
/// "1 1/2 כוס" keeps the mixed number together while "1 ביצה" stops after
/// the integer. Returns the raw quantity text and the rest of the line.
fn take_leading_amount(line: &str) -> (&str, &str) {
    let mut end = 0;
    for (idx, ch) in line.char_indices() {
        if is_amount_char(ch) {
            end = idx + ch.len_utf8();
        } else if ch != ' ' {
            break;
        }
    }
    (line[..end].trim_end(), line[end..].trim_start())
}

/// A token shaped like a standalone fraction: "1/4" or a single glyph.
fn is_fraction_shaped(token: &str) -> bool {
    if let Some((numerator, rest)) = token.split_once('/') {
        return !numerator.is_empty()
            && !rest.is_empty()
            && numerator.chars().all(|c| c.is_ascii_digit())
            && rest.chars().all(|c| c.is_ascii_digit());
    }
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if fraction_for_glyph(ch).is_some())
}

/// Split a trailing remark off the line body.
///
/// A trailing parenthesized remark wins; otherwise text after the first
/// comma becomes the comment. Only one comment is extracted.
fn split_comment(body: &str) -> (String, String) {
    let trimmed = body.trim();
    if trimmed.ends_with(')') {
        if let Some(open) = trimmed.rfind('(') {
            let comment = trimmed[open + 1..trimmed.len() - 1].trim();
            if !comment.is_empty() {
                return (trimmed[..open].trim().to_string(), comment.to_string());
            }
        }
    }
    if let Some((name, comment)) = trimmed.split_once(',') {
        return (name.trim().to_string(), comment.trim().to_string());
    }
    (trimmed.to_string(), String::new())
}

impl RecipeTextImporter {
    /// Parse one ingredient-region line into a structured record.
    ///
    /// A line ending with `:` and carrying no quantity is a subtitle (a
    /// section header inside the ingredient list). Lines that end up with
    /// an empty product name (pure numbers, bare bullets) yield `None` and
    /// are dropped from the region, which preserves the non-empty
    /// product-name invariant.
    pub fn parse_ingredient_line(&self, line: &str) -> Option<IngredientLine> {
        let line = BULLET.replace(line, "");
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (raw_amount, rest) = take_leading_amount(line);

        if raw_amount.is_empty() && line.ends_with(':') {
            let text = line[..line.len() - 1].trim();
            trace!("Subtitle line: '{}'", text);
            if text.is_empty() {
                return None;
            }
            return Some(IngredientLine::Subtitle {
                text: text.to_string(),
            });
        }

        let mut quantity = if raw_amount.is_empty() {
            Quantity::empty()
        } else {
            Quantity::new(raw_amount)
        };

        let (body, comment) = if self.config().enable_comment_extraction {
            split_comment(rest)
        } else {
            (rest.trim().to_string(), String::new())
        };

        let mut tokens: Vec<&str> = body.split_whitespace().collect();

        let mut unit = String::new();
        if let Some(&first) = tokens.first() {
            if let Some(matched) = self.match_unit(first) {
                unit = matched;
                tokens.remove(0);

                if quantity.raw.is_empty() {
                    // The unit came first; a fraction-shaped token right
                    // after it is the real quantity ("כוסות 1/4 שמן").
                    if let Some(&next) = tokens.first() {
                        if is_fraction_shaped(next) {
                            quantity = Quantity::new(next);
                            tokens.remove(0);
                        }
                    }
                    if quantity.raw.is_empty() {
                        quantity = Quantity {
                            raw: "1".to_string(),
                            decimal: 1.0,
                        };
                    }
                }
            }
        }

        let product_name = self.clean_product_name(&tokens.join(" "));
        if product_name.is_empty() {
            debug!("Dropping line with no product name: '{}'", line);
            return None;
        }

        Some(IngredientLine::Ingredient {
            product_name,
            unit,
            quantity,
            comment,
        })
    }

    /// Match a token against the unit vocabulary.
    ///
    /// Hebrew entries compare exactly as written; ASCII entries compare
    /// case-insensitively and the stored unit is the vocabulary form.
    fn match_unit(&self, token: &str) -> Option<String> {
        for word in self.unit_words() {
            let matched = if word.is_ascii() {
                token.eq_ignore_ascii_case(word)
            } else {
                token == word.as_str()
            };
            if matched {
                return Some(word.clone());
            }
        }
        None
    }

    /// Strip trailing punctuation and enforce the product-name length limit,
    /// cutting at a word boundary when possible.
    fn clean_product_name(&self, raw_name: &str) -> String {
        let mut name = raw_name
            .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?'))
            .trim()
            .to_string();

        let max_length = self.config().max_product_name_length;
        if name.chars().count() > max_length {
            let truncated: String = name.chars().take(max_length).collect();
            let cut = match truncated.rfind(' ') {
                Some(pos) => truncated[..pos].trim_end().to_string(),
                None => truncated,
            };
            warn!(
                "Product name truncated due to length limit ({} > {}): '{}'",
                raw_name.chars().count(),
                max_length,
                raw_name
            );
            name = cut;
        }

        name
    }
}
