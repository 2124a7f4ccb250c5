//! Free-text recipe import.
//!
//! [`RecipeTextImporter`] turns one block of pasted or uploaded plain text
//! into a best-effort [`ParsedRecipe`], favoring two recognition strategies
//! in order: explicit section headers ("מצרכים:", "Ingredients:") when the
//! text carries them, and positional heuristics (first line is the title,
//! list-like lines are ingredients) when it does not. The transformation is
//! a single pass with no side effects; it never fails on malformed or
//! unstructured input. The worst case is an all-empty recipe, which
//! callers treat as "nothing recognized".

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info, trace};

use crate::config::ImporterConfig;
use crate::errors::AppResult;
use crate::model::ParsedRecipe;
use crate::patterns::{
    self, build_quantity_unit_regex, match_header, Section, BULLET, DIGIT_RUN, INGREDIENTS_WORD,
    ORDINAL, PREP_HINT, SERVINGS_HINT, STEPS_WORD, TOTAL_HINT,
};

/// Raw section contents accumulated by either recognition strategy, before
/// ingredient lines are parsed into records.
#[derive(Debug, Default)]
struct RawSections {
    title: Option<String>,
    /// (raw line number, line) pairs for the resolved ingredients region
    ingredient_lines: Vec<(usize, String)>,
    step_lines: Vec<String>,
    servings: Option<String>,
    prep_minutes: Option<String>,
    total_minutes: Option<String>,
}

impl RawSections {
    /// Whether the strategy that produced this recognized anything at all.
    fn fired(&self) -> bool {
        self.title.is_some()
            || !self.ingredient_lines.is_empty()
            || !self.step_lines.is_empty()
            || self.servings.is_some()
            || self.prep_minutes.is_some()
            || self.total_minutes.is_some()
    }
}

/// Heuristic free-text recipe importer.
pub struct RecipeTextImporter {
    config: ImporterConfig,
    unit_words: Vec<String>,
    /// Quantity+unit pattern built from the unit vocabulary; makes a line
    /// "look list-like" in the positional fallback
    quantity_unit: Regex,
}

impl Default for RecipeTextImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeTextImporter {
    /// Create an importer with the default configuration and the built-in
    /// Hebrew/English unit vocabulary.
    pub fn new() -> Self {
        Self::from_config(ImporterConfig::default())
    }

    /// Create an importer with custom configuration.
    pub fn with_config(config: ImporterConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: ImporterConfig) -> Self {
        let unit_words = config
            .custom_unit_words
            .clone()
            .unwrap_or_else(patterns::default_unit_words);
        let quantity_unit = build_quantity_unit_regex(&unit_words);
        Self {
            config,
            unit_words,
            quantity_unit,
        }
    }

    pub(crate) fn config(&self) -> &ImporterConfig {
        &self.config
    }

    pub(crate) fn unit_words(&self) -> &[String] {
        &self.unit_words
    }

    /// Parse a block of free text into a structured recipe.
    ///
    /// Pure function of its input: a re-parse produces a new value and no
    /// state is carried between calls. Never fails; with nothing
    /// recognizable the result is all-empty (see
    /// [`ParsedRecipe::is_empty`]).
    pub fn parse(&self, text: &str) -> ParsedRecipe {
        let raw_lines = normalize_lines(text);
        debug!("Parsing recipe text with {} lines", raw_lines.len());

        let mut sections = self.scan_headers(&raw_lines);
        if !sections.fired() {
            debug!("Header strategy found nothing, using positional fallback");
            sections = self.scan_positional(&raw_lines);
        }

        let recipe = self.finish(sections);
        info!(
            "Parsed recipe: title={:?}, {} ingredients, {} steps",
            recipe.title,
            recipe.ingredients.len(),
            recipe.steps.len()
        );
        recipe
    }

    /// Cheap pre-check that a text block has any recipe structure at all:
    /// an explicit header, a bare section word, or a list-like line.
    pub fn has_recipe_structure(&self, text: &str) -> bool {
        normalize_lines(text)
            .iter()
            .any(|line| match_header(line).is_some() || patterns::is_section_word(line) || self.is_list_like(line))
    }

    /// The resolved ingredient-region lines with their raw line numbers,
    /// for preview highlighting and debugging.
    pub fn extract_ingredient_region_lines(&self, text: &str) -> Vec<(usize, String)> {
        let raw_lines = normalize_lines(text);
        let mut sections = self.scan_headers(&raw_lines);
        if !sections.fired() {
            sections = self.scan_positional(&raw_lines);
        }
        sections.ingredient_lines
    }

    /// Explicit-header strategy: a `current_section` cursor walks the raw
    /// lines (blank lines kept for section-break context); every matched
    /// header redirects subsequent lines until the next one.
    fn scan_headers(&self, raw_lines: &[String]) -> RawSections {
        let mut sections = RawSections::default();
        let mut current_section: Option<Section> = None;
        // Metadata headers with no digits on their own line take the first
        // digit run on the immediately following line, blank or not.
        let mut awaiting_value: Option<Section> = None;

        for (line_number, line) in raw_lines.iter().enumerate() {
            if let Some((section, remainder)) = match_header(line) {
                trace!("Header {:?} at line {}: '{}'", section, line_number, line);
                current_section = Some(section);
                awaiting_value = None;
                match section {
                    Section::Title => {
                        if !remainder.is_empty() {
                            sections.title = Some(remainder.to_string());
                        }
                    }
                    Section::Servings | Section::PrepTime | Section::TotalTime => {
                        match first_digit_run(remainder) {
                            Some(value) => set_metadata(&mut sections, section, value),
                            None => awaiting_value = Some(section),
                        }
                    }
                    Section::Ingredients | Section::Steps => {}
                }
                continue;
            }

            if let Some(section) = awaiting_value.take() {
                if let Some(value) = first_digit_run(line) {
                    set_metadata(&mut sections, section, value);
                }
                continue;
            }

            match current_section {
                Some(Section::Title) => {
                    if sections.title.is_none() && !line.is_empty() {
                        sections.title = Some(line.clone());
                    }
                }
                Some(Section::Ingredients) => {
                    if !line.is_empty() {
                        sections.ingredient_lines.push((line_number, line.clone()));
                    }
                }
                Some(Section::Steps) => {
                    if !line.is_empty() {
                        sections.step_lines.push(line.clone());
                    }
                }
                // Metadata sections only ever take their header-adjacent value.
                Some(Section::Servings) | Some(Section::PrepTime) | Some(Section::TotalTime) => {}
                None => {}
            }
        }

        sections
    }

    /// Positional fallback: first non-empty line is the title, ingredients
    /// are delimited by bare section words or recognized as a contiguous
    /// list-like run, steps are whatever follows.
    fn scan_positional(&self, raw_lines: &[String]) -> RawSections {
        let mut sections = RawSections::default();

        let lines: Vec<(usize, &str)> = raw_lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(number, line)| (number, line.as_str()))
            .collect();
        if lines.is_empty() {
            return sections;
        }

        // Title: the first line, unless it is itself a section word, in
        // which case scan a few lines forward for the first line that is
        // not one.
        let title_index = if patterns::is_section_word(lines[0].1) {
            lines
                .iter()
                .enumerate()
                .skip(1)
                .take(self.config.max_title_scan_lines)
                .find(|(_, (_, line))| !patterns::is_section_word(line))
                .map(|(index, _)| index)
        } else {
            Some(0)
        };
        sections.title = title_index.map(|index| lines[index].1.to_string());

        // Ingredients region: between bare section words when present,
        // otherwise the contiguous run of list-like lines after the title.
        let ingredients_header = lines
            .iter()
            .position(|(_, line)| INGREDIENTS_WORD.is_match(line));
        let steps_header = lines.iter().position(|(_, line)| STEPS_WORD.is_match(line));

        let (region, steps_from) = match ingredients_header {
            Some(header) => {
                let steps_header = steps_header.filter(|&steps| steps > header);
                let end = steps_header.unwrap_or(lines.len());
                (Some((header + 1, end)), steps_header.map(|steps| steps + 1))
            }
            None => match self.find_list_like_run(&lines, title_index.map_or(0, |t| t + 1)) {
                Some((start, end)) => (Some((start, end)), Some(end)),
                None => (None, None),
            },
        };

        if let Some((start, end)) = region {
            for &(line_number, line) in &lines[start..end] {
                sections
                    .ingredient_lines
                    .push((line_number, line.to_string()));
            }
        }

        if let Some(from) = steps_from {
            for &(_, line) in lines.iter().skip(from) {
                if !STEPS_WORD.is_match(line) {
                    sections.step_lines.push(line.to_string());
                }
            }
        } else if region.is_none() {
            // No ingredients region at all: steps start at the first
            // ordinal-marked line past the title, if any.
            let search_from = title_index.map_or(0, |t| t + 1);
            if let Some(from) = lines
                .iter()
                .enumerate()
                .skip(search_from)
                .find(|(_, (_, line))| ORDINAL.is_match(line))
                .map(|(index, _)| index)
            {
                for &(_, line) in lines.iter().skip(from) {
                    sections.step_lines.push(line.to_string());
                }
            }
        }

        // Metadata is taken opportunistically from any line, regardless of
        // which section it landed in.
        for &(_, line) in &lines {
            if sections.servings.is_none() {
                if let Some(capture) = SERVINGS_HINT.captures(line) {
                    sections.servings = Some(capture[1].to_string());
                }
            }
            if sections.prep_minutes.is_none() {
                if let Some(capture) = PREP_HINT.captures(line) {
                    sections.prep_minutes = Some(capture[1].to_string());
                }
            }
            if sections.total_minutes.is_none() {
                if let Some(capture) = TOTAL_HINT.captures(line) {
                    sections.total_minutes = Some(capture[1].to_string());
                }
            }
        }

        sections
    }

    /// A line looks list-like when it starts with a bullet, starts with a
    /// digit that is not a step ordinal, or carries a quantity+unit pair.
    fn is_list_like(&self, line: &str) -> bool {
        if ORDINAL.is_match(line) {
            return false;
        }
        BULLET.is_match(line)
            || line.chars().next().is_some_and(|c| c.is_ascii_digit())
            || self.quantity_unit.is_match(line)
    }

    /// The first contiguous run of list-like lines at or after `from`,
    /// as a half-open index range into `lines`.
    fn find_list_like_run(&self, lines: &[(usize, &str)], from: usize) -> Option<(usize, usize)> {
        let start = lines
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, (_, line))| self.is_list_like(line))
            .map(|(index, _)| index)?;
        let mut end = start + 1;
        while end < lines.len() && self.is_list_like(lines[end].1) {
            end += 1;
        }
        Some((start, end))
    }

    /// Turn accumulated raw sections into the final recipe: ingredient
    /// lines parsed into records, step ordinals stripped, order preserved.
    fn finish(&self, sections: RawSections) -> ParsedRecipe {
        let ingredients = sections
            .ingredient_lines
            .iter()
            .filter_map(|(_, line)| self.parse_ingredient_line(line))
            .collect();

        let steps = sections
            .step_lines
            .iter()
            .map(|line| ORDINAL.replace(line, "").trim().to_string())
            .filter(|step| !step.is_empty())
            .collect();

        ParsedRecipe {
            title: sections.title,
            ingredients,
            steps,
            servings: sections.servings,
            prep_minutes: sections.prep_minutes,
            total_minutes: sections.total_minutes,
        }
    }
}

/// Split the text into trimmed lines with tabs and non-breaking spaces
/// normalized to plain spaces. Blank lines are retained; the strategies
/// decide what to do with them.
fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.replace(['\t', '\u{a0}'], " ").trim().to_string())
        .collect()
}

fn first_digit_run(text: &str) -> Option<String> {
    DIGIT_RUN.find(text).map(|found| found.as_str().to_string())
}

fn set_metadata(sections: &mut RawSections, section: Section, value: String) {
    match section {
        Section::Servings => sections.servings = Some(value),
        Section::PrepTime => sections.prep_minutes = Some(value),
        Section::TotalTime => sections.total_minutes = Some(value),
        Section::Title | Section::Ingredients | Section::Steps => {}
    }
}

lazy_static! {
    static ref DEFAULT_IMPORTER: RecipeTextImporter = RecipeTextImporter::new();
}

/// Parse free text with a default importer.
///
/// # Examples
///
/// ```rust
/// use recipe_import::parse;
///
/// let recipe = parse("שם: עוגה\nמצרכים:\n2 כוסות קמח");
/// assert_eq!(recipe.title.as_deref(), Some("עוגה"));
/// assert_eq!(recipe.ingredients.len(), 1);
/// ```
pub fn parse(text: &str) -> ParsedRecipe {
    DEFAULT_IMPORTER.parse(text)
}
