//! Static recognition tables for recipe text import.
//!
//! Header, unit, and fraction recognizers are plain data tables paired with
//! small dispatch functions (keyword to section, glyph to fraction) rather
//! than anything polymorphic. All regexes are compiled once via
//! `lazy_static` and shared across importer instances.

use lazy_static::lazy_static;
use regex::Regex;

/// Recipe section addressed by an explicit header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Title,
    Servings,
    PrepTime,
    TotalTime,
    Ingredients,
    Steps,
}

/// Unicode vulgar-fraction glyphs mapped to their (numerator, denominator).
///
/// Used in both directions: parse-side substitution into ASCII "n/d" tokens
/// and format-side rendering of a reduced fraction back to a single glyph.
pub const FRACTION_GLYPHS: [(char, u32, u32); 15] = [
    ('½', 1, 2),
    ('⅓', 1, 3),
    ('⅔', 2, 3),
    ('¼', 1, 4),
    ('¾', 3, 4),
    ('⅕', 1, 5),
    ('⅖', 2, 5),
    ('⅗', 3, 5),
    ('⅘', 4, 5),
    ('⅙', 1, 6),
    ('⅚', 5, 6),
    ('⅛', 1, 8),
    ('⅜', 3, 8),
    ('⅝', 5, 8),
    ('⅞', 7, 8),
];

/// The glyph characters as a regex character-class body.
pub const GLYPH_CLASS: &str = "½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞";

/// Look up the single-glyph form of a reduced fraction, if one exists.
pub fn glyph_for_fraction(numerator: u32, denominator: u32) -> Option<char> {
    FRACTION_GLYPHS
        .iter()
        .find(|&&(_, num, den)| num == numerator && den == denominator)
        .map(|&(glyph, _, _)| glyph)
}

/// Look up the numeric value of a vulgar-fraction glyph.
pub fn fraction_for_glyph(glyph: char) -> Option<(u32, u32)> {
    FRACTION_GLYPHS
        .iter()
        .find(|&&(g, _, _)| g == glyph)
        .map(|&(_, num, den)| (num, den))
}

/// Default unit vocabulary: Hebrew words as users write them, English words
/// matched case-insensitively.
pub fn default_unit_words() -> Vec<String> {
    const HEBREW: [&str; 12] = [
        "גרם", "כוס", "כוסות", "כף", "כפות", "כפית", "כפיות", "חתיכה", "פרוסה", "יחידה",
        "מ\"ל", "מל",
    ];
    const ENGLISH: [&str; 14] = [
        "g", "gr", "gram", "grams", "kg", "cup", "cups", "tbsp", "tablespoon", "tsp",
        "teaspoon", "ml", "l", "ltr",
    ];
    HEBREW
        .iter()
        .chain(ENGLISH.iter())
        .map(|word| word.to_string())
        .collect()
}

/// Build the quantity+unit detection regex from a unit vocabulary.
///
/// Units are deduplicated, sorted longest-first so "cups" wins over "cup",
/// regex-escaped, and joined into one alternation. The surrounding pattern
/// accepts an integer, decimal, simple fraction, or fraction glyph followed
/// by one of the units, which is what makes a line "look list-like" in the
/// positional fallback strategy.
pub fn build_quantity_unit_regex(unit_words: &[String]) -> Regex {
    let unique: std::collections::HashSet<&str> = unit_words.iter().map(String::as_str).collect();
    let mut sorted: Vec<&str> = unique.into_iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let escaped: Vec<String> = sorted.into_iter().map(regex::escape).collect();
    let units_pattern = escaped.join("|");

    let pattern = format!(
        r"(?i)(?:^|\s)(?:\d+(?:[.,]\d+)?|\d+/\d+|[{}])\s*(?:{})(?:\s|$)",
        GLYPH_CLASS, units_pattern
    );
    Regex::new(&pattern).expect("quantity-unit pattern should be valid")
}

lazy_static! {
    /// Explicit header patterns, anchored at line start and followed by `:`
    /// or `-`. Order matters: total-time keywords are tried before the prep
    /// patterns, which carry the bare `זמן` / `time` catch-alls.
    pub static ref HEADER_PATTERNS: Vec<(Regex, Section)> = vec![
        (
            Regex::new(r"(?i)^(?:שם|title)\s*[:\-]").expect("title header pattern should be valid"),
            Section::Title,
        ),
        (
            Regex::new(r"(?i)^(?:מנות|servings)\s*[:\-]")
                .expect("servings header pattern should be valid"),
            Section::Servings,
        ),
        (
            Regex::new(r"(?i)^(?:מצרכים|מרכיבים|ingredients)\s*[:\-]")
                .expect("ingredients header pattern should be valid"),
            Section::Ingredients,
        ),
        (
            Regex::new(r"(?i)^(?:הוראות|אופן הכנה|instructions|steps)\s*[:\-]")
                .expect("steps header pattern should be valid"),
            Section::Steps,
        ),
        (
            Regex::new(r#"(?i)^(?:סה"כ|total(?:\s*time)?|cook(?:\s*time)?)\s*[:\-]"#)
                .expect("total-time header pattern should be valid"),
            Section::TotalTime,
        ),
        (
            Regex::new(r"(?i)^(?:זמן הכנה|prep(?:\s*time)?|זמן|time)\s*[:\-]")
                .expect("prep-time header pattern should be valid"),
            Section::PrepTime,
        ),
    ];

    /// A bare ingredients-section word, with or without a trailing separator.
    pub static ref INGREDIENTS_WORD: Regex =
        Regex::new(r"(?i)^(?:מצרכים|מרכיבים|ingredients)\s*[:\-]?\s*$")
            .expect("ingredients word pattern should be valid");

    /// A bare steps-section word, with or without a trailing separator.
    pub static ref STEPS_WORD: Regex =
        Regex::new(r"(?i)^(?:הוראות|אופן הכנה|instructions|steps)\s*[:\-]?\s*$")
            .expect("steps word pattern should be valid");

    /// Leading bullet or dash marker on an ingredient line.
    pub static ref BULLET: Regex =
        Regex::new(r"^\s*[-*•]\s*").expect("bullet pattern should be valid");

    /// Leading ordinal marker on a step line: "1. ", "2) ", roman numerals.
    pub static ref ORDINAL: Regex = Regex::new(r"(?i)^\s*(?:\d{1,3}|[ivxlc]{1,5})[.)]\s+")
        .expect("ordinal pattern should be valid");

    /// First run of digits in a metadata value.
    pub static ref DIGIT_RUN: Regex = Regex::new(r"\d+").expect("digit-run pattern should be valid");

    /// Opportunistic metadata hints, usable on any line regardless of section.
    pub static ref SERVINGS_HINT: Regex = Regex::new(r"(?i)(?:servings?|מנות)\D*?(\d+)")
        .expect("servings hint pattern should be valid");
    pub static ref PREP_HINT: Regex = Regex::new(r"(?i)(?:prep|זמן עבודה|הכנה)\D*?(\d+)")
        .expect("prep hint pattern should be valid");
    pub static ref TOTAL_HINT: Regex = Regex::new(r"(?i)(?:cook|total|זמן כולל|סך)\D*?(\d+)")
        .expect("total hint pattern should be valid");
}

/// Match an explicit header at the start of a line.
///
/// Returns the section and the remainder of the line after the separator.
pub fn match_header(line: &str) -> Option<(Section, &str)> {
    for (pattern, section) in HEADER_PATTERNS.iter() {
        if let Some(found) = pattern.find(line) {
            return Some((*section, line[found.end()..].trim()));
        }
    }
    None
}

/// True when the line is nothing but a section word ("מצרכים", "Instructions:").
pub fn is_section_word(line: &str) -> bool {
    INGREDIENTS_WORD.is_match(line) || STEPS_WORD.is_match(line)
}
