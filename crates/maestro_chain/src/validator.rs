//! Deterministic syntactic validation of generated output.
//!
//! This is a heuristic smoke test, not a parser: it counts braces and
//! parentheses over extracted code spans and probes embedded JSON. Braces
//! inside string literals and comments are counted like any other character,
//! and a top-level JSON parse failure is logged but never recorded — the
//! check flags embedded-language structure only. Changing either behavior
//! changes observable validation outcomes for callers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static JSON_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)```").expect("valid regex"));
static PHP_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<\?php.*?\?>").expect("valid regex"));
static JS_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:javascript|js)\b\s*(.*?)```").expect("valid regex"));

/// Result of syntactically validating generated output.
///
/// `errors` serializes as absent, not as an empty list, when validation
/// passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ValidationResult {
    /// Whether no structural issues were found
    valid: bool,
    /// Structural issues found, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors: if errors.is_empty() { None } else { Some(errors) },
        }
    }
}

/// Checks generated content for structural well-formedness of embedded code.
///
/// Never calls a model and never fails: malformed input degrades to "no
/// errors found".
///
/// # Examples
///
/// ```
/// use maestro_chain::validator::validate;
///
/// let result = validate("<?php if (true) { echo 1; } ?>");
/// assert!(*result.valid());
///
/// let result = validate("<?php if (true) { echo 1; ?>");
/// assert!(!*result.valid());
/// ```
pub fn validate(content: &str) -> ValidationResult {
    let mut errors = Vec::new();

    // JSON probe: lenient by contract. Unparseable content is not an error.
    if let Some(json) = json_span(content) {
        if let Err(e) = serde_json::from_str::<serde_json::Value>(json) {
            debug!(error = %e, "Embedded JSON did not parse");
        }
    }

    if content.contains("<?php") {
        for span in PHP_SPAN.find_iter(content) {
            if !balanced(span.as_str()) {
                errors.push(
                    "Potential unbalanced braces/parentheses in PHP code".to_string(),
                );
            }
        }
    }

    if content.contains("function") || content.contains("const") || content.contains("let") {
        for capture in JS_BLOCK.captures_iter(content) {
            if let Some(block) = capture.get(1) {
                if !balanced(block.as_str()) {
                    errors.push(
                        "Potential unbalanced braces/parentheses in JavaScript code".to_string(),
                    );
                }
            }
        }
    }

    ValidationResult::from_errors(errors)
}

/// Locates the JSON span to probe: a fenced ```json block, or the whole
/// content when it starts with `{`.
fn json_span(content: &str) -> Option<&str> {
    if let Some(capture) = JSON_BLOCK.captures(content) {
        return capture.get(1).map(|m| m.as_str());
    }
    if content.trim_start().starts_with('{') {
        return Some(content);
    }
    None
}

/// Counts `{`/`}` and `(`/`)` over a span; both pairs must match.
fn balanced(span: &str) -> bool {
    let mut braces: i64 = 0;
    let mut parens: i64 = 0;
    for c in span.chars() {
        match c {
            '{' => braces += 1,
            '}' => braces -= 1,
            '(' => parens += 1,
            ')' => parens -= 1,
            _ => {}
        }
    }
    braces == 0 && parens == 0
}
