//! Custom assertions for llmram-specific validation.
//!
//! JSON checks read the `{ badge, content, suggestions }` envelope; text
//! checks are `predicates` so they plug into `assert_cmd`.

use anyhow::{Context, Result};
use predicates::prelude::*;
use serde_json::Value;

/// Tolerance for comparing capacities in billions of parameters.
pub const CAPACITY_TOLERANCE: f64 = 1e-6;

/// Assert that an estimate's `max_params_billions` is within tolerance.
pub fn assert_capacity(json: &Value, expected: f64) -> Result<()> {
    let actual = json["content"]["max_params_billions"]
        .as_f64()
        .context("Expected 'content.max_params_billions' number in JSON")?;

    if (actual - expected).abs() > CAPACITY_TOLERANCE {
        anyhow::bail!("Expected {} billion parameters, got {}", expected, actual);
    }

    Ok(())
}

/// Assert the badge level (`success`, `info`, `warning`, `error`), or its
/// absence when `expected` is `None`.
pub fn assert_badge(json: &Value, expected: Option<&str>) -> Result<()> {
    let actual = json.get("badge").and_then(|b| b["level"].as_str());

    if actual != expected {
        anyhow::bail!("Expected badge {:?}, got {:?}", expected, actual);
    }

    Ok(())
}

/// Names listed under `content.available` in a lookup prompt.
pub fn available_names(json: &Value) -> Result<Vec<String>> {
    let names = json["content"]["available"]
        .as_array()
        .context("Expected 'content.available' array in JSON")?;

    Ok(names
        .iter()
        .filter_map(|n| n.as_str().map(String::from))
        .collect())
}

/// Matches the plain-text estimate sentence.
pub fn estimate_sentence(level: &str, billions: &str) -> impl Predicate<str> {
    predicate::str::contains(format!(
        "With {} quantization, you can run a model with up to {} billion parameters.",
        level, billions
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_capacity() {
        let json = json!({ "content": { "max_params_billions": 25.952 } });

        assert!(assert_capacity(&json, 25.952).is_ok());
        assert!(assert_capacity(&json, 25.95).is_err());
        assert!(assert_capacity(&json!({ "content": {} }), 1.0).is_err());
    }

    #[test]
    fn test_assert_badge() {
        let warned = json!({ "badge": { "level": "warning", "label": "x" }, "content": {} });
        let plain = json!({ "content": {} });

        assert!(assert_badge(&warned, Some("warning")).is_ok());
        assert!(assert_badge(&warned, None).is_err());
        assert!(assert_badge(&plain, None).is_ok());
    }

    #[test]
    fn test_estimate_sentence() {
        let sentence = estimate_sentence("8-bit", "16.00");

        assert!(sentence.eval(
            "With 8-bit quantization, you can run a model with up to 16.00 billion parameters.\n"
        ));
        assert!(!sentence.eval("With 4-bit quantization"));
    }
}
