// 🔎 Field Extractor
// Finds "Label: $1,234" amounts in document lines - first match wins

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{InsightError, Result};
use crate::profile::{Label, Profile, Role, Shape};

// ============================================================================
// CORE TYPES
// ============================================================================

/// LabeledAmount - one amount pulled out of one line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledAmount {
    pub label: Label,
    pub amount: f64,
    /// 1-based line the amount was read from
    pub line_number: usize,
}

/// ExtractionResult - the five amounts a profile needs, all present
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub profile: Profile,
    pub a_in: f64,
    pub a_out: f64,
    pub b_in: f64,
    pub b_out: f64,
    pub indicator: f64,
}

// ============================================================================
// EXTRACTOR
// ============================================================================

/// FieldExtractor - precompiled shape patterns
///
/// Matching is two-level: a line is considered only if it contains the full
/// label text, then the label's shape pattern is searched on that line.
/// Both sides of a profile reuse the same compiled pattern.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    patterns: HashMap<Shape, Regex>,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        let patterns = Shape::ALL
            .iter()
            .map(|shape| {
                // "Assets: $1,250,000" -> "1,250,000"; ASCII digits only
                let pattern = format!(r"{}:\s*\$?([0-9,]+)", regex::escape(shape.key()));
                (*shape, Regex::new(&pattern).expect("shape pattern is a valid regex"))
            })
            .collect();

        FieldExtractor { patterns }
    }

    /// Process-wide instance, compiled on first use
    pub fn shared() -> &'static FieldExtractor {
        static SHARED: OnceLock<FieldExtractor> = OnceLock::new();
        SHARED.get_or_init(FieldExtractor::new)
    }

    /// Find the first amount for `label`
    pub fn extract_value<S: AsRef<str>>(&self, lines: &[S], label: Label) -> Result<LabeledAmount> {
        let pattern = &self.patterns[&label.shape()];

        for (idx, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if !line.contains(label.as_str()) {
                continue;
            }

            let Some(captures) = pattern.captures(line) else {
                tracing::warn!(line = idx + 1, %label, "label present without an amount");
                continue;
            };

            match parse_amount(&captures[1]) {
                Some(amount) => {
                    tracing::debug!(line = idx + 1, %label, amount, "extracted field");
                    return Ok(LabeledAmount {
                        label,
                        amount,
                        line_number: idx + 1,
                    });
                }
                None => {
                    tracing::warn!(line = idx + 1, %label, raw = &captures[1], "unparseable amount");
                }
            }
        }

        Err(InsightError::MissingField { label })
    }

    /// Extract all five labels of a profile; fails on the first one missing
    pub fn extract_all<S: AsRef<str>>(&self, lines: &[S], profile: Profile) -> Result<ExtractionResult> {
        let mut result = ExtractionResult {
            profile,
            a_in: 0.0,
            a_out: 0.0,
            b_in: 0.0,
            b_out: 0.0,
            indicator: 0.0,
        };

        for label in profile.labels() {
            let amount = self.extract_value(lines, label)?.amount;
            let slot = match label.role() {
                Role::SideAIn => &mut result.a_in,
                Role::SideAOut => &mut result.a_out,
                Role::SideBIn => &mut result.b_in,
                Role::SideBOut => &mut result.b_out,
                Role::Indicator => &mut result.indicator,
            };
            *slot = amount;
        }

        Ok(result)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Find the first amount for `label` using the shared extractor
pub fn extract_value<S: AsRef<str>>(lines: &[S], label: Label) -> Result<LabeledAmount> {
    FieldExtractor::shared().extract_value(lines, label)
}

/// Extract a whole profile using the shared extractor
pub fn extract_all<S: AsRef<str>>(lines: &[S], profile: Profile) -> Result<ExtractionResult> {
    FieldExtractor::shared().extract_all(lines, profile)
}

/// Parse "$1,250,000" / "1250000" into a number
///
/// Returns None when nothing numeric is left after stripping separators,
/// or when the digits overflow to infinity.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split raw text into lines at every line boundary
///
/// Boundaries: \n, \r, \r\n, vertical tab, form feed (PDF page breaks),
/// \x1c-\x1e, NEL, U+2028 and U+2029. A trailing boundary does not produce
/// an empty last line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(is_line_boundary) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let width = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    rest[pos..].chars().next().map_or(1, char::len_utf8)
                };
                rest = &rest[pos + width..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn context_doc() -> Vec<&'static str> {
        vec![
            "Profile1_Input1: $500,000",
            "Profile1_Input2: $200,000",
            "Profile2_Input1: $400,000",
            "Profile2_Input2: $150,000",
            "Indicator_A: $250,000",
        ]
    }

    #[test]
    fn test_extract_value_with_separators() {
        let lines = vec!["Profile1_Input1: $1,250,000", "Indicator_A: 85000"];

        let input = extract_value(&lines, Label::Profile1Input1).unwrap();
        assert_eq!(input.amount, 1_250_000.0);
        assert_eq!(input.line_number, 1);

        let indicator = extract_value(&lines, Label::IndicatorA).unwrap();
        assert_eq!(indicator.amount, 85_000.0);
        assert_eq!(indicator.line_number, 2);
    }

    #[test]
    fn test_first_match_wins() {
        let lines = vec![
            "Parent1_Assets: $100",
            "Parent1_Assets: $999",
        ];
        let value = extract_value(&lines, Label::Parent1Assets).unwrap();
        assert_eq!(value.amount, 100.0);
    }

    #[test]
    fn test_sides_are_told_apart_by_label_text() {
        let lines = vec!["Parent2_Assets: $700", "Parent1_Assets: $300"];

        assert_eq!(extract_value(&lines, Label::Parent1Assets).unwrap().amount, 300.0);
        assert_eq!(extract_value(&lines, Label::Parent2Assets).unwrap().amount, 700.0);
    }

    #[test]
    fn test_label_line_without_amount_is_skipped() {
        let lines = vec![
            "Household_Income: pending",
            "Household_Income: $82,000",
        ];
        let value = extract_value(&lines, Label::HouseholdIncome).unwrap();
        assert_eq!(value.amount, 82_000.0);
        assert_eq!(value.line_number, 2);
    }

    #[test]
    fn test_whitespace_after_colon() {
        let lines = vec!["Parent2_Liabilities:     $42,000"];
        let value = extract_value(&lines, Label::Parent2Liabilities).unwrap();
        assert_eq!(value.amount, 42_000.0);
    }

    #[test]
    fn test_missing_label_fails() {
        let lines = vec!["Profile1_Input1: $500,000"];
        let err = extract_value(&lines, Label::IndicatorA).unwrap_err();
        assert!(matches!(err, InsightError::MissingField { label: Label::IndicatorA }));
    }

    #[test]
    fn test_only_separators_is_not_an_amount() {
        let lines = vec!["Indicator_A: ,,,"];
        assert!(extract_value(&lines, Label::IndicatorA).is_err());
    }

    #[test]
    fn test_extract_all_context() {
        let result = extract_all(&context_doc(), Profile::Context).unwrap();
        assert_eq!(result.a_in, 500_000.0);
        assert_eq!(result.a_out, 200_000.0);
        assert_eq!(result.b_in, 400_000.0);
        assert_eq!(result.b_out, 150_000.0);
        assert_eq!(result.indicator, 250_000.0);
    }

    #[test]
    fn test_extract_all_is_all_or_nothing() {
        for skip in 0..5 {
            let lines: Vec<&str> = context_doc()
                .into_iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, l)| l)
                .collect();

            let err = extract_all(&lines, Profile::Context).unwrap_err();
            assert!(matches!(err, InsightError::MissingField { .. }));
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,250,000"), Some(1_250_000.0));
        assert_eq!(parse_amount("1250000"), Some(1_250_000.0));
        assert_eq!(parse_amount(","), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_extract_all_fills_fields_by_role() {
        let lines = vec![
            "Household_Income: $5",
            "Parent2_Liabilities: $4",
            "Parent2_Assets: $3",
            "Parent1_Liabilities: $2",
            "Parent1_Assets: $1",
        ];
        let result = extract_all(&lines, Profile::Financial).unwrap();

        assert_eq!(result.profile, Profile::Financial);
        assert_eq!(
            (result.a_in, result.a_out, result.b_in, result.b_out, result.indicator),
            (1.0, 2.0, 3.0, 4.0, 5.0)
        );
    }

    #[test]
    fn test_non_ascii_digits_are_not_amounts() {
        let lines = vec!["Indicator_A: \u{661}\u{662}\u{663}"];
        let err = extract_value(&lines, Label::IndicatorA).unwrap_err();
        assert!(matches!(err, InsightError::MissingField { .. }));
    }

    #[test]
    fn test_overflowing_amount_is_rejected() {
        let huge = "9".repeat(400);
        assert_eq!(parse_amount(&huge), None);

        let lines = vec![format!("Indicator_A: {}", huge)];
        assert!(extract_value(&lines, Label::IndicatorA).is_err());
    }

    #[test]
    fn test_page_break_separates_same_shape_labels() {
        let text = "Parent1_Assets: $100\x0cParent2_Assets: $700\nParent1_Liabilities: $0\n\
                    Parent2_Liabilities: $0\nHousehold_Income: $1\n";
        let lines = split_lines(text);

        assert_eq!(lines[0], "Parent1_Assets: $100");
        assert_eq!(lines[1], "Parent2_Assets: $700");

        let result = extract_all(&lines, Profile::Financial).unwrap();
        assert_eq!(result.a_in, 100.0);
        assert_eq!(result.b_in, 700.0);
    }

    #[test]
    fn test_split_lines_unicode_boundaries() {
        assert_eq!(
            split_lines("Indicator_A: 1\u{2028}Profile1_Input1: 2"),
            vec!["Indicator_A: 1", "Profile1_Input1: 2"]
        );
        assert_eq!(
            split_lines("a\u{85}b\x0bc\x1dd\u{2029}"),
            vec!["a", "b", "c", "d"]
        );
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }
}
