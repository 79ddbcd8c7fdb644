// 🔗 Analysis Pipeline
// lines -> five amounts -> score -> narrative

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extractor::{extract_all, split_lines};
use crate::profile::Profile;
use crate::report::narrative_for;
use crate::score::ScoreBreakdown;

/// AnalysisOutcome - what one run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub profile: Profile,
    pub score: f64,
    pub narrative: String,
}

impl AnalysisOutcome {
    /// `{"<result_field>": score}` for the results section
    pub fn result_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(self.profile.result_field().to_string(), serde_json::json!(self.score));
        serde_json::Value::Object(map)
    }

    /// Agent-mode object: score under its result field plus the narrative
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile,
            self.profile.result_field(): self.score,
            "narrative": self.narrative,
        })
    }
}

/// Analyze a document already split into lines
pub fn analyze_lines<S: AsRef<str>>(profile: Profile, lines: &[S]) -> Result<AnalysisOutcome> {
    let fields = extract_all(lines, profile)?;
    let breakdown = ScoreBreakdown::compute(&fields);

    tracing::debug!(
        profile = %fields.profile,
        score = breakdown.score,
        total_in = breakdown.total_in,
        total_out = breakdown.total_out,
        "computed score"
    );

    Ok(AnalysisOutcome {
        profile: fields.profile,
        score: breakdown.score,
        narrative: narrative_for(fields.profile, &breakdown, fields.indicator),
    })
}

/// Analyze raw text (e.g. read from stdin)
pub fn analyze_text(profile: Profile, text: &str) -> Result<AnalysisOutcome> {
    analyze_lines(profile, &split_lines(text))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InsightError;

    const FINANCIAL_DOC: &str = "\
Parent1_Assets: $800,000
Parent1_Liabilities: $150,000
Parent2_Assets: $600,000
Parent2_Liabilities: $100,000
Household_Income: $210,000
";

    #[test]
    fn test_analysis_context() {
        let doc = vec![
            "Profile1_Input1: $500,000",
            "Profile1_Input2: $200,000",
            "Profile2_Input1: $400,000",
            "Profile2_Input2: $150,000",
            "Indicator_A: $250,000",
        ];
        let outcome = analyze_lines(Profile::Context, &doc).unwrap();

        assert_eq!(outcome.score, 550_000.0);
        assert!(outcome.narrative.contains("composite profile score of $550,000"));
        assert!(outcome.narrative.contains("indicator of $250,000"));
        assert!(outcome.narrative.contains("balanced tier"));
    }

    #[test]
    fn test_analysis_financial_text() {
        let outcome = analyze_text(Profile::Financial, FINANCIAL_DOC).unwrap();

        assert_eq!(outcome.score, 1_150_000.0);
        assert!(outcome.narrative.contains("assets of $1,400,000.00"));
        assert!(outcome.narrative.contains("liabilities of $250,000.00"));
        assert!(outcome.narrative.contains("upper socioeconomic bracket"));
    }

    #[test]
    fn test_wrong_profile_fails() {
        let err = analyze_text(Profile::Context, FINANCIAL_DOC).unwrap_err();
        assert!(matches!(err, InsightError::MissingField { .. }));
    }

    #[test]
    fn test_result_json_uses_profile_field() {
        let outcome = analyze_text(Profile::Financial, FINANCIAL_DOC).unwrap();
        assert_eq!(outcome.result_json(), serde_json::json!({ "net_worth": 1_150_000.0 }));

        let agent = outcome.to_json();
        assert_eq!(agent["profile"], "financial");
        assert_eq!(agent["net_worth"], 1_150_000.0);
        assert_eq!(agent["narrative"], outcome.narrative.as_str());
    }
}
