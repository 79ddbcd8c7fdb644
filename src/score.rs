// ➗ Score Calculator
// score = (a_in - a_out) + (b_in - b_out)

use serde::{Deserialize, Serialize};

use crate::extractor::ExtractionResult;

/// ScoreBreakdown - the score plus the totals the report quotes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub total_in: f64,
    pub total_out: f64,
}

impl ScoreBreakdown {
    pub fn compute(fields: &ExtractionResult) -> Self {
        ScoreBreakdown {
            score: (fields.a_in - fields.a_out) + (fields.b_in - fields.b_out),
            total_in: fields.a_in + fields.b_in,
            total_out: fields.a_out + fields.b_out,
        }
    }
}
