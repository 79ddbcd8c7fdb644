// 📝 Report Generator
// Fixed-template narrative with a tier word picked by score thresholds

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::score::ScoreBreakdown;

/// Score above this lands in the high tier
pub const HIGH_TIER_THRESHOLD: f64 = 1_000_000.0;
/// Score above this (and not above HIGH_TIER_THRESHOLD) lands in the mid tier
pub const MID_TIER_THRESHOLD: f64 = 500_000.0;

// ============================================================================
// TIERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    /// Strictly-greater thresholds: 500,000 is Low, 1,000,000 is Mid
    pub fn classify(score: f64) -> Self {
        if score > HIGH_TIER_THRESHOLD {
            Tier::High
        } else if score > MID_TIER_THRESHOLD {
            Tier::Mid
        } else {
            Tier::Low
        }
    }

    /// Word used in the narrative
    pub fn word(&self, profile: Profile) -> &'static str {
        match (profile, self) {
            (Profile::Context, Tier::High) => "elevated",
            (Profile::Context, Tier::Mid) => "balanced",
            (Profile::Context, Tier::Low) => "moderate",
            (Profile::Financial, Tier::High) => "upper",
            (Profile::Financial, Tier::Mid) => "middle",
            (Profile::Financial, Tier::Low) => "modest",
        }
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format as "$1,234,567.89"; negatives as "-$1,234.00"
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to 0.00 and should not carry a sign
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}

// ============================================================================
// NARRATIVE
// ============================================================================

/// Render the narrative paragraph for a profile
pub fn generate_narrative(
    profile: Profile,
    score: f64,
    indicator: f64,
    total_in: f64,
    total_out: f64,
) -> String {
    let tier = Tier::classify(score).word(profile);

    match profile {
        Profile::Context => format!(
            "The applicant context reflects a total input of {} and adjustments of {}, \
             leading to a composite profile score of {}. With a reference indicator of {}, \
             this places the profile in the {} tier. Reviewers may reference this when \
             generating support outcomes.",
            format_amount(total_in),
            format_amount(total_out),
            format_amount(score),
            format_amount(indicator),
            tier,
        ),
        Profile::Financial => format!(
            "The student comes from a household with combined parental assets of {} \
             and liabilities of {}, resulting in a net worth of {}. With an annual \
             household income of {}, this places the family in the {} socioeconomic \
             bracket. The financial aid committee should consider these factors when \
             determining appropriate assistance for the student's educational expenses.",
            format_amount(total_in),
            format_amount(total_out),
            format_amount(score),
            format_amount(indicator),
            tier,
        ),
    }
}

/// Narrative straight from a breakdown
pub fn narrative_for(profile: Profile, breakdown: &ScoreBreakdown, indicator: f64) -> String {
    generate_narrative(
        profile,
        breakdown.score,
        indicator,
        breakdown.total_in,
        breakdown.total_out,
    )
}

// ============================================================================
// TESTS
// ============================================================================
