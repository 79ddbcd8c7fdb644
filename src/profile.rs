// 🗂️ Profiles & Labels - Document conventions as data
// Two conventions share one pipeline; each is a closed set of five labels

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SHAPES
// ============================================================================

/// Shape - the numeric pattern a label is matched with
///
/// Side A and side B labels share a shape: `Parent1_Assets` and
/// `Parent2_Assets` are both read with the `Assets:` pattern once the full
/// label has been found on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Input1,
    Input2,
    IndicatorA,
    Assets,
    Liabilities,
    Income,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Input1,
        Shape::Input2,
        Shape::IndicatorA,
        Shape::Assets,
        Shape::Liabilities,
        Shape::Income,
    ];

    /// Text that must directly precede the colon
    pub fn key(&self) -> &'static str {
        match self {
            Shape::Input1 => "Input1",
            Shape::Input2 => "Input2",
            Shape::IndicatorA => "Indicator_A",
            Shape::Assets => "Assets",
            Shape::Liabilities => "Liabilities",
            Shape::Income => "Income",
        }
    }
}

// ============================================================================
// LABELS
// ============================================================================

/// Role - where a label's amount goes in the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    SideAIn,
    SideAOut,
    SideBIn,
    SideBOut,
    Indicator,
}

/// Label - one of the recognized markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    // Context profile
    Profile1Input1,
    Profile1Input2,
    Profile2Input1,
    Profile2Input2,
    IndicatorA,

    // Financial profile
    Parent1Assets,
    Parent1Liabilities,
    Parent2Assets,
    Parent2Liabilities,
    HouseholdIncome,
}

impl Label {
    /// Literal marker as written in documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Profile1Input1 => "Profile1_Input1",
            Label::Profile1Input2 => "Profile1_Input2",
            Label::Profile2Input1 => "Profile2_Input1",
            Label::Profile2Input2 => "Profile2_Input2",
            Label::IndicatorA => "Indicator_A",
            Label::Parent1Assets => "Parent1_Assets",
            Label::Parent1Liabilities => "Parent1_Liabilities",
            Label::Parent2Assets => "Parent2_Assets",
            Label::Parent2Liabilities => "Parent2_Liabilities",
            Label::HouseholdIncome => "Household_Income",
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Label::Profile1Input1 | Label::Profile2Input1 => Shape::Input1,
            Label::Profile1Input2 | Label::Profile2Input2 => Shape::Input2,
            Label::IndicatorA => Shape::IndicatorA,
            Label::Parent1Assets | Label::Parent2Assets => Shape::Assets,
            Label::Parent1Liabilities | Label::Parent2Liabilities => Shape::Liabilities,
            Label::HouseholdIncome => Shape::Income,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Label::Profile1Input1 | Label::Parent1Assets => Role::SideAIn,
            Label::Profile1Input2 | Label::Parent1Liabilities => Role::SideAOut,
            Label::Profile2Input1 | Label::Parent2Assets => Role::SideBIn,
            Label::Profile2Input2 | Label::Parent2Liabilities => Role::SideBOut,
            Label::IndicatorA | Label::HouseholdIncome => Role::Indicator,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PROFILES
// ============================================================================

/// Profile - which document convention is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Applicant context: two profiles with Input1/Input2 plus Indicator_A
    Context,
    /// Financial aid: two parents with assets/liabilities plus household income
    #[default]
    Financial,
}

impl Profile {
    /// Labels in role order: side A in/out, side B in/out, indicator
    pub fn labels(&self) -> [Label; 5] {
        match self {
            Profile::Context => [
                Label::Profile1Input1,
                Label::Profile1Input2,
                Label::Profile2Input1,
                Label::Profile2Input2,
                Label::IndicatorA,
            ],
            Profile::Financial => [
                Label::Parent1Assets,
                Label::Parent1Liabilities,
                Label::Parent2Assets,
                Label::Parent2Liabilities,
                Label::HouseholdIncome,
            ],
        }
    }

    /// Key of the score in JSON output
    pub fn result_field(&self) -> &'static str {
        match self {
            Profile::Context => "profile_score",
            Profile::Financial => "net_worth",
        }
    }

    pub fn results_heading(&self) -> &'static str {
        match self {
            Profile::Context => "Context Summary:",
            Profile::Financial => "Financial Analysis Results:",
        }
    }

    pub fn narrative_heading(&self) -> &'static str {
        match self {
            Profile::Context => "Support Text:",
            Profile::Financial => "Financial Aid Paragraph:",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Context => "context",
            Profile::Financial => "financial",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_in_role_order() {
        for profile in [Profile::Context, Profile::Financial] {
            let roles: Vec<Role> = profile.labels().iter().map(|l| l.role()).collect();
            assert_eq!(
                roles,
                vec![
                    Role::SideAIn,
                    Role::SideAOut,
                    Role::SideBIn,
                    Role::SideBOut,
                    Role::Indicator
                ]
            );
        }
    }

    #[test]
    fn test_sides_share_shape() {
        assert_eq!(Label::Profile1Input1.shape(), Label::Profile2Input1.shape());
        assert_eq!(Label::Parent1Liabilities.shape(), Label::Parent2Liabilities.shape());
        assert_ne!(Label::Parent1Assets.shape(), Label::Parent1Liabilities.shape());
    }

    #[test]
    fn test_label_text_contains_shape_key() {
        for profile in [Profile::Context, Profile::Financial] {
            for label in profile.labels() {
                assert!(
                    label.as_str().ends_with(label.shape().key()),
                    "{} should end with {}",
                    label,
                    label.shape().key()
                );
            }
        }
    }

    #[test]
    fn test_default_profile_is_financial() {
        assert_eq!(Profile::default(), Profile::Financial);
        assert_eq!(Profile::Financial.result_field(), "net_worth");
        assert_eq!(Profile::Context.result_field(), "profile_score");
    }
}
