//! Password strength evaluation for the strength meter.
//!
//! The evaluation is advisory only: it drives the meter shown under the
//! new-password field and never blocks a submission.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Minimum length counted towards the score
pub const MIN_LENGTH: usize = 6;

/// Strength bucket derived from the score
#[derive(Debug, Clone, Copy, Default, Serialize_repr, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum StrengthLevel {
    #[default]
    VeryWeak = 0,
    Weak = 1,
    Fair = 2,
    Good = 3,
    Strong = 4,
}

impl StrengthLevel {
    fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::VeryWeak,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Fair,
            3 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }
}

/// A single rule shown in the meter's checklist
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrengthCriterion {
    pub label: String,
    pub met: bool,
}

impl StrengthCriterion {
    fn new(label: &str, met: bool) -> Self {
        Self {
            label: label.to_string(),
            met,
        }
    }
}

/// Result of evaluating a candidate password
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordStrength {
    /// 0 (very weak) to 4 (strong)
    pub score: u8,
    pub level: StrengthLevel,
    pub label: String,
    pub criteria: Vec<StrengthCriterion>,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        let long_enough = password.chars().count() >= MIN_LENGTH;
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

        let score = [long_enough, has_upper && has_lower, has_digit, has_special]
            .into_iter()
            .filter(|met| *met)
            .count() as u8;
        let level = StrengthLevel::from_score(score);

        Self {
            score,
            level,
            label: level.label().to_string(),
            criteria: vec![
                StrengthCriterion::new("At least 6 characters", long_enough),
                StrengthCriterion::new("Contains uppercase letter", has_upper),
                StrengthCriterion::new("Contains lowercase letter", has_lower),
                StrengthCriterion::new("Contains a number", has_digit),
                StrengthCriterion::new("Contains special character", has_special),
            ],
        }
    }
}
