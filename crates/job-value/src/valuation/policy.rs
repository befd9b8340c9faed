use serde::{Deserialize, Serialize};

use super::config::ValuationConfig;

/// Qualitative verdict attached to a rounded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTier {
    Miserable,
    Average,
    Good,
    Great,
}

impl ValueTier {
    pub const fn label(self) -> &'static str {
        match self {
            ValueTier::Miserable => "很惨",
            ValueTier::Average => "一般",
            ValueTier::Good => "不错",
            ValueTier::Great => "很爽",
        }
    }

    pub const fn english_label(self) -> &'static str {
        match self {
            ValueTier::Miserable => "very bad",
            ValueTier::Average => "average",
            ValueTier::Good => "good",
            ValueTier::Great => "great",
        }
    }
}

/// Lower bounds are inclusive: a value equal to a threshold lands in the higher tier.
pub(crate) fn classify(value: f64, config: &ValuationConfig) -> ValueTier {
    if value < config.average_threshold {
        ValueTier::Miserable
    } else if value < config.good_threshold {
        ValueTier::Average
    } else if value < config.great_threshold {
        ValueTier::Good
    } else {
        ValueTier::Great
    }
}

/// Rounds through a two-decimal rendering so the stored value matches what is displayed.
pub(crate) fn round_to_cents(raw: f64) -> f64 {
    format!("{raw:.2}").parse::<f64>().unwrap_or(raw)
}
