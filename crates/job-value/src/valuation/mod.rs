//! Job cost-effectiveness scoring.
//!
//! A job's average daily pay, scaled by its environment, is divided by the
//! effective hours it costs per day scaled by the holder's education. The
//! result is rounded to two decimals and bucketed into one of four tiers.

pub mod calculator;
mod config;
pub mod domain;
mod policy;
pub mod router;
mod rules;

#[cfg(test)]
mod tests;

pub use calculator::{Calculator, FieldChange, FieldChangeError};
pub use config::ValuationConfig;
pub use domain::{
    ColleagueEnvironment, Education, GenderEnvironment, JobInput, WorkEnvironment,
    UNLISTED_EDUCATION_FACTOR,
};
pub use policy::ValueTier;
pub use router::valuation_router;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Stateless evaluator that applies the formula configuration to a job.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    config: ValuationConfig,
}

impl ValuationEngine {
    pub fn new(config: ValuationConfig) -> Result<Self, ValuationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn score(&self, input: &JobInput) -> Result<JobScore, ValuationError> {
        let breakdown = match rules::score_input(input, &self.config) {
            Ok(breakdown) => breakdown,
            Err(err) => {
                warn!(error = %err, "job input rejected");
                return Err(err);
            }
        };

        let value = policy::round_to_cents(breakdown.raw_value);
        let tier = policy::classify(value, &self.config);

        debug!(
            raw_value = breakdown.raw_value,
            value,
            tier = tier.english_label(),
            "job valuation computed"
        );

        Ok(JobScore {
            value,
            tier,
            label: tier.label().to_string(),
            label_en: tier.english_label().to_string(),
            breakdown,
        })
    }
}

/// Scores a job with the default formula constants.
pub fn evaluate(input: &JobInput) -> Result<JobScore, ValuationError> {
    ValuationEngine::default().score(input)
}

/// Intermediate quantities behind a score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub environment_factor: f64,
    pub education_factor: f64,
    pub working_time: f64,
    pub work_days_per_year: f64,
    pub daily_salary: f64,
    pub early_start_factor: f64,
    pub raw_value: f64,
}

/// Evaluation output: the rounded score, its tier, and the trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobScore {
    pub value: f64,
    pub tier: ValueTier,
    pub label: String,
    pub label_en: String,
    pub breakdown: ScoreBreakdown,
}

/// Error raised when a job cannot be scored meaningfully.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValuationError {
    #[error("effective work days per year must be positive, got {work_days_per_year}")]
    NonPositiveWorkDays { work_days_per_year: f64 },
    #[error("effective working time per day must be positive, got {working_time}")]
    NonPositiveWorkingTime { working_time: f64 },
    #[error("score is not a finite number ({raw_value})")]
    NonFiniteScore { raw_value: f64 },
    #[error("invalid valuation config: {0}")]
    InvalidConfig(String),
}
