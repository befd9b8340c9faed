use serde::{Deserialize, Serialize};

use super::ValuationError;

/// Formula constants and tier thresholds used by the valuation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    pub weeks_per_year: f64,
    /// Divisor that normalizes daily pay per effective hour onto the score scale.
    pub hourly_pay_scale: f64,
    /// Share of the lunch break subtracted from the effective working time.
    pub lunch_break_weight: f64,
    pub early_start_factor: f64,
    pub average_threshold: f64,
    pub good_threshold: f64,
    pub great_threshold: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            weeks_per_year: 52.0,
            hourly_pay_scale: 35.0,
            lunch_break_weight: 0.5,
            early_start_factor: 0.95,
            average_threshold: 0.8,
            good_threshold: 1.5,
            great_threshold: 2.0,
        }
    }
}

impl ValuationConfig {
    pub fn validate(&self) -> Result<(), ValuationError> {
        let constants = [
            ("weeks_per_year", self.weeks_per_year),
            ("hourly_pay_scale", self.hourly_pay_scale),
            ("early_start_factor", self.early_start_factor),
        ];
        for (name, value) in constants {
            if !(value.is_finite() && value > 0.0) {
                return Err(ValuationError::InvalidConfig(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }

        if !self.lunch_break_weight.is_finite() {
            return Err(ValuationError::InvalidConfig(
                "lunch_break_weight must be finite".to_string(),
            ));
        }

        let thresholds = [
            self.average_threshold,
            self.good_threshold,
            self.great_threshold,
        ];
        if thresholds.iter().any(|value| !value.is_finite()) {
            return Err(ValuationError::InvalidConfig(
                "tier thresholds must be finite".to_string(),
            ));
        }
        if !(self.average_threshold < self.good_threshold
            && self.good_threshold < self.great_threshold)
        {
            return Err(ValuationError::InvalidConfig(format!(
                "tier thresholds must ascend strictly, got {:.2} / {:.2} / {:.2}",
                self.average_threshold, self.good_threshold, self.great_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ValuationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_thresholds_out_of_order() {
        let config = ValuationConfig {
            good_threshold: 2.5,
            ..ValuationConfig::default()
        };

        match config.validate() {
            Err(ValuationError::InvalidConfig(message)) => {
                assert!(message.contains("ascend"), "unexpected message: {message}");
            }
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_pay_scale() {
        let config = ValuationConfig {
            hourly_pay_scale: 0.0,
            ..ValuationConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ValuationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: ValuationConfig =
            serde_json::from_str(r#"{ "early_start_factor": 0.9 }"#).expect("config parses");

        assert_eq!(config.early_start_factor, 0.9);
        assert_eq!(config.weeks_per_year, 52.0);
        assert_eq!(config.great_threshold, 2.0);
    }
}
