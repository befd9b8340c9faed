use super::config::ValuationConfig;
use super::domain::JobInput;
use super::{ScoreBreakdown, ValuationError};

pub(crate) fn environment_factor(input: &JobInput) -> f64 {
    input.work_environment.factor()
        * input.gender_environment.factor()
        * input.colleague_environment.factor()
}

pub(crate) fn working_time(input: &JobInput, config: &ValuationConfig) -> f64 {
    input.work_hours_per_day + input.commute_hours_per_day
        - config.lunch_break_weight * input.lunch_break_hours_per_day
}

pub(crate) fn work_days_per_year(input: &JobInput, config: &ValuationConfig) -> f64 {
    config.weeks_per_year * input.work_days_per_week
        - input.annual_leave_days
        - input.public_holidays
}

/// Runs the formula up to the unrounded value, rejecting degenerate denominators
/// instead of letting NaN or infinity reach classification.
pub(crate) fn score_input(
    input: &JobInput,
    config: &ValuationConfig,
) -> Result<ScoreBreakdown, ValuationError> {
    let environment_factor = environment_factor(input);
    let education_factor = input.education.factor();

    let working_time = working_time(input, config);
    if working_time.is_nan() || working_time <= 0.0 {
        return Err(ValuationError::NonPositiveWorkingTime { working_time });
    }

    let work_days_per_year = work_days_per_year(input, config);
    if work_days_per_year.is_nan() || work_days_per_year <= 0.0 {
        return Err(ValuationError::NonPositiveWorkDays { work_days_per_year });
    }

    let daily_salary = input.annual_salary_pre_tax / work_days_per_year;

    let mut raw_value = (daily_salary * environment_factor)
        / (config.hourly_pay_scale * working_time * education_factor);

    let early_start_factor = if input.early_start {
        raw_value *= config.early_start_factor;
        config.early_start_factor
    } else {
        1.0
    };

    if !raw_value.is_finite() {
        return Err(ValuationError::NonFiniteScore { raw_value });
    }

    Ok(ScoreBreakdown {
        environment_factor,
        education_factor,
        working_time,
        work_days_per_year,
        daily_salary,
        early_start_factor,
        raw_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::domain::{ColleagueEnvironment, GenderEnvironment, WorkEnvironment};

    #[test]
    fn environment_factor_multiplies_all_three_lookups() {
        let input = JobInput {
            work_environment: WorkEnvironment::Cbd,
            gender_environment: GenderEnvironment::Many,
            colleague_environment: ColleagueEnvironment::Bad,
            ..JobInput::default()
        };

        assert_eq!(environment_factor(&input), 1.1 * 1.1 * 0.95);
    }

    #[test]
    fn working_time_half_counts_lunch_break() {
        let input = JobInput {
            work_hours_per_day: 9.0,
            commute_hours_per_day: 2.0,
            lunch_break_hours_per_day: 1.5,
            ..JobInput::default()
        };

        assert_eq!(working_time(&input, &ValuationConfig::default()), 10.25);
    }

    #[test]
    fn default_schedule_has_244_work_days() {
        let days = work_days_per_year(&JobInput::default(), &ValuationConfig::default());
        assert_eq!(days, 244.0);
    }

    #[test]
    fn rejects_zero_working_time() {
        let input = JobInput {
            work_hours_per_day: 0.0,
            commute_hours_per_day: 0.0,
            lunch_break_hours_per_day: 0.0,
            ..JobInput::with_salary(100_000.0)
        };

        match score_input(&input, &ValuationConfig::default()) {
            Err(ValuationError::NonPositiveWorkingTime { working_time }) => {
                assert_eq!(working_time, 0.0);
            }
            other => panic!("expected working time rejection, got {other:?}"),
        }
    }

    #[test]
    fn rejects_nan_fields_before_they_reach_the_score() {
        let input = JobInput {
            annual_salary_pre_tax: f64::NAN,
            ..JobInput::default()
        };

        assert!(matches!(
            score_input(&input, &ValuationConfig::default()),
            Err(ValuationError::NonFiniteScore { .. })
        ));
    }

    #[test]
    fn rejects_infinite_fields() {
        let config = ValuationConfig::default();

        let unbounded_salary = JobInput::with_salary(f64::INFINITY);
        match score_input(&unbounded_salary, &config) {
            Err(ValuationError::NonFiniteScore { raw_value }) => assert!(raw_value.is_infinite()),
            other => panic!("expected non-finite rejection, got {other:?}"),
        }

        let unbounded_schedule = JobInput {
            work_hours_per_day: f64::INFINITY,
            ..JobInput::with_salary(f64::INFINITY)
        };
        match score_input(&unbounded_schedule, &config) {
            Err(ValuationError::NonFiniteScore { raw_value }) => assert!(raw_value.is_nan()),
            other => panic!("expected non-finite rejection, got {other:?}"),
        }
    }

    #[test]
    fn infinite_hours_alone_score_zero() {
        let input = JobInput {
            work_hours_per_day: f64::INFINITY,
            ..JobInput::with_salary(300_000.0)
        };

        let breakdown = score_input(&input, &ValuationConfig::default()).expect("finite score");
        assert_eq!(breakdown.raw_value, 0.0);
    }

    #[test]
    fn early_start_is_neutral_when_unset() {
        let breakdown = score_input(&JobInput::with_salary(300_000.0), &ValuationConfig::default())
            .expect("valid input scores");
        assert_eq!(breakdown.early_start_factor, 1.0);
    }
}
