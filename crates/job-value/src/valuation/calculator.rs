use super::domain::{ColleagueEnvironment, Education, GenderEnvironment, JobInput, WorkEnvironment};
use super::{JobScore, ValuationEngine, ValuationError};

/// A single edit to one calculator field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldChange {
    AnnualSalary(f64),
    WorkDaysPerWeek(f64),
    AnnualLeaveDays(f64),
    PublicHolidays(f64),
    WorkHoursPerDay(f64),
    CommuteHoursPerDay(f64),
    LunchBreakHoursPerDay(f64),
    WorkEnvironment(WorkEnvironment),
    GenderEnvironment(GenderEnvironment),
    ColleagueEnvironment(ColleagueEnvironment),
    Education(Education),
    EarlyStart(bool),
}

impl FieldChange {
    /// Parses a `field=value` assignment using the `JobInput` field names.
    pub fn parse(raw: &str) -> Result<Self, FieldChangeError> {
        let (field, value) = raw
            .split_once('=')
            .ok_or_else(|| FieldChangeError::MissingValue(raw.trim().to_string()))?;
        let field = field.trim();
        let value = value.trim();

        let number = || {
            value
                .parse::<f64>()
                .map_err(|_| FieldChangeError::InvalidNumber {
                    field: field.to_string(),
                    value: value.to_string(),
                })
        };

        let change = match field {
            "annual_salary_pre_tax" | "salary" => Self::AnnualSalary(number()?),
            "work_days_per_week" => Self::WorkDaysPerWeek(number()?),
            "annual_leave_days" => Self::AnnualLeaveDays(number()?),
            "public_holidays" => Self::PublicHolidays(number()?),
            "work_hours_per_day" => Self::WorkHoursPerDay(number()?),
            "commute_hours_per_day" => Self::CommuteHoursPerDay(number()?),
            "lunch_break_hours_per_day" => Self::LunchBreakHoursPerDay(number()?),
            "work_environment" => Self::WorkEnvironment(WorkEnvironment::from_label(value)),
            "gender_environment" => Self::GenderEnvironment(GenderEnvironment::from_label(value)),
            "colleague_environment" => {
                Self::ColleagueEnvironment(ColleagueEnvironment::from_label(value))
            }
            "education" => Self::Education(Education::from_label(value)),
            "early_start" => match value.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Self::EarlyStart(true),
                "false" | "no" | "0" => Self::EarlyStart(false),
                _ => {
                    return Err(FieldChangeError::InvalidFlag {
                        field: field.to_string(),
                        value: value.to_string(),
                    })
                }
            },
            other => return Err(FieldChangeError::UnknownField(other.to_string())),
        };

        Ok(change)
    }

    fn apply_to(self, input: &mut JobInput) {
        match self {
            FieldChange::AnnualSalary(value) => input.annual_salary_pre_tax = value,
            FieldChange::WorkDaysPerWeek(value) => input.work_days_per_week = value,
            FieldChange::AnnualLeaveDays(value) => input.annual_leave_days = value,
            FieldChange::PublicHolidays(value) => input.public_holidays = value,
            FieldChange::WorkHoursPerDay(value) => input.work_hours_per_day = value,
            FieldChange::CommuteHoursPerDay(value) => input.commute_hours_per_day = value,
            FieldChange::LunchBreakHoursPerDay(value) => input.lunch_break_hours_per_day = value,
            FieldChange::WorkEnvironment(value) => input.work_environment = value,
            FieldChange::GenderEnvironment(value) => input.gender_environment = value,
            FieldChange::ColleagueEnvironment(value) => input.colleague_environment = value,
            FieldChange::Education(value) => input.education = value,
            FieldChange::EarlyStart(value) => input.early_start = value,
        }
    }
}

/// Error raised when a textual field assignment cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldChangeError {
    #[error("expected field=value, got '{0}'")]
    MissingValue(String),
    #[error("unknown job field '{0}'")]
    UnknownField(String),
    #[error("field '{field}' expects a number, got '{value}'")]
    InvalidNumber { field: String, value: String },
    #[error("field '{field}' expects true or false, got '{value}'")]
    InvalidFlag { field: String, value: String },
}

/// Form-style holder of a job input; every change recomputes the score.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    engine: ValuationEngine,
    input: JobInput,
}

impl Calculator {
    pub fn new(engine: ValuationEngine) -> Self {
        Self {
            engine,
            input: JobInput::default(),
        }
    }

    pub fn with_input(engine: ValuationEngine, input: JobInput) -> Self {
        Self { engine, input }
    }

    pub fn input(&self) -> &JobInput {
        &self.input
    }

    pub fn apply(&mut self, change: FieldChange) -> Result<JobScore, ValuationError> {
        change.apply_to(&mut self.input);
        self.score()
    }

    /// Applies a batch of edits as one form submission, scoring once at the end.
    pub fn apply_all<I>(&mut self, changes: I) -> Result<JobScore, ValuationError>
    where
        I: IntoIterator<Item = FieldChange>,
    {
        for change in changes {
            change.apply_to(&mut self.input);
        }
        self.score()
    }

    pub fn score(&self) -> Result<JobScore, ValuationError> {
        self.engine.score(&self.input)
    }
}
