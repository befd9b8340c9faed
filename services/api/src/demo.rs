use crate::infra::parse_category;
use clap::Args;
use job_value::config::AppConfig;
use job_value::error::AppError;
use job_value::valuation::{
    Calculator, ColleagueEnvironment, Education, FieldChange, GenderEnvironment, JobInput,
    JobScore, ValuationEngine, WorkEnvironment,
};

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Annual salary before tax
    #[arg(long)]
    pub(crate) salary: Option<f64>,
    /// Days worked per week (default 5)
    #[arg(long)]
    pub(crate) work_days_per_week: Option<f64>,
    /// Paid annual leave days (default 5)
    #[arg(long)]
    pub(crate) annual_leave_days: Option<f64>,
    /// Public holidays per year (default 11)
    #[arg(long)]
    pub(crate) public_holidays: Option<f64>,
    /// Scheduled hours per working day (default 8)
    #[arg(long)]
    pub(crate) work_hours_per_day: Option<f64>,
    /// Commute hours per day (default 1)
    #[arg(long)]
    pub(crate) commute_hours_per_day: Option<f64>,
    /// Lunch break hours per day, half counted (default 1)
    #[arg(long)]
    pub(crate) lunch_break_hours_per_day: Option<f64>,
    /// remote, factory, normal, or cbd
    #[arg(long, value_parser = parse_category::<WorkEnvironment>)]
    pub(crate) work_environment: Option<WorkEnvironment>,
    /// none, normal, or many
    #[arg(long, value_parser = parse_category::<GenderEnvironment>)]
    pub(crate) gender_environment: Option<GenderEnvironment>,
    /// bad, normal, or good
    #[arg(long, value_parser = parse_category::<ColleagueEnvironment>)]
    pub(crate) colleague_environment: Option<ColleagueEnvironment>,
    /// highschool, bachelor, goodbachelor, master, or phd
    #[arg(long, value_parser = parse_category::<Education>)]
    pub(crate) education: Option<Education>,
    /// Apply the early start adjustment
    #[arg(long)]
    pub(crate) early_start: bool,
    /// Extra field assignments (field=value), applied after the named flags
    #[arg(long = "set", value_parser = FieldChange::parse)]
    pub(crate) changes: Vec<FieldChange>,
    /// Print the score as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    fn field_changes(&self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        let numeric: [(Option<f64>, fn(f64) -> FieldChange); 7] = [
            (self.salary, FieldChange::AnnualSalary),
            (self.work_days_per_week, FieldChange::WorkDaysPerWeek),
            (self.annual_leave_days, FieldChange::AnnualLeaveDays),
            (self.public_holidays, FieldChange::PublicHolidays),
            (self.work_hours_per_day, FieldChange::WorkHoursPerDay),
            (self.commute_hours_per_day, FieldChange::CommuteHoursPerDay),
            (self.lunch_break_hours_per_day, FieldChange::LunchBreakHoursPerDay),
        ];
        for (value, change) in numeric {
            if let Some(value) = value {
                changes.push(change(value));
            }
        }

        if let Some(value) = self.work_environment {
            changes.push(FieldChange::WorkEnvironment(value));
        }
        if let Some(value) = self.gender_environment {
            changes.push(FieldChange::GenderEnvironment(value));
        }
        if let Some(value) = self.colleague_environment {
            changes.push(FieldChange::ColleagueEnvironment(value));
        }
        if let Some(value) = self.education {
            changes.push(FieldChange::Education(value));
        }
        if self.early_start {
            changes.push(FieldChange::EarlyStart(true));
        }

        changes.extend(self.changes.iter().copied());
        changes
    }
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Annual salary before tax used for every row
    #[arg(long, default_value_t = 300_000.0)]
    pub(crate) salary: f64,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let engine = configured_engine()?;
    let mut calculator = Calculator::new(engine);
    let score = calculator.apply_all(args.field_changes())?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&score)
            .map_err(|err| AppError::Io(std::io::Error::from(err)))?;
        println!("{rendered}");
    } else {
        render_score(calculator.input(), &score);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = configured_engine()?;
    let base = JobInput::with_salary(args.salary);

    println!("Job value demo");
    println!(
        "Salary {:.0}, {} days/week, {} h/day, {} h commute",
        base.annual_salary_pre_tax,
        base.work_days_per_week,
        base.work_hours_per_day,
        base.commute_hours_per_day
    );

    println!("\nBy education");
    for education in Education::ALL {
        let input = JobInput {
            education,
            ..base.clone()
        };
        let score = engine.score(&input)?;
        println!("- {}", score_row(education.label(), &score));
    }

    println!("\nBy work environment");
    for work_environment in WorkEnvironment::ALL {
        let input = JobInput {
            work_environment,
            ..base.clone()
        };
        let score = engine.score(&input)?;
        println!("- {}", score_row(work_environment.label(), &score));
    }

    Ok(())
}

fn configured_engine() -> Result<ValuationEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(ValuationEngine::new(config.valuation)?)
}

fn score_row(name: &str, score: &JobScore) -> String {
    format!(
        "{name:<12} {:>6.2} {} ({})",
        score.value, score.label, score.label_en
    )
}

fn render_score(input: &JobInput, score: &JobScore) {
    println!(
        "Job value: {:.2} {} ({})",
        score.value, score.label, score.label_en
    );

    let breakdown = &score.breakdown;
    println!("\nInputs");
    println!("- salary: {:.2}", input.annual_salary_pre_tax);
    println!(
        "- environment: {} / {} / {}",
        input.work_environment.label(),
        input.gender_environment.label(),
        input.colleague_environment.label()
    );
    println!("- education: {}", input.education.label());

    println!("\nBreakdown");
    println!("- work days per year: {}", breakdown.work_days_per_year);
    println!("- daily salary: {:.2}", breakdown.daily_salary);
    println!("- working time per day: {} h", breakdown.working_time);
    println!("- environment factor: {:.4}", breakdown.environment_factor);
    println!("- education factor: {}", breakdown.education_factor);
    if input.early_start {
        println!("- early start factor: {}", breakdown.early_start_factor);
    }
    println!("- unrounded value: {:.4}", breakdown.raw_value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_flags_apply_before_set_assignments() {
        let args = EvaluateArgs {
            salary: Some(300_000.0),
            education: Some(Education::Master),
            changes: vec![FieldChange::Education(Education::Phd)],
            ..EvaluateArgs::default()
        };

        let mut calculator = Calculator::new(ValuationEngine::default());
        let score = calculator
            .apply_all(args.field_changes())
            .expect("valid input scores");

        assert_eq!(calculator.input().education, Education::Phd);
        assert_eq!(score.value, 2.07);
    }

    #[test]
    fn unset_flags_leave_defaults_untouched() {
        let changes = EvaluateArgs::default().field_changes();
        assert!(changes.is_empty());
    }

    #[test]
    fn score_row_shows_both_labels() {
        let score = job_value::evaluate(&JobInput::with_salary(300_000.0)).expect("scores");
        let row = score_row("bachelor", &score);
        assert!(row.contains("4.13"));
        assert!(row.contains("很爽"));
        assert!(row.contains("great"));
    }
}
