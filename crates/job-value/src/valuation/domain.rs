use serde::{Deserialize, Serialize};

/// Raw job parameters as a person would enter them into the calculator form.
///
/// Every field carries a default so partially populated requests are filled in
/// the same way the form pre-fills its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobInput {
    pub annual_salary_pre_tax: f64,
    pub work_days_per_week: f64,
    pub annual_leave_days: f64,
    pub public_holidays: f64,
    pub work_hours_per_day: f64,
    pub commute_hours_per_day: f64,
    pub lunch_break_hours_per_day: f64,
    pub work_environment: WorkEnvironment,
    pub gender_environment: GenderEnvironment,
    pub colleague_environment: ColleagueEnvironment,
    pub education: Education,
    /// Starts work early in the morning; applies the early start adjustment.
    pub early_start: bool,
}

impl Default for JobInput {
    fn default() -> Self {
        Self {
            annual_salary_pre_tax: 0.0,
            work_days_per_week: 5.0,
            annual_leave_days: 5.0,
            public_holidays: 11.0,
            work_hours_per_day: 8.0,
            commute_hours_per_day: 1.0,
            lunch_break_hours_per_day: 1.0,
            work_environment: WorkEnvironment::Normal,
            gender_environment: GenderEnvironment::Normal,
            colleague_environment: ColleagueEnvironment::Normal,
            education: Education::Bachelor,
            early_start: false,
        }
    }
}

impl JobInput {
    pub fn with_salary(annual_salary_pre_tax: f64) -> Self {
        Self {
            annual_salary_pre_tax,
            ..Self::default()
        }
    }
}

/// Physical workplace category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum WorkEnvironment {
    /// Factory, construction site, or outdoor work in a remote area.
    Remote,
    Factory,
    #[default]
    Normal,
    /// Central business district or civil service.
    Cbd,
}

impl WorkEnvironment {
    pub const ALL: [WorkEnvironment; 4] = [Self::Remote, Self::Factory, Self::Normal, Self::Cbd];

    /// Labels match exactly; anything else falls back to `Normal`.
    pub fn from_label(value: &str) -> Self {
        match value {
            "remote" => Self::Remote,
            "factory" => Self::Factory,
            "cbd" => Self::Cbd,
            _ => Self::Normal,
        }
    }

    pub const fn factor(self) -> f64 {
        match self {
            WorkEnvironment::Remote => 0.8,
            WorkEnvironment::Factory => 0.9,
            WorkEnvironment::Normal => 1.0,
            WorkEnvironment::Cbd => 1.1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WorkEnvironment::Remote => "remote",
            WorkEnvironment::Factory => "factory",
            WorkEnvironment::Normal => "normal",
            WorkEnvironment::Cbd => "cbd",
        }
    }
}

impl From<String> for WorkEnvironment {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

/// How many attractive people of the other sex are around at work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum GenderEnvironment {
    None,
    #[default]
    Normal,
    Many,
}

impl GenderEnvironment {
    pub const ALL: [GenderEnvironment; 3] = [Self::None, Self::Normal, Self::Many];

    /// Labels match exactly; anything else falls back to `Normal`.
    pub fn from_label(value: &str) -> Self {
        match value {
            "none" => Self::None,
            "many" => Self::Many,
            _ => Self::Normal,
        }
    }

    pub const fn factor(self) -> f64 {
        match self {
            GenderEnvironment::None => 0.9,
            GenderEnvironment::Normal => 1.0,
            GenderEnvironment::Many => 1.1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GenderEnvironment::None => "none",
            GenderEnvironment::Normal => "normal",
            GenderEnvironment::Many => "many",
        }
    }
}

impl From<String> for GenderEnvironment {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

/// Subjective quality of the people you work with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ColleagueEnvironment {
    Bad,
    #[default]
    Normal,
    Good,
}

impl ColleagueEnvironment {
    pub const ALL: [ColleagueEnvironment; 3] = [Self::Bad, Self::Normal, Self::Good];

    /// Labels match exactly; anything else falls back to `Normal`.
    pub fn from_label(value: &str) -> Self {
        match value {
            "bad" => Self::Bad,
            "good" => Self::Good,
            _ => Self::Normal,
        }
    }

    pub const fn factor(self) -> f64 {
        match self {
            ColleagueEnvironment::Bad => 0.95,
            ColleagueEnvironment::Normal => 1.0,
            ColleagueEnvironment::Good => 1.05,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ColleagueEnvironment::Bad => "bad",
            ColleagueEnvironment::Normal => "normal",
            ColleagueEnvironment::Good => "good",
        }
    }
}

impl From<String> for ColleagueEnvironment {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

/// Factor shared by every education tier without a dedicated entry in the lookup.
pub const UNLISTED_EDUCATION_FACTOR: f64 = 1.2;

/// Credential tier of the person holding the job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Education {
    /// Vocational college or below.
    Highschool,
    #[default]
    Bachelor,
    /// Bachelor's degree from a 211/985 university.
    Goodbachelor,
    Master,
    Phd,
    /// Any label the lookup does not recognize.
    Unlisted,
}

impl Education {
    pub const ALL: [Education; 5] = [
        Self::Highschool,
        Self::Bachelor,
        Self::Goodbachelor,
        Self::Master,
        Self::Phd,
    ];

    /// Labels match exactly; anything else is `Unlisted`.
    pub fn from_label(value: &str) -> Self {
        match value {
            "highschool" => Self::Highschool,
            "bachelor" => Self::Bachelor,
            "goodbachelor" => Self::Goodbachelor,
            "master" => Self::Master,
            "phd" => Self::Phd,
            _ => Self::Unlisted,
        }
    }

    /// Only four tiers have their own factor; `Goodbachelor` and `Unlisted`
    /// share [`UNLISTED_EDUCATION_FACTOR`].
    pub const fn factor(self) -> f64 {
        match self {
            Education::Highschool => 0.8,
            Education::Bachelor => 1.0,
            Education::Master => 1.6,
            Education::Phd => 2.0,
            Education::Goodbachelor | Education::Unlisted => UNLISTED_EDUCATION_FACTOR,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Education::Highschool => "highschool",
            Education::Bachelor => "bachelor",
            Education::Goodbachelor => "goodbachelor",
            Education::Master => "master",
            Education::Phd => "phd",
            Education::Unlisted => "unlisted",
        }
    }
}

impl From<String> for Education {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}
