use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::valuation::domain::{Education, JobInput};
use crate::valuation::{ValuationConfig, ValuationEngine};

pub(super) const SAMPLE_SALARY: f64 = 300_000.0;

pub(super) fn engine() -> ValuationEngine {
    ValuationEngine::new(ValuationConfig::default()).expect("default config is valid")
}

pub(super) fn sample_input() -> JobInput {
    JobInput::with_salary(SAMPLE_SALARY)
}

pub(super) fn phd_input() -> JobInput {
    JobInput {
        education: Education::Phd,
        ..sample_input()
    }
}

/// Salary that makes the default schedule produce exactly `value` before rounding.
pub(super) fn salary_for(value: f64) -> f64 {
    value * 35.0 * 8.5 * 244.0
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
