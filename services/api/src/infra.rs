use metrics_exporter_prometheus::PrometheusHandle;
use std::convert::Infallible;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Category flags accept any label; unknown ones take the lookup's fallback.
pub(crate) fn parse_category<T: From<String>>(raw: &str) -> Result<T, Infallible> {
    Ok(T::from(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_value::valuation::{Education, WorkEnvironment};

    #[test]
    fn category_parser_falls_back_on_unlisted_spellings() {
        let education: Education = parse_category("phd").expect("infallible");
        assert_eq!(education, Education::Phd);

        let education: Education = parse_category("PhD").expect("infallible");
        assert_eq!(education, Education::Unlisted);

        let environment: WorkEnvironment = parse_category("moon base").expect("infallible");
        assert_eq!(environment, WorkEnvironment::Normal);
    }
}
