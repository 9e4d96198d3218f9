use crate::error::HealthError;
use crate::extract::{extract_metric, is_vacant};
use crate::source::MetricsSource;

/// Outcome of one health evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Healthy,
    Unhealthy,
    EvaluationError,
}

impl Verdict {
    pub fn status_code(&self) -> u16 {
        match self {
            Verdict::Healthy => 200,
            Verdict::Unhealthy => 503,
            Verdict::EvaluationError => 500,
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Verdict::Healthy => "Healthy",
            Verdict::Unhealthy => "Unhealthy",
            Verdict::EvaluationError => "Internal Server Error",
        }
    }
}

/// The metric to look up and the highest value still reported healthy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub metric_name: String,
    pub threshold: i64,
}

impl Criteria {
    pub fn new(metric_name: impl Into<String>, threshold: i64) -> Self {
        Self {
            metric_name: metric_name.into(),
            threshold,
        }
    }
}

/// Judges an already fetched metrics document.
pub fn evaluate(document: &str, criteria: &Criteria) -> Verdict {
    match assess(document, criteria) {
        Ok(verdict) => verdict,
        Err(err) => {
            ::log::error!("{}", err);
            Verdict::EvaluationError
        }
    }
}

/// Runs a full cycle: one fetch from `source`, then `evaluate`. Nothing is
/// retried or cached between calls.
pub async fn check(source: &dyn MetricsSource, criteria: &Criteria) -> Verdict {
    match source.fetch().await {
        Ok(document) => evaluate(&document, criteria),
        Err(err) => {
            ::log::error!("{}", err);
            Verdict::EvaluationError
        }
    }
}

fn assess(document: &str, criteria: &Criteria) -> Result<Verdict, HealthError> {
    if is_vacant(document) {
        ::log::info!(
            "Metrics endpoint returned null or empty response, assuming healthy"
        );
        return Ok(Verdict::Healthy);
    }

    let value = extract_metric(document, &criteria.metric_name)?;

    ::log::debug!(
        "{} = {} (threshold {})",
        criteria.metric_name,
        value,
        criteria.threshold
    );

    if value <= criteria.threshold {
        Ok(Verdict::Healthy)
    } else {
        ::log::warn!(
            "{} is {}, above threshold {}",
            criteria.metric_name,
            value,
            criteria.threshold
        );
        Ok(Verdict::Unhealthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(&'static str);

    #[async_trait::async_trait]
    impl MetricsSource for FixedSource {
        async fn fetch(&self) -> Result<String, HealthError> {
            Ok(self.0.to_string())
        }
    }

    fn tgi(threshold: i64) -> Criteria {
        Criteria::new("tgi_queue_size", threshold)
    }

    #[test]
    fn test_below_and_above_threshold() {
        assert_eq!(evaluate("tgi_queue_size 5", &tgi(10)), Verdict::Healthy);
        assert_eq!(evaluate("tgi_queue_size 15", &tgi(10)), Verdict::Unhealthy);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(evaluate("tgi_queue_size 10", &tgi(10)), Verdict::Healthy);
        assert_eq!(evaluate("tgi_queue_size 11", &tgi(10)), Verdict::Unhealthy);
    }

    #[test]
    fn test_vacant_document_is_healthy_for_any_criteria() {
        for criteria in [tgi(-5), tgi(0), Criteria::new("anything", 1)] {
            assert_eq!(evaluate("", &criteria), Verdict::Healthy);
            assert_eq!(evaluate("null", &criteria), Verdict::Healthy);
        }
    }

    #[test]
    fn test_configured_metric_name() {
        let criteria = Criteria::new("some_metric", 5);
        assert_eq!(evaluate("some_metric 3", &criteria), Verdict::Healthy);
        assert_eq!(evaluate("some_metric 7", &criteria), Verdict::Unhealthy);
    }

    #[test]
    fn test_extraction_failures_are_errors() {
        assert_eq!(
            evaluate("other_metric 1", &tgi(10)),
            Verdict::EvaluationError
        );
        assert_eq!(
            evaluate("tgi_queue_size a b c", &tgi(10)),
            Verdict::EvaluationError
        );
        assert_eq!(
            evaluate("tgi_queue_size many", &tgi(10)),
            Verdict::EvaluationError
        );
    }

    #[test]
    fn test_uppercase_sample_matches() {
        assert_eq!(evaluate("TGI_QUEUE_SIZE 5", &tgi(10)), Verdict::Healthy);
    }

    #[test]
    fn test_verdict_response_mapping() {
        assert_eq!(Verdict::Healthy.status_code(), 200);
        assert_eq!(Verdict::Healthy.body(), "Healthy");
        assert_eq!(Verdict::Unhealthy.status_code(), 503);
        assert_eq!(Verdict::Unhealthy.body(), "Unhealthy");
        assert_eq!(Verdict::EvaluationError.status_code(), 500);
        assert_eq!(Verdict::EvaluationError.body(), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_check_uses_fetched_document() {
        let source = FixedSource("# TYPE tgi_queue_size gauge\ntgi_queue_size 3\n");
        assert_eq!(check(&source, &tgi(2)).await, Verdict::Unhealthy);
        assert_eq!(check(&source, &tgi(3)).await, Verdict::Healthy);
    }
}
