use thiserror::Error;

/// Failure to read a single named sample out of a metrics document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricError {
    #[error("{0} not found in metrics")]
    NotFound(String),

    #[error("invalid {name} line format: {line}")]
    MalformedLine { name: String, line: String },

    #[error("invalid {name} value in line: {line}")]
    Parse { name: String, line: String },
}

/// Anything that stops one health evaluation from reaching a verdict.
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("error fetching metrics: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("error reading metrics: {0}")]
    Read(#[source] reqwest::Error),

    #[error("error extracting metric: {0}")]
    Metric(#[from] MetricError),
}
