use ::envconfig::Envconfig;

use crate::evaluate::Criteria;

pub const DEFAULT_METRICS_ENDPOINT: &str = "http://localhost:8080/metrics";
pub const DEFAULT_METRIC_NAME: &str = "tgi_queue_size";
pub const DEFAULT_THRESHOLD: i64 = 10;
pub const DEFAULT_APP_PORT: u16 = 8081;

// Numeric values are kept as raw strings so that a bad value falls back to
// its default instead of failing start-up.
#[derive(::envconfig::Envconfig, Debug, Clone)]
pub struct Config {
    #[envconfig(from = "METRICS_ENDPOINT")]
    pub metrics_endpoint: Option<String>,

    #[envconfig(from = "QUEUE_DEPTH_THRESHOLD")]
    pub queue_depth_threshold: Option<String>,

    #[envconfig(from = "METRIC_NAME")]
    pub metric_name: Option<String>,

    #[envconfig(from = "APP_PORT")]
    pub app_port: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ::envconfig::Error> {
        Self::init_from_env()
    }
}

/// Normalized configuration, built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub metrics_endpoint: ::url::Url,
    pub criteria: Criteria,
    pub app_port: u16,
}

impl Settings {
    pub fn from_config(config: &Config) -> ::anyhow::Result<Self> {
        let endpoint = non_blank(config.metrics_endpoint.as_deref())
            .unwrap_or(DEFAULT_METRICS_ENDPOINT);

        let metrics_endpoint = ::url::Url::parse(endpoint).map_err(|e| {
            ::anyhow::anyhow!("Invalid METRICS_ENDPOINT {}: {}", endpoint, e)
        })?;

        let metric_name = non_blank(config.metric_name.as_deref())
            .unwrap_or(DEFAULT_METRIC_NAME);

        Ok(Self {
            metrics_endpoint,
            criteria: Criteria::new(
                metric_name,
                nonzero_or(
                    config.queue_depth_threshold.as_deref(),
                    DEFAULT_THRESHOLD,
                ),
            ),
            app_port: port_or_default(config.app_port.as_deref()),
        })
    }
}

/// Listening port from a raw `APP_PORT` value.
pub fn port_or_default(raw: Option<&str>) -> u16 {
    nonzero_or(raw, DEFAULT_APP_PORT)
}

// Unset, unparsable and zero all count as invalid.
fn nonzero_or<T>(raw: Option<&str>, fallback: T) -> T
where
    T: ::std::str::FromStr + Default + PartialEq,
{
    match raw.map(|value| value.trim().parse::<T>()) {
        Some(Ok(value)) if value != T::default() => value,
        _ => fallback,
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
