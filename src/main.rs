use ::log::*;

use ::metric_health_check::config::{Config, Settings};
use ::metric_health_check::source::HttpMetricsSource;
use ::metric_health_check::State;

#[tokio::main]
async fn main() -> ::anyhow::Result<()> {
    ::env_logger::Builder::from_env(
        ::env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let config = Config::from_env()?;
    let settings = Settings::from_config(&config)?;

    info!(
        "Checking {} at {} against threshold {}",
        settings.criteria.metric_name,
        settings.metrics_endpoint,
        settings.criteria.threshold
    );

    let source = HttpMetricsSource::new(
        ::reqwest::Client::new(),
        settings.metrics_endpoint.clone(),
    );

    let state = ::std::sync::Arc::new(State::new(
        Box::new(source),
        settings.criteria.clone(),
    ));

    let routes = ::metric_health_check::routes(state);

    info!("Listening on {}", settings.app_port);
    ::warp::serve(routes)
        .run(([0, 0, 0, 0], settings.app_port))
        .await;

    Ok(())
}
