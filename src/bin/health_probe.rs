//! Container probe for the sidecar itself.
//!
//! Sends one GET to `/health` (or `HEALTH_PATH`) on `HOST:APP_PORT`, prints
//! the status, and exits 0 only on 200. `APP_PORT` follows the server's
//! fallback rule, so the probe and the server agree on the port.
//!
//! Example Docker HEALTHCHECK:
//!   HEALTHCHECK CMD ["/usr/local/bin/health_probe"]

use std::{env, process::exit, time::Duration};

use ::metric_health_check::config::port_or_default;

#[tokio::main]
async fn main() {
    let port = port_or_default(env::var("APP_PORT").ok().as_deref());
    let host = env::var("HOST").unwrap_or_else(|_| "localhost".into());
    let path = env::var("HEALTH_PATH").unwrap_or_else(|_| "/health".into());

    let url = format!("http://{host}:{port}{path}");

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Client error: {err}");
            exit(1);
        }
    };

    match client.get(&url).send().await {
        Ok(resp) if resp.status() == 200 => {
            println!("Health OK: {}", resp.status());
            exit(0);
        }
        Ok(resp) => {
            eprintln!("Unhealthy: {}", resp.status());
            exit(1);
        }
        Err(err) => {
            eprintln!("Request error: {err}");
            exit(1);
        }
    }
}
