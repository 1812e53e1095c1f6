// src/main.rs
use anyhow::{bail, Context, Result};
use health_check_client::{
    config::{self, ClientConfig},
    HealthCheckApi, ProjectCheckRequest,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "health_check_client=info";

const USAGE: &str = "usage: health-check-client [--config <file>] register <app-name> [url]\n       \
                     health-check-client [--config <file>] signal <app-name> <id>";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    // Load configuration
    let config = if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            bail!("--config requires a path\n{}", USAGE);
        }
        let path = args.remove(1);
        args.remove(0);
        info!("Loading configuration from: {}", path);
        config::load_config(&path).await?
    } else {
        ClientConfig::from_env()?
    };

    let client = config.build_client()?;
    info!("Using health-check API at {}", client.host());

    let project = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["register", app_name] => client.add_service(&ProjectCheckRequest::new(*app_name)).await,
        ["register", app_name, url] => {
            client
                .add_service(&ProjectCheckRequest::new(*app_name).with_url(*url))
                .await
        }
        ["signal", app_name, id] => client.add_live_signal(id, app_name).await,
        _ => bail!("{}", USAGE),
    }
    .context("Health-check API call failed")?;

    println!("{}", serde_json::to_string_pretty(&project)?);
    Ok(())
}

/// `RUST_LOG` when set and valid, otherwise the crate at info level.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
