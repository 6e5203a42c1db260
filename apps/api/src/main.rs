use api::{config::Config, http, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(telemetry::env_filter()?)
        .init();

    // spin up API
    http::serve(Config::default()).await?;

    Ok(())
}
