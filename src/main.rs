use shortlink::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    logging::init(config.env, config.log_level.as_deref());

    tracing::info!(
        env = %config.env,
        version = env!("CARGO_PKG_VERSION"),
        "starting shortlink"
    );
    tracing::debug!("debug messages are enabled");
    config.print_summary();

    server::run(config).await
}
