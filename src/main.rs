use prompt_proxy::{
    server::{self, AppState},
    ProviderProxy, ProxyConfig,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ProxyConfig::from_env()?;
    let proxy = ProviderProxy::from_config(&config)?;

    let app = server::router(AppState::new(&config, proxy));
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        request_timeout_secs = config.request_timeout.as_secs(),
        "Prompt proxy listening on {}",
        config.bind_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();
}
