use dns_proxy::{CPanelTxtStore, Config, DynTxtStore, SharedConfig};
use anyhow::Result;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_PATH: &str = "/etc/dns-proxy.conf";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let config_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = config_init(&config_file)?;
    let txt_store: DynTxtStore = Arc::new(CPanelTxtStore::try_from_config(&config)?);

    tracing::info!("API listening on {}", &config.api_bind_addr);
    let api_server = dns_proxy::api::new(config.clone(), txt_store)?;
    let api_handle = tokio::spawn(api_server);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("quitting from signal");
        },
        Ok(api_res) = api_handle => {
            if let Err(err) = api_res {
                return Err(err.into())
            }
        }
    }
    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dns_proxy=info".into()),
        )
        .init();
}

fn config_init(config_file: &str) -> Result<SharedConfig> {
    let config = Config::try_from_file(config_file)?;
    // The service refuses to start without a bearer token to check requests against.
    config.require_api_key()?;
    tracing::debug!("loaded config from {config_file}");
    Ok(Arc::new(config))
}
