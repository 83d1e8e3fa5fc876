// HTTP client utilities
use crate::domain::error::ExplorerError;
use crate::infrastructure::config::Config;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Create the shared HTTP client from the directory and proxy settings
pub fn create_client(config: &Config) -> Result<Client, ExplorerError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(config.directory.timeout_secs))
        .user_agent(config.directory.user_agent.as_str());

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}
