use anyhow::{Result, bail};
use colored::Colorize;
use hcp_log_core::config::ClientConfig;
use hcp_log_infrastructure::HttpRemoteApi;

pub async fn run(config: &ClientConfig) -> Result<()> {
    let api = HttpRemoteApi::from_config(config)?;
    if !api.health().await? {
        bail!("Backend at {} answered but is not healthy", api.base_url());
    }
    println!("{} {}", "ok".green(), api.base_url());
    Ok(())
}
