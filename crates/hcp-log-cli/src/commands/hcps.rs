use anyhow::{Result, anyhow};
use colored::Colorize;
use hcp_log_application::AppStore;
use hcp_log_core::config::ClientConfig;

pub async fn run(config: &ClientConfig) -> Result<()> {
    let app = AppStore::from_config(config)?;

    if let Err(err) = app.hcps.load().await {
        let directory = app.hcps.snapshot().await;
        return Err(anyhow!(directory.error.unwrap_or_else(|| err.to_string())));
    }

    let directory = app.hcps.snapshot().await;
    if directory.items.is_empty() {
        println!("{}", "No HCPs found".bright_black());
        return Ok(());
    }

    for hcp in &directory.items {
        let details: Vec<&str> = [hcp.specialty.as_deref(), hcp.organization.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if details.is_empty() {
            println!("{:>5}  {}", hcp.id.to_string().bright_cyan(), hcp.name);
        } else {
            println!(
                "{:>5}  {} {}",
                hcp.id.to_string().bright_cyan(),
                hcp.name,
                format!("({})", details.join(", ")).bright_black()
            );
        }
    }
    Ok(())
}
