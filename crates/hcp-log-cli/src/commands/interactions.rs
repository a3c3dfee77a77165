use anyhow::Result;
use colored::Colorize;
use hcp_log_core::api::RemoteApi;
use hcp_log_core::config::ClientConfig;
use hcp_log_core::interaction::InteractionId;
use hcp_log_infrastructure::HttpRemoteApi;

use super::print_interaction;

pub async fn run(config: &ClientConfig, id: Option<InteractionId>) -> Result<()> {
    let api = HttpRemoteApi::from_config(config)?;

    if let Some(id) = id {
        print_interaction(&api.get_interaction(id).await?);
        return Ok(());
    }

    let interactions = api.list_interactions().await?;
    if interactions.is_empty() {
        println!("{}", "No interactions logged yet".bright_black());
    }
    for interaction in &interactions {
        print_interaction(interaction);
    }
    Ok(())
}
