use anyhow::Result;
use hcp_log_application::AppStore;
use hcp_log_core::config::ClientConfig;

use super::print_tool_trace;

pub async fn run(config: &ClientConfig) -> Result<()> {
    let app = AppStore::from_config(config)?;
    app.interaction.refresh_tool_trace().await?;
    print_tool_trace(&app.interaction.snapshot().await.tool_trace);
    Ok(())
}
