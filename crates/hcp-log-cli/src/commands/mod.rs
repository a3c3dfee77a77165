pub mod chat;
pub mod edit;
pub mod hcps;
pub mod health;
pub mod interactions;
pub mod log;
pub mod tool_runs;

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use hcp_log_application::InteractionDraftStore;
use hcp_log_core::config::ClientConfig;
use hcp_log_core::error::HcpLogError;
use hcp_log_core::interaction::Interaction;
use hcp_log_core::tool_trace::ToolRun;
use hcp_log_infrastructure::ConfigStorage;
use std::path::Path;

/// Resolves the client configuration: file, then environment, then `--base-url`.
pub fn load_config(path: Option<&Path>, base_url: Option<&str>) -> Result<ClientConfig> {
    let storage = match path {
        Some(path) => ConfigStorage::with_path(path),
        None => ConfigStorage::new().context("Failed to locate config directory")?,
    };
    let mut config = storage
        .load_with_env()
        .with_context(|| format!("Failed to load {}", storage.path().display()))?;

    if let Some(base_url) = base_url {
        config.base_url = base_url.to_string();
    }
    Ok(config)
}

/// Turns a failed submission into the text the store recorded for it.
///
/// Falls back to the error itself when the store rejected the submission
/// before it started.
pub async fn submission_error(store: &InteractionDraftStore, err: HcpLogError) -> anyhow::Error {
    let text = store
        .snapshot()
        .await
        .status
        .error
        .unwrap_or_else(|| err.to_string());
    anyhow!(text)
}

pub fn print_tool_trace(runs: &[ToolRun]) {
    if runs.is_empty() {
        println!("{}", "No tool runs recorded".bright_black());
        return;
    }
    for run in runs {
        let when = run.created_at.as_deref().unwrap_or("-");
        println!("{} {}", run.tool.bright_magenta(), when.bright_black());
        println!("  {}", run.structured_output());
    }
}

pub fn print_interaction(interaction: &Interaction) {
    println!("{}", format!("Interaction #{}", interaction.id).bright_cyan());
    let rows = [
        ("hcp_id", interaction.hcp_id.map(|id| id.to_string())),
        ("type", interaction.interaction_type.clone()),
        ("sentiment", interaction.sentiment.clone()),
        ("topics", interaction.topics.clone()),
        ("outcomes", interaction.outcomes.clone()),
        ("follow_up_actions", interaction.follow_up_actions.clone()),
        ("attendees", interaction.attendees.clone()),
        ("materials", interaction.materials.clone()),
        ("samples", interaction.samples.clone()),
        ("created_at", interaction.created_at.clone()),
        ("updated_at", interaction.updated_at.clone()),
    ];
    for (label, value) in rows {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            println!("  {:<18} {}", label.bright_black(), value);
        }
    }
}
