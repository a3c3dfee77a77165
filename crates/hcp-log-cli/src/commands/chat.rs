use anyhow::Result;
use clap::Args;
use colored::Colorize;
use hcp_log_application::{AppStore, send_chat};
use hcp_log_core::config::ClientConfig;
use hcp_log_core::hcp::HcpId;

use super::{print_tool_trace, submission_error};

#[derive(Args)]
pub struct ChatArgs {
    /// What happened, in your own words
    pub message: String,
    /// HCP the interaction was with
    #[arg(long)]
    pub hcp: Option<HcpId>,
    /// Print the backend tool runs after the reply
    #[arg(long)]
    pub trace: bool,
}

pub async fn run(config: &ClientConfig, args: ChatArgs) -> Result<()> {
    let app = AppStore::from_config(config)?;
    let store = &app.interaction;

    store.set_hcp_id(args.hcp).await;
    store.clear_tool_trace().await;
    store.set_chat_draft(args.message).await;

    let response = match send_chat(store).await {
        Ok(Some(response)) => response,
        Ok(None) => {
            println!("{}", "Nothing to send".bright_black());
            return Ok(());
        }
        Err(err) => return Err(submission_error(store, err).await),
    };

    let state = store.snapshot().await;
    if let Some(reply) = response.reply.as_deref().filter(|r| !r.trim().is_empty()) {
        for line in reply.lines() {
            println!("{}", line.bright_blue());
        }
    }
    match state.status.last_interaction_id {
        Some(id) => println!("{} interaction #{}", "Logged".green(), id),
        None => println!("{}", "No interaction was stored".yellow()),
    }
    if !state.ai_suggested_followups.is_empty() {
        println!("{}", "Suggested follow-ups:".bright_yellow());
        for followup in &state.ai_suggested_followups {
            println!("  {}", format!("- {followup}").yellow());
        }
    }

    if args.trace {
        store.refresh_tool_trace().await?;
        print_tool_trace(&store.snapshot().await.tool_trace);
    }
    Ok(())
}
