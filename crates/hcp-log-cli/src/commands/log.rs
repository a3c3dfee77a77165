use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use hcp_log_application::AppStore;
use hcp_log_core::config::ClientConfig;
use hcp_log_core::hcp::HcpId;
use hcp_log_core::interaction::FormField;

use super::{print_tool_trace, submission_error};

#[derive(Args)]
pub struct LogArgs {
    /// HCP the interaction was with
    #[arg(long)]
    pub hcp: HcpId,
    /// Date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
    /// Time (HH:MM)
    #[arg(long)]
    pub time: Option<String>,
    /// Interaction type (e.g., "Meeting", "Call")
    #[arg(long = "type")]
    pub interaction_type: Option<String>,
    #[arg(long)]
    pub sentiment: Option<String>,
    #[arg(long)]
    pub topics: Option<String>,
    #[arg(long)]
    pub outcomes: Option<String>,
    #[arg(long = "follow-up")]
    pub follow_up_actions: Option<String>,
    #[arg(long)]
    pub attendees: Option<String>,
    /// Material shared (repeatable)
    #[arg(long = "material")]
    pub materials: Vec<String>,
    /// Sample distributed (repeatable)
    #[arg(long = "sample")]
    pub samples: Vec<String>,
    /// Print the backend tool runs after saving
    #[arg(long)]
    pub trace: bool,
}

impl LogArgs {
    fn fields(&self) -> [(FormField, Option<&String>); 8] {
        [
            (FormField::Date, self.date.as_ref()),
            (FormField::Time, self.time.as_ref()),
            (FormField::InteractionType, self.interaction_type.as_ref()),
            (FormField::Sentiment, self.sentiment.as_ref()),
            (FormField::Topics, self.topics.as_ref()),
            (FormField::Outcomes, self.outcomes.as_ref()),
            (FormField::FollowUpActions, self.follow_up_actions.as_ref()),
            (FormField::Attendees, self.attendees.as_ref()),
        ]
    }
}

pub async fn run(config: &ClientConfig, args: LogArgs) -> Result<()> {
    let app = AppStore::from_config(config)?;

    // The form only offers HCPs from the directory.
    app.hcps.load().await?;
    let Some(hcp) = app.hcps.find(args.hcp).await else {
        bail!("Unknown HCP id {}", args.hcp);
    };

    let store = &app.interaction;
    store.set_hcp_id(Some(hcp.id)).await;
    for (field, value) in args.fields() {
        if let Some(value) = value {
            store.set_form_field(field, value.as_str()).await;
        }
    }
    for material in &args.materials {
        store.add_material(material.as_str()).await;
    }
    for sample in &args.samples {
        store.add_sample(sample.as_str()).await;
    }

    let interaction_id = match store.log_form().await {
        Ok(id) => id,
        Err(err) => return Err(submission_error(store, err).await),
    };
    println!(
        "{} interaction #{} with {}",
        "Logged".green(),
        interaction_id,
        hcp.name
    );

    if args.trace {
        store.refresh_tool_trace().await?;
        print_tool_trace(&store.snapshot().await.tool_trace);
    }
    Ok(())
}
