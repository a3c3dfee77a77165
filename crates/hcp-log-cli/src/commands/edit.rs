use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use hcp_log_application::AppStore;
use hcp_log_core::config::ClientConfig;
use hcp_log_core::interaction::{EditPatch, EditableField, InteractionId};

use super::{print_interaction, submission_error};

#[derive(Args)]
pub struct EditArgs {
    /// Interaction to edit
    #[arg(long)]
    pub interaction: InteractionId,
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
    /// Comma-separated materials
    #[arg(long)]
    pub materials: Option<String>,
    /// Comma-separated samples
    #[arg(long)]
    pub samples: Option<String>,
}

impl EditArgs {
    fn patch(&self) -> EditPatch {
        EditPatch::from_inputs(
            [
                (EditableField::InteractionType, &self.interaction_type),
                (EditableField::Sentiment, &self.sentiment),
                (EditableField::Topics, &self.topics),
                (EditableField::Outcomes, &self.outcomes),
                (EditableField::FollowUpActions, &self.follow_up_actions),
                (EditableField::Attendees, &self.attendees),
                (EditableField::Materials, &self.materials),
                (EditableField::Samples, &self.samples),
            ]
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v))),
        )
    }
}

pub async fn run(config: &ClientConfig, args: EditArgs) -> Result<()> {
    let patch = args.patch();
    if patch.is_empty() {
        bail!("Nothing to edit: pass at least one non-empty field");
    }

    let app = AppStore::from_config(config)?;
    let store = &app.interaction;
    let response = match store.submit_edit(args.interaction, patch).await {
        Ok(response) => response,
        Err(err) => return Err(submission_error(store, err).await),
    };

    if !response.updated {
        println!("{}", "The backend made no changes".yellow());
        return Ok(());
    }
    println!("{} interaction #{}", "Updated".green(), args.interaction);
    if let Some(interaction) = &response.interaction {
        print_interaction(interaction);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: EditArgs,
    }

    #[test]
    fn test_patch_keeps_only_non_blank_flags() {
        let harness = Harness::parse_from([
            "edit",
            "--interaction",
            "7",
            "--topics",
            "  Dosing  ",
            "--outcomes",
            "   ",
        ]);

        let patch = harness.args.patch();
        assert_eq!(harness.args.interaction, 7);
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get(EditableField::Topics), Some("Dosing"));
    }

    #[test]
    fn test_no_flags_yield_empty_patch() {
        let harness = Harness::parse_from(["edit", "--interaction", "7"]);
        assert!(harness.args.patch().is_empty());
    }
}
