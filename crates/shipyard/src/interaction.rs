use console::style;
use dialoguer::{Password, Select};
use shipyard_core::BumpType;
use shipyard_operations::traits::{
    OneTimePasswordInput, ReleaseInteraction, VersionTypeSelection,
};
use shipyard_operations::{ChangeSummary, OperationError, PublishTarget, Result};

const BUMP_CHOICES: [BumpType; 3] = [BumpType::Patch, BumpType::Minor, BumpType::Major];

pub struct TerminalInteraction;

impl ReleaseInteraction for TerminalInteraction {
    fn request_version_type(&self, summary: &ChangeSummary) -> Result<VersionTypeSelection> {
        print_summary(summary);

        let items: Vec<String> = BUMP_CHOICES
            .iter()
            .map(|&bump| choice_label(bump, summary.recommendation))
            .collect();
        let default = BUMP_CHOICES
            .iter()
            .position(|&bump| bump == summary.recommendation)
            .unwrap_or(0);

        let selection = Select::new()
            .with_prompt("Select the version type for this release")
            .items(&items)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)?;

        Ok(match selection.and_then(|index| BUMP_CHOICES.get(index)) {
            Some(&bump) => VersionTypeSelection::Selected(bump),
            None => VersionTypeSelection::Cancelled,
        })
    }

    fn request_one_time_password(&self, target: &PublishTarget) -> Result<OneTimePasswordInput> {
        let code = Password::new()
            .with_prompt(format!("One-time password to publish {target}"))
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)?;

        Ok(OneTimePasswordInput::Provided(code))
    }
}

fn print_summary(summary: &ChangeSummary) {
    eprintln!();
    for line in summary_lines(summary) {
        eprintln!("{line}");
    }
    eprintln!();
}

/// Per-category counts followed by the recommendation.
pub(crate) fn summary_lines(summary: &ChangeSummary) -> Vec<String> {
    let mut lines = vec![style("Pending changes").bold().to_string()];
    if summary.total() == 0 {
        lines.push(format!("  {}", style("none").dim()));
    }
    lines.extend(
        summary
            .counts
            .iter()
            .map(|(category, count)| format!("  {category}: {count}")),
    );
    lines.push(format!(
        "Recommended version type: {}",
        style(summary.recommendation).green().bold()
    ));
    lines
}

fn choice_label(bump: BumpType, recommendation: BumpType) -> String {
    let description = match bump {
        BumpType::Patch => "bug fixes and internal changes",
        BumpType::Minor => "new features",
        BumpType::Major => "breaking changes",
    };
    if bump == recommendation {
        format!("{bump} - {description} (recommended)")
    } else {
        format!("{bump} - {description}")
    }
}

fn prompt_error(err: dialoguer::Error) -> OperationError {
    match err {
        dialoguer::Error::IO(io_err) => OperationError::Prompt(io_err),
    }
}
