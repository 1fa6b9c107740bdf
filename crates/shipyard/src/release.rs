use console::style;
use shipyard_operations::operations::{ReleaseOperation, ReleaseReport, VersionSource};
use shipyard_operations::providers::{
    ActionLog, DryRunChangelogWriter, DryRunCommandRunner, FileSystemChangeSource,
    FileSystemChangelogWriter, Git2Provider, SystemCommandRunner,
};
use shipyard_operations::traits::{ChangelogWriter, CommandRunner};
use shipyard_operations::{ReleaseRequest, RuntimeEnvironment};
use shipyard_project::NpmProject;

use crate::error::Result;
use crate::interaction::{TerminalInteraction, summary_lines};

pub(crate) fn run(
    project: &NpmProject,
    environment: &RuntimeEnvironment,
    request: &ReleaseRequest,
) -> Result<()> {
    if request.dry_run {
        let log = ActionLog::new();
        let report = execute(
            DryRunCommandRunner::new(log.clone()),
            DryRunChangelogWriter::new(log.clone()),
            project,
            environment,
            request,
        )?;
        print_report(project, &report);
        print_recorded_actions(&log);
    } else {
        let report = execute(
            SystemCommandRunner::new(),
            FileSystemChangelogWriter::new(),
            project,
            environment,
            request,
        )?;
        print_report(project, &report);
    }
    Ok(())
}

fn execute<R, C>(
    runner: R,
    changelog_writer: C,
    project: &NpmProject,
    environment: &RuntimeEnvironment,
    request: &ReleaseRequest,
) -> Result<ReleaseReport>
where
    R: CommandRunner,
    C: ChangelogWriter,
{
    let operation = ReleaseOperation::new(
        runner,
        FileSystemChangeSource::new(),
        changelog_writer,
        Git2Provider::new(),
        TerminalInteraction,
    );
    Ok(operation.execute(project, environment, request)?)
}

fn print_report(project: &NpmProject, report: &ReleaseReport) {
    if let Some(summary) = &report.summary {
        for line in summary_lines(summary) {
            println!("{line}");
        }
    }

    if let Some(resolution) = &report.resolution {
        if let Some(recommended) = resolution.mismatch {
            println!(
                "{} releasing as {} although pending changes suggest {}",
                style("warning:").yellow().bold(),
                resolution.bump_type,
                recommended
            );
        } else if resolution.source == VersionSource::Explicit {
            println!("Version type: {}", resolution.bump_type);
        }
    }

    if let Some(changelog) = &report.changelog {
        let verb = if changelog.created { "Created" } else { "Updated" };
        println!("{verb} {}", changelog.path.display());
    }

    let completed: Vec<String> = report.completed.iter().map(ToString::to_string).collect();
    if completed.is_empty() {
        println!("No release steps ran");
    } else {
        println!("Completed steps: {}", completed.join(", "));
    }

    let name = &project.manifest.name;
    let prefix = if report.dry_run { "[dry run] " } else { "" };
    match &report.new_version {
        Some(version) => println!(
            "{prefix}{} {name} {} -> {}",
            style("Released").green().bold(),
            report.previous_version,
            style(version).green().bold()
        ),
        None => println!("{prefix}{name} remains at {}", report.previous_version),
    }
}

fn print_recorded_actions(log: &ActionLog) {
    let actions = log.actions();
    if actions.is_empty() {
        return;
    }
    println!();
    println!("{}", style("Dry run, nothing was changed. Would have:").bold());
    for action in actions {
        println!("  {action}");
    }
}
