use chrono::{Local, NaiveDate};
use shipyard_changelog::{RepositoryInfo, VersionRelease};
use shipyard_core::{ReleaseStep, classify, recommend};
use shipyard_project::NpmProject;
use shipyard_version::{bump_version, version_tag};
use tracing::{debug, info, warn};

use super::report::ReleaseReport;
use super::state::{NextStep, ReleaseRunState};
use crate::Result;
use crate::error::OperationError;
use crate::operations::resolve_version_type;
use crate::traits::{
    ChangeSource, ChangelogWriter, CommandRunner, GitProvider, OneTimePasswordInput,
    ReleaseInteraction,
};
use crate::types::{ChangeSummary, Invocation, PublishTarget, ReleaseRequest, RuntimeEnvironment};

const FALLBACK_REMOTE: &str = "origin";

/// Drives the release pipeline: test, build, version, tag, publish, docs.
///
/// Every side effect goes through the injected collaborators, so a dry run
/// is just a different choice of `R` and `C`.
pub struct ReleaseOperation<R, S, C, G, I> {
    runner: R,
    change_source: S,
    changelog_writer: C,
    git_provider: G,
    interaction: I,
    release_date: Option<NaiveDate>,
}

struct RunContext<'a> {
    project: &'a NpmProject,
    environment: &'a RuntimeEnvironment,
    request: &'a ReleaseRequest,
    state: ReleaseRunState,
    report: ReleaseReport,
}

impl<R, S, C, G, I> ReleaseOperation<R, S, C, G, I>
where
    R: CommandRunner,
    S: ChangeSource,
    C: ChangelogWriter,
    G: GitProvider,
    I: ReleaseInteraction,
{
    pub fn new(
        runner: R,
        change_source: S,
        changelog_writer: C,
        git_provider: G,
        interaction: I,
    ) -> Self {
        Self {
            runner,
            change_source,
            changelog_writer,
            git_provider,
            interaction,
            release_date: None,
        }
    }

    /// Date stamped on the changelog section instead of today's.
    #[must_use]
    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }

    /// # Errors
    ///
    /// Configuration and branch problems are returned as-is before any step
    /// runs. A failure inside a step is wrapped in
    /// [`OperationError::StepFailed`], naming the steps still to run.
    pub fn execute(
        &self,
        project: &NpmProject,
        environment: &RuntimeEnvironment,
        request: &ReleaseRequest,
    ) -> Result<ReleaseReport> {
        Self::preflight(environment, request)?;
        self.check_branch(project, environment)?;

        if request.dry_run {
            info!("dry run: external commands and file changes are recorded only");
        }

        let state = ReleaseRunState::new(request.steps.clone(), request.dry_run);
        let report = ReleaseReport::new(project.manifest.version.clone(), state.is_dry_run());
        let mut run = RunContext {
            project,
            environment,
            request,
            state,
            report,
        };

        while let Some(next) = run.state.advance() {
            match next {
                NextStep::Skip(step) => {
                    debug!(%step, "step not selected, skipping");
                    run.report.skipped.push(step);
                }
                NextStep::Run(step) => {
                    info!(%step, "running step");
                    self.run_step(step, &mut run)
                        .map_err(|source| OperationError::StepFailed {
                            step,
                            remaining: run.state.resume_from(step),
                            source: Box::new(source),
                        })?;
                    run.report.completed.push(step);
                }
            }
        }

        run.report.new_version = run.state.new_version().cloned();
        Ok(run.report)
    }

    fn preflight(environment: &RuntimeEnvironment, request: &ReleaseRequest) -> Result<()> {
        if !environment.launched_by_npm() {
            return Err(OperationError::WrongLauncher {
                launcher: environment.launcher.clone(),
            });
        }

        if request.steps.contains(ReleaseStep::Version)
            && request.bump_type.is_none()
            && !environment.interactive
        {
            return Err(OperationError::VersionTypeRequired { ci: environment.ci });
        }

        if request.steps.contains(ReleaseStep::Publish)
            && environment.one_time_password.is_none()
            && !environment.interactive
        {
            return Err(OperationError::OneTimePasswordRequired);
        }

        Ok(())
    }

    fn check_branch(&self, project: &NpmProject, environment: &RuntimeEnvironment) -> Result<()> {
        if environment.ci {
            debug!("CI detected, skipping branch check");
            return Ok(());
        }

        let current = self.git_provider.current_branch(&project.root)?;
        let expected = project.config.release_branch();
        if current != expected {
            return Err(OperationError::WrongBranch {
                current,
                expected: expected.to_string(),
            });
        }
        Ok(())
    }

    fn run_step(&self, step: ReleaseStep, run: &mut RunContext<'_>) -> Result<()> {
        let project = run.project;
        let root = &project.root;
        match step {
            ReleaseStep::Test => self.runner.run(root, &Invocation::npm().arg("test")),
            ReleaseStep::Build => self.runner.run(
                root,
                &Invocation::npm()
                    .arg("run")
                    .arg(project.config.build_script()),
            ),
            ReleaseStep::Version => self.run_version(run),
            ReleaseStep::Tag => self.runner.run(
                root,
                &Invocation::git()
                    .arg("push")
                    .arg(project.config.remote())
                    .arg("--tags"),
            ),
            ReleaseStep::Publish => self.run_publish(run),
            ReleaseStep::Docs => self.runner.run(
                root,
                &Invocation::npm()
                    .arg("run")
                    .arg(project.config.docs_script()),
            ),
        }
    }

    fn run_version(&self, run: &mut RunContext<'_>) -> Result<()> {
        let project = run.project;
        let config = &project.config;
        let root = &project.root;

        let collected = self.change_source.collect(&project.fragments_dir())?;
        let classification = classify(collected.changes)?;
        if classification.is_empty() {
            warn!(
                fragments_dir = %project.fragments_dir().display(),
                "no pending changes found"
            );
        }

        let recommendation = recommend(&classification);
        info!(%recommendation, changes = classification.len(), "recommended version type");
        let summary = ChangeSummary::new(&classification, recommendation);

        let resolution = resolve_version_type(
            recommendation,
            run.request.bump_type,
            run.environment,
            || self.interaction.request_version_type(&summary),
        )?;
        let bump_type = resolution.bump_type;
        let previous = &project.manifest.version;
        let new_version = bump_version(previous, bump_type);
        run.state.resolve(bump_type, new_version.clone())?;
        run.report.summary = Some(summary);
        run.report.resolution = Some(resolution);
        info!(%previous, %new_version, "resolved release version");

        for script in config.version_scripts() {
            self.runner.run(
                root,
                &Invocation::npm()
                    .arg("run")
                    .arg(script)
                    .arg("--")
                    .arg(bump_type.as_str()),
            )?;
        }

        let release = VersionRelease::new(new_version.clone(), self.release_date(), classification)
            .with_previous_version(previous.clone());
        let repo_info = self.repository_info(project);
        let written = self.changelog_writer.write_release(
            &project.changelog_path(),
            &release,
            repo_info.as_ref(),
        )?;
        run.report.changelog = Some(written);

        let mut staged = vec![config.changelog_file().display().to_string()];
        if !config.keep_fragments() && !collected.fragments.is_empty() {
            self.changelog_writer
                .remove_fragments(&collected.fragments)?;
            staged.push(config.fragments_dir().display().to_string());
        }

        self.runner.run(
            root,
            &Invocation::git().args(["add", "-A", "--"]).args(staged),
        )?;
        self.runner.run(
            root,
            &Invocation::git()
                .arg("commit")
                .arg("-m")
                .arg(format!("Update changelog for {}", version_tag(&new_version))),
        )?;
        self.runner.run(
            root,
            &Invocation::git()
                .arg("fetch")
                .arg(config.remote())
                .args(["--tags", "--prune", "--prune-tags"]),
        )?;
        self.runner.run(
            root,
            &Invocation::npm().arg("version").arg(bump_type.as_str()),
        )
    }

    fn run_publish(&self, run: &RunContext<'_>) -> Result<()> {
        let target = PublishTarget {
            name: run.project.manifest.name.clone(),
            version: run
                .state
                .new_version()
                .unwrap_or(&run.project.manifest.version)
                .clone(),
        };

        let code = match &run.environment.one_time_password {
            Some(code) => {
                debug!("using one-time password from environment");
                code.clone()
            }
            None => match self.interaction.request_one_time_password(&target)? {
                OneTimePasswordInput::Provided(code) => code,
                OneTimePasswordInput::Cancelled => return Err(OperationError::Cancelled),
            },
        };
        let code = code.trim();
        if code.is_empty() {
            return Err(OperationError::EmptyOneTimePassword);
        }

        info!(%target, "publishing");
        self.runner.run(
            &run.project.root,
            &Invocation::npm().arg("publish").secret_arg("--otp=", code),
        )
    }

    fn release_date(&self) -> NaiveDate {
        self.release_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    fn repository_info(&self, project: &NpmProject) -> Option<RepositoryInfo> {
        let url = project.manifest.repository.clone().or_else(|| {
            [project.config.remote(), FALLBACK_REMOTE]
                .into_iter()
                .find_map(|remote| {
                    self.git_provider
                        .remote_url(&project.root, remote)
                        .ok()
                        .flatten()
                })
        })?;

        match RepositoryInfo::parse(&url) {
            Ok(info) => Some(info),
            Err(error) => {
                warn!(%url, %error, "cannot derive comparison links from repository url");
                None
            }
        }
    }
}
