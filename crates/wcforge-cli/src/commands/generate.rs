//! Implementation of the `wcforge generate` command.
//!
//! Responsibility: translate CLI arguments into answers (or a wizard run),
//! call the core generator service, and display results. No business logic
//! lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use wcforge_adapters::{BuiltinTemplates, CommandInstaller, LocalFilesystem};
use wcforge_core::{
    application::{GeneratorService, services::GenerateReport},
    domain::{Answers, validate_component_name},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `wcforge generate` command.
///
/// Dispatch sequence:
/// 1. Resolve and vet the destination directory
/// 2. Wire the generator service with the production adapters
/// 3. Either run the wizard, or build answers from flags (`--name` given)
/// 4. Print a summary of what was written, migrated and deleted
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = resolve_destination(&args.dir)?;
    let skip_install = args.skip_install || config.install.skip;

    let service = GeneratorService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinTemplates::new()),
        Box::new(CommandInstaller::new()),
        root,
        skip_install,
    );

    let report = match args.name {
        Some(name) => {
            // Flag-driven run: vet the name here, since no prompt loop will.
            validate_component_name(&name).map_err(|e| CliError::InvalidComponentName {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            debug!(name, "running without the wizard");
            service.execute(Answers {
                name,
                description: args.description.unwrap_or_default(),
                preview: args.preview,
                delete_old: args.delete_old.then_some(true),
            })?
        }
        None => run_wizard(&service, &global)?,
    };

    show_report(&report, skip_install, &output)?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn run_wizard(service: &GeneratorService, _global: &GlobalArgs) -> CliResult<GenerateReport> {
    let prompter = wcforge_adapters::ConsolePrompt::new();
    Ok(service.run(&prompter)?)
}

#[cfg(not(feature = "interactive"))]
fn run_wizard(_service: &GeneratorService, _global: &GlobalArgs) -> CliResult<GenerateReport> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// The destination may be missing (it will be created on first write), but
/// an existing non-directory is rejected up front.
fn resolve_destination(dir: &PathBuf) -> CliResult<PathBuf> {
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::DestinationNotADirectory { path: dir.clone() });
    }
    Ok(dir.clone())
}

fn show_report(
    report: &GenerateReport,
    skip_install: bool,
    output: &OutputManager,
) -> CliResult<()> {
    output.success(&format!("Generated <{}>", report.module_name))?;
    output.print(&format!("  {} file(s) written", report.written.len()))?;
    if report.legacy {
        output.print(&format!(
            "  {} manifest(s) migrated in place",
            report.migrated.len()
        ))?;
    }
    if !report.deleted.is_empty() {
        output.print(&format!(
            "  {} obsolete file(s) deleted",
            report.deleted.len()
        ))?;
    }
    if skip_install {
        output.info("Dependency installation skipped; run npm install yourself")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_destination_is_accepted() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("not-yet-created");
        assert_eq!(resolve_destination(&target).unwrap(), target);
    }

    #[test]
    fn file_destination_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a-file");
        std::fs::write(&file, "x").unwrap();

        let err = resolve_destination(&file).unwrap_err();
        assert!(matches!(err, CliError::DestinationNotADirectory { .. }));
    }
}
