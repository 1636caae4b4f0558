//! The generation run, end to end.
//!
//! `GeneratorService` owns the ports and drives one run through its fixed
//! phases: detect the legacy inventory, collect answers, derive tokens,
//! materialize templates, migrate existing manifests, clean up obsolete
//! files, then hand off to the installer. No rollback: a failed write aborts
//! the run and leaves earlier writes in place.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::application::ports::{Filesystem, Installer, Prompter, TemplateSource};
use crate::application::services::migrator::Migrator;
use crate::application::wizard::{Wizard, default_component_name};
use crate::domain::{Answers, CaseMap, LegacyInventory, TokenSet, validate_component_name};
use crate::error::WcforgeResult;

/// A template body and where its rendered form lands, relative to the
/// destination root. Targets may carry `{{token}}` placeholders.
struct TemplateRule {
    source: &'static str,
    target: &'static str,
}

/// Written on every run, legacy or fresh.
const BASE_TEMPLATES: [TemplateRule; 9] = [
    TemplateRule { source: "gen-tsd.json", target: "gen-tsd.json" },
    TemplateRule { source: "polymer.json", target: "polymer.json" },
    TemplateRule { source: "index.html", target: "index.html" },
    TemplateRule { source: "CONTRIBUTING.md", target: "CONTRIBUTING.md" },
    TemplateRule { source: "gitignore", target: ".gitignore" },
    TemplateRule { source: "tasks/ci.js", target: "tasks/ci.js" },
    TemplateRule { source: "wct.conf.json", target: "wct.conf.json" },
    TemplateRule { source: "README.md", target: "README.md" },
    TemplateRule {
        source: "test/component-test.html",
        target: "test/{{moduleName}}-test.html",
    },
];

/// Written only when the destination is not a legacy layout; legacy projects
/// keep their existing manifests and get them migrated instead.
const FRESH_TEMPLATES: [TemplateRule; 5] = [
    TemplateRule { source: "package.json", target: "package.json" },
    TemplateRule { source: "bower.json", target: "bower.json" },
    TemplateRule { source: "test/index.html", target: "test/index.html" },
    TemplateRule { source: "demo/index.html", target: "demo/index.html" },
    TemplateRule { source: "travis.yml", target: ".travis.yml" },
];

/// The component source itself; never overwritten once present.
const COMPONENT_TEMPLATE: TemplateRule = TemplateRule {
    source: "component.html",
    target: "{{moduleName}}.html",
};

/// What one run did, for the CLI to report.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub module_name: String,
    pub legacy: bool,
    /// Files rendered from templates.
    pub written: Vec<PathBuf>,
    /// Existing manifests rewritten in place.
    pub migrated: Vec<PathBuf>,
    /// Obsolete files removed.
    pub deleted: Vec<PathBuf>,
    /// Whether the installer was dispatched (npm, bower).
    pub installed: (bool, bool),
}

/// Orchestrates one generation run over the injected ports.
pub struct GeneratorService {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateSource>,
    installer: Box<dyn Installer>,
    root: PathBuf,
    skip_install: bool,
}

impl GeneratorService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateSource>,
        installer: Box<dyn Installer>,
        root: PathBuf,
        skip_install: bool,
    ) -> Self {
        Self {
            filesystem,
            templates,
            installer,
            root,
            skip_install,
        }
    }

    /// Interactive entry point: ask the wizard's questions, then generate.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn run(&self, prompter: &dyn Prompter) -> WcforgeResult<GenerateReport> {
        let inventory = self.detect_inventory();
        let wizard = Wizard::new(
            self.default_name(),
            self.default_description(),
            &inventory,
        );
        let answers = wizard.run(prompter)?;
        self.generate(answers, inventory)
    }

    /// Non-interactive entry point for pre-collected answers. The name is
    /// validated here since no prompt loop vetted it.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn execute(&self, answers: Answers) -> WcforgeResult<GenerateReport> {
        validate_component_name(&answers.name)?;
        let inventory = self.detect_inventory();
        self.generate(answers, inventory)
    }

    fn generate(
        &self,
        answers: Answers,
        inventory: LegacyInventory,
    ) -> WcforgeResult<GenerateReport> {
        let legacy = inventory.is_legacy();
        let mut case_map = CaseMap::new();
        let tokens = TokenSet::derive(&answers, &mut case_map);
        info!(module = %tokens.module_name, legacy, "generating component project");

        let mut report = GenerateReport {
            module_name: tokens.module_name.clone(),
            legacy,
            ..GenerateReport::default()
        };

        self.materialize(&tokens, legacy, &mut report)?;
        if legacy {
            report.migrated = Migrator::new(self.filesystem.as_ref(), &self.root)
                .migrate(&tokens.module_name, answers.preview)?;
        }
        if answers.wants_delete_old() {
            self.cleanup(&inventory, &mut report)?;
        }
        self.install(legacy, &mut report)?;

        Ok(report)
    }

    // ── phases ────────────────────────────────────────────────────────────

    /// Render the template tiers into the destination.
    fn materialize(
        &self,
        tokens: &TokenSet,
        legacy: bool,
        report: &mut GenerateReport,
    ) -> WcforgeResult<()> {
        for rule in &BASE_TEMPLATES {
            report.written.push(self.render_rule(rule, tokens)?);
        }
        if !legacy {
            for rule in &FRESH_TEMPLATES {
                report.written.push(self.render_rule(rule, tokens)?);
            }
        }

        let component = self.root.join(tokens.render(COMPONENT_TEMPLATE.target));
        if self.filesystem.exists(&component) {
            debug!(path = %component.display(), "component file already exists, keeping it");
        } else {
            report
                .written
                .push(self.render_rule(&COMPONENT_TEMPLATE, tokens)?);
        }
        Ok(())
    }

    fn render_rule(&self, rule: &TemplateRule, tokens: &TokenSet) -> WcforgeResult<PathBuf> {
        let body = self.templates.read(rule.source)?;
        let target = self.root.join(tokens.render(rule.target));
        self.filesystem.write_file(&target, &tokens.render(&body))?;
        debug!(path = %target.display(), "rendered");
        Ok(target)
    }

    /// Remove the files the inventory recorded. The inventory is a snapshot,
    /// so a file deleted by an earlier phase is simply gone already.
    fn cleanup(
        &self,
        inventory: &LegacyInventory,
        report: &mut GenerateReport,
    ) -> WcforgeResult<()> {
        for name in inventory.files() {
            let path = self.root.join(name);
            if self.filesystem.exists(&path) {
                self.filesystem.remove_file(&path)?;
                debug!(path = %path.display(), "deleted obsolete file");
                report.deleted.push(path);
            }
        }
        Ok(())
    }

    /// Hand off to the installer. npm runs for every project, bower only for
    /// fresh layouts.
    fn install(&self, legacy: bool, report: &mut GenerateReport) -> WcforgeResult<()> {
        if self.skip_install {
            info!("dependency installation skipped");
            return Ok(());
        }
        let bower = !legacy;
        report.installed = (true, bower);
        self.installer.install(&self.root, true, bower);
        Ok(())
    }

    // ── defaults for the wizard ───────────────────────────────────────────

    fn detect_inventory(&self) -> LegacyInventory {
        LegacyInventory::detect(|name| self.filesystem.exists(&self.root.join(name)))
    }

    fn default_name(&self) -> String {
        let project = self
            .root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        default_component_name(&project)
    }

    /// Pull a default description out of an existing manifest, preferring
    /// `bower.json`. Unreadable or unparseable manifests just mean no
    /// default; this is a convenience, not a migration.
    fn default_description(&self) -> String {
        for manifest in ["bower.json", "package.json"] {
            if let Some(description) = self.manifest_description(&self.root.join(manifest)) {
                return description;
            }
        }
        String::new()
    }

    fn manifest_description(&self, path: &Path) -> Option<String> {
        if !self.filesystem.exists(path) {
            return None;
        }
        let source = match self.filesystem.read_to_string(path) {
            Ok(source) => source,
            Err(_) => return None,
        };
        let doc: Value = match serde_json::from_str(&source) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable manifest");
                return None;
            }
        };
        doc.get("description")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}
