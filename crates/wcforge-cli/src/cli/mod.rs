//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wcforge",
    bin_name = "wcforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f527} Web-component project scaffolding",
    long_about = "Wcforge scaffolds browser web-component projects and \
                  migrates projects in the legacy layout to the current \
                  conventions.",
    after_help = "EXAMPLES:\n\
        \x20 wcforge generate                      # interactive, in the current directory\n\
        \x20 wcforge generate --dir ../my-panel --name my-panel\n\
        \x20 wcforge generate --name api-console --preview --skip-install\n\
        \x20 wcforge completions bash > /usr/share/bash-completion/completions/wcforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate or upgrade a component project.
    #[command(
        visible_alias = "g",
        about = "Generate or upgrade a component project",
        after_help = "EXAMPLES:\n\
            \x20 wcforge generate\n\
            \x20 wcforge generate --dir my-panel --name my-panel --description 'A panel'\n\
            \x20 wcforge generate --name raml-request-panel --preview --delete-old"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 wcforge completions bash > ~/.local/share/bash-completion/completions/wcforge\n\
            \x20 wcforge completions zsh  > ~/.zfunc/_wcforge\n\
            \x20 wcforge completions fish > ~/.config/fish/completions/wcforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `wcforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Destination directory.  Existing projects in the legacy layout are
    /// migrated in place.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Destination directory"
    )]
    pub dir: PathBuf,

    /// Component name.  Passing it skips the wizard entirely; the remaining
    /// answers come from the other flags.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Component name (dash-delimited); skips the wizard"
    )]
    pub name: Option<String>,

    /// Component description for generated manifests and docs.
    #[arg(
        long = "description",
        value_name = "TEXT",
        requires = "name",
        help = "Component description"
    )]
    pub description: Option<String>,

    /// Target the 2.0.0-preview version track.
    #[arg(long = "preview", help = "Use the 2.0.0-preview version")]
    pub preview: bool,

    /// Delete obsolete config files found in a legacy destination.
    #[arg(
        long = "delete-old",
        requires = "name",
        help = "Delete obsolete config files without asking"
    )]
    pub delete_old: bool,

    /// Skip npm/bower dependency installation.
    #[arg(long = "skip-install", help = "Do not run npm or bower install")]
    pub skip_install: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `wcforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "wcforge",
            "generate",
            "--dir",
            "my-panel",
            "--name",
            "my-panel",
            "--preview",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.dir, PathBuf::from("my-panel"));
        assert_eq!(args.name.as_deref(), Some("my-panel"));
        assert!(args.preview);
        assert!(!args.skip_install);
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["wcforge", "g", "--name", "a-b"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn description_requires_name() {
        let result = Cli::try_parse_from(["wcforge", "generate", "--description", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn delete_old_requires_name() {
        let result = Cli::try_parse_from(["wcforge", "generate", "--delete-old"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["wcforge", "--quiet", "--verbose", "generate"]);
        assert!(result.is_err());
    }
}
