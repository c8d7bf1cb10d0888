//! Clap derive structures for the `etcgen` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// etcgen -- render host-level configuration artifacts
#[derive(Debug, Parser)]
#[command(
    name = "etcgen",
    version,
    about = "Render host-level configuration artifacts from a system snapshot",
    long_about = "Renders the hosts file and the WS-Discovery service descriptor\n\
        from a typed snapshot of the system's network, SMB, and\n\
        directory-service configuration.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration snapshot to render from (JSON)
    #[arg(long, short = 's', env = "ETCGEN_SNAPSHOT", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Path to the etcgen config file (overrides the XDG default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render one or all artifacts
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Render ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Which artifact to render
    #[arg(value_enum)]
    pub target: RenderTarget,

    /// Print to stdout instead of writing the destination files.
    ///
    /// Performs no filesystem side effects at all, including the wsdd
    /// log ownership fix-up.
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderTarget {
    /// The hosts file
    Hosts,
    /// The WS-Discovery service descriptor
    Wsdd,
    /// Every artifact
    All,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
