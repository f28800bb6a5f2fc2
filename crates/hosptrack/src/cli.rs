//! Clap derive structures for the `hosptrack` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use hosptrack_api::{FactionId, UserId};
use hosptrack_core::Target;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// hosptrack -- who in a Torn faction is in hospital, and for how long
#[derive(Debug, Parser)]
#[command(
    name = "hosptrack",
    version,
    about = "List the members of a Torn faction currently in hospital",
    long_about = "Checks a Torn City API key, resolves the faction (directly or through a \
        member's user ID), and prints every member in hospital ordered by soonest release.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Torn City API key (16 characters)
    #[arg(long, short = 'k', env = "TORN_API_KEY", hide_env_values = true)]
    pub key: String,

    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub global: GlobalOpts,
}

// ── Target ───────────────────────────────────────────────────────────

/// Exactly one of the two IDs must be given.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Torn faction ID
    #[arg(long = "factionid", short = 'f', value_name = "ID")]
    pub faction_id: Option<FactionId>,

    /// Torn user ID (the faction ID is read from their profile)
    #[arg(long = "userid", short = 'u', value_name = "ID")]
    pub user_id: Option<UserId>,
}

impl TargetArgs {
    /// The faction ID wins if both are somehow present.
    pub fn target(&self) -> Option<Target> {
        self.faction_id
            .map(Target::Faction)
            .or_else(|| self.user_id.map(Target::User))
    }
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Torn API root
    #[arg(long, hide = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(long, short = 'o')]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One line per member (default)
    #[default]
    Plain,
    /// Pretty table
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}
