//! Console output: the stdout reporter and hospital list rendering.
//!
//! Plain output is one line per member, table output uses `tabled`.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use hosptrack_api::Reporter;
use hosptrack_core::{HospitalView, HospitalizedMember};

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

// ── Reporter ─────────────────────────────────────────────────────────

/// Writes progress and diagnostic lines to stdout.
pub struct ConsoleReporter {
    color: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Reporter for ConsoleReporter {
    fn progress(&self, line: &str) {
        print_output(line);
    }

    fn failure(&self, line: &str) {
        if self.color {
            print_output(&line.red().to_string());
        } else {
            print_output(line);
        }
    }
}

/// Print the rendered output to stdout, skipping empty output.
pub fn print_output(output: &str) {
    if output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Hospital list ────────────────────────────────────────────────────

#[derive(Tabled)]
struct HospitalRow {
    #[tabled(rename = "Member")]
    name: String,
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Release (UTC)")]
    release: String,
}

impl From<&HospitalizedMember> for HospitalRow {
    fn from(m: &HospitalizedMember) -> Self {
        Self {
            name: m.name.clone(),
            id: m.member_id.get(),
            remaining: m.remaining_display(),
            release: m
                .release_at()
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Render the hospital list in the chosen format.
pub fn render_hospital(format: OutputFormat, view: &HospitalView, color: bool) -> String {
    match format {
        OutputFormat::Plain => view
            .iter()
            .map(|m| plain_line(m, color))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Table => {
            let rows: Vec<HospitalRow> = view.iter().map(HospitalRow::from).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
    }
}

fn plain_line(member: &HospitalizedMember, color: bool) -> String {
    let remaining = member.remaining_display();
    let remaining = if color {
        remaining.yellow().to_string()
    } else {
        remaining
    };
    format!(
        "{} [{}] \tHosped for {remaining}",
        member.name, member.member_id
    )
}
