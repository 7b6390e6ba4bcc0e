use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use duckpond_core::{DuckKind, FlyStyle, QuackStyle, Transcript};
use serde::Serialize;

/// Everything one run produced.
#[derive(Debug, Default, Serialize)]
pub struct PondReport {
    pub scenarios: Vec<Transcript>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineage: Option<Vec<String>>,
}

/// One row of the duck roster.
#[derive(Debug, Serialize)]
pub struct RosterEntry {
    pub kind: DuckKind,
    pub fly: FlyStyle,
    pub quack: QuackStyle,
    pub display: &'static str,
}

#[must_use]
pub fn roster() -> Vec<RosterEntry> {
    DuckKind::ALL
        .iter()
        .map(|&kind| {
            let preset = kind.preset();
            RosterEntry {
                kind,
                fly: preset.fly,
                quack: preset.quack,
                display: preset.display,
            }
        })
        .collect()
}

pub fn announce_banner(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", "🦆 Duckpond Strategy Demo".bright_cyan().bold())?;
    writeln!(out, "{}", "=========================".cyan())?;
    Ok(())
}

fn write_section(out: &mut dyn Write, first: bool, title: &str, lines: &[String]) -> Result<()> {
    if !first {
        writeln!(out)?;
    }
    writeln!(out, "{}", format!("--- {title} ---").bright_yellow().bold())?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn generate_console_report(out: &mut dyn Write, report: &PondReport) -> Result<()> {
    if report.scenarios.is_empty() && report.lineage.is_none() {
        writeln!(out, "No scenarios executed.")?;
        return Ok(());
    }

    let mut first = true;
    for transcript in &report.scenarios {
        write_section(out, first, &transcript.title, &transcript.lines)?;
        first = false;
    }
    if let Some(lines) = &report.lineage {
        write_section(out, first, "Lineage", lines)?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, report: &PondReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, report: &PondReport) -> Result<()> {
    writeln!(out, "# Duckpond Transcript\n")?;
    if report.scenarios.is_empty() && report.lineage.is_none() {
        writeln!(out, "_No scenarios executed._")?;
        return Ok(());
    }

    for transcript in &report.scenarios {
        writeln!(out, "## {}\n", transcript.title)?;
        writeln!(out, "- **Kind**: {}", transcript.kind.as_str())?;
        for line in &transcript.lines {
            writeln!(out, "- `{line}`")?;
        }
        writeln!(out)?;
    }
    if let Some(lines) = &report.lineage {
        writeln!(out, "## Lineage\n")?;
        for line in lines {
            writeln!(out, "- `{line}`")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_console_roster(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available ducks:")?;
    for entry in roster() {
        writeln!(
            out,
            "  {:8} fly={:7} quack={:7} {}",
            entry.kind.as_str(),
            entry.fly.as_str(),
            entry.quack.as_str(),
            entry.display
        )?;
    }
    Ok(())
}

pub fn generate_json_roster(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(&roster())?)?;
    Ok(())
}

pub fn generate_markdown_roster(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "| Kind | Fly | Quack | Display |")?;
    writeln!(out, "|---|---|---|---|")?;
    for entry in roster() {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            entry.kind.as_str(),
            entry.fly,
            entry.quack,
            entry.display
        )?;
    }
    Ok(())
}
