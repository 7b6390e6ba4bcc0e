mod reports;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::LevelFilter;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use duckpond_core::{Scenario, demo_scenarios, find_scenario, lineage, load_scenarios};
use reports::PondReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Plain text, one section per scenario
    Console,
    /// Pretty-printed JSON
    Json,
    /// Markdown document
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "duckpond", version)]
#[command(about = "Strategy-pattern duck simulation - runs scripted duck scenarios")]
struct Args {
    /// Built-in scenarios to run (comma-separated: mallard, rubber, model, or all)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// Load scenarios from a JSON script instead of the built-in catalog
    #[arg(long, conflicts_with = "scenarios")]
    script: Option<PathBuf>,

    /// List every duck kind with its default behaviors and exit
    #[arg(long)]
    list_ducks: bool,

    /// Also run the parent/child inheritance demo
    #[arg(long)]
    lineage: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_ducks(&args)? {
        return Ok(());
    }

    let scenarios = select_scenarios(&args)?;
    log::info!("running {} scenario(s)", scenarios.len());

    let report = PondReport {
        scenarios: scenarios.iter().map(Scenario::run).collect(),
        lineage: args.lineage.then(lineage::demo_lines),
    };

    write_report(&args, &report)
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn maybe_list_ducks(args: &Args) -> Result<bool> {
    if !args.list_ducks {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Console => reports::generate_console_roster(output_target.writer())?,
        ReportFormat::Json => reports::generate_json_roster(output_target.writer())?,
        ReportFormat::Markdown => reports::generate_markdown_roster(output_target.writer())?,
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn select_scenarios(args: &Args) -> Result<Vec<Scenario>> {
    if let Some(path) = &args.script {
        return read_script(path);
    }
    Ok(expand_scenarios(&args.scenarios))
}

fn read_script(path: &Path) -> Result<Vec<Scenario>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    load_scenarios(&json).with_context(|| format!("invalid script {}", path.display()))
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<Scenario> {
    let names = split_csv(scenarios_arg);
    if names.iter().any(|name| name == "all") {
        return demo_scenarios();
    }

    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        if let Some(scenario) = find_scenario(&name) {
            selected.push(scenario);
        } else {
            eprintln!("⚠️  Unknown scenario: {}", name.yellow());
        }
    }
    selected
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn write_report(args: &Args, report: &PondReport) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => reports::generate_json_report(&mut output_target, report)?,
        ReportFormat::Markdown => reports::generate_markdown_report(&mut output_target, report)?,
        ReportFormat::Console => {
            reports::announce_banner(&mut output_target)?;
            reports::generate_console_report(&mut output_target, report)?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
