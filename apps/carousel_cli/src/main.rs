mod config;
mod script;
mod supplier;
mod terminal;

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use carousel_core::{
    report_rows, state::BoxedTarget, Direction, ResultStore, ResultSupplier, TimedTransition,
    TransitionController,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::{
    config::{load_settings, Settings},
    script::{parse_script, ScriptStep},
    supplier::JsonFileSupplier,
    terminal::{render_frame, render_report_table, SharedSlotView, TerminalSlot},
};

#[derive(Parser, Debug)]
#[command(name = "carousel", about = "Browse ranked suggestions five at a time")]
struct Cli {
    /// Settings file; defaults to `carousel.toml` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Saved scoring-service response to load.
    #[arg(long)]
    results: Option<PathBuf>,
    /// Slide duration in milliseconds.
    #[arg(long)]
    transition_ms: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the carousel, optionally walking a navigation script.
    Show {
        #[arg(long, default_value = "")]
        script: String,
    },
    /// Print every result in rank order.
    Report {
        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref());
    if let Some(path) = cli.results {
        settings.results_path = Some(path);
    }
    if let Some(ms) = cli.transition_ms {
        settings.transition_ms = ms;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let results_path = settings
        .results_path
        .clone()
        .context("no results file configured; pass --results or set CAROUSEL_RESULTS")?;
    let supplier = JsonFileSupplier::new(results_path);

    match cli.command {
        Command::Show { script } => run_show(&settings, &supplier, &script).await,
        Command::Report { format } => run_report(&supplier, format).await,
    }
}

async fn run_show(settings: &Settings, supplier: &JsonFileSupplier, script: &str) -> Result<()> {
    let steps = parse_script(script)?;

    let views: [SharedSlotView; 3] = Default::default();
    let targets: [BoxedTarget; 3] = [
        Box::new(TerminalSlot::new(views[0].clone())),
        Box::new(TerminalSlot::new(views[1].clone())),
        Box::new(TerminalSlot::new(views[2].clone())),
    ];
    let controller = TransitionController::new(targets, Arc::new(TimedTransition))
        .with_duration(Duration::from_millis(settings.transition_ms));

    let total = controller.load_from(supplier).await?;
    info!(total, steps = steps.len(), "carousel ready");
    print_frame(&controller, &views).await;

    for step in steps {
        match step {
            ScriptStep::Next | ScriptStep::Prev => {
                let direction = if step == ScriptStep::Next {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                let outcome = controller.navigate(direction).await;
                println!("> {step:?}: {}", serde_json::to_string(&outcome)?);
            }
            ScriptStep::Select(rank) => {
                let changed = controller.select(rank).await;
                println!("> select {rank}: {}", if changed { "ok" } else { "no such rank" });
            }
            ScriptStep::Reload => {
                let total = controller.load_from(supplier).await?;
                println!("> reload: {total} results");
            }
        }
        print_frame(&controller, &views).await;
    }

    Ok(())
}

async fn print_frame(controller: &TransitionController, views: &[SharedSlotView; 3]) {
    let snapshot = controller.snapshot().await;
    let highlighted = controller.highlighted().await;
    print!("{}", render_frame(&snapshot, views, highlighted.as_ref()));
}

async fn run_report(supplier: &JsonFileSupplier, format: ReportFormat) -> Result<()> {
    let mut store = ResultStore::new();
    store
        .load(supplier.fetch().await?)
        .context("result set failed validation")?;
    let rows = report_rows(&store);

    match format {
        ReportFormat::Table => print!("{}", render_report_table(&rows)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}
