mod commands;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use secondbrain_core::config::SecondBrainConfig;
use secondbrain_core::YearMonth;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "secondbrain")]
#[command(about = "Your SecondBrain calendar: month view, events and .ics export")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid with event counts
    Month {
        #[arg(short, long)]
        year: Option<i32>,

        /// Month number (1-12)
        #[arg(short, long)]
        month: Option<u32>,

        /// Day to detail below the grid (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        day: Option<NaiveDate>,

        /// Show the month before
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Show the month after
        #[arg(long)]
        next: bool,
    },
    /// List the events of a day
    Day {
        /// Day to show (YYYY-MM-DD), defaults to today
        date: Option<NaiveDate>,
    },
    /// Add an event
    Add {
        /// Anchor day (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        #[arg(short, long)]
        title: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        /// Label id (see `secondbrain labels`)
        #[arg(short, long)]
        label: Option<String>,

        #[arg(short, long)]
        note: Option<String>,

        /// none, weekly, monthly or yearly
        #[arg(short, long)]
        recur: Option<String>,
    },
    /// Edit an event. Omitted fields are kept, an empty value clears a field
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        label: Option<String>,

        #[arg(short, long)]
        note: Option<String>,

        #[arg(short, long)]
        recur: Option<String>,
    },
    /// Delete an event
    Delete { id: String },
    /// Export a month as calendar-YYYY-MM.ics
    Export {
        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        month: Option<u32>,

        /// Output directory, defaults to the configured export_dir
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available labels
    Labels,
    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Month {
            year,
            month,
            day,
            prev,
            next,
        } => {
            let month = commands::month::navigate(resolve_month(year, month)?, prev, next);
            commands::month::run(&open_context()?, month, day.unwrap_or_else(today))
        }
        Commands::Day { date } => {
            commands::day::run(&open_context()?, date.unwrap_or_else(today))
        }
        Commands::Add {
            date,
            title,
            start,
            end,
            label,
            note,
            recur,
        } => {
            let form = commands::add::AddForm {
                date: date.unwrap_or_else(today),
                title,
                start: start.unwrap_or_default(),
                end: end.unwrap_or_default(),
                label: label.unwrap_or_default(),
                note: note.unwrap_or_default(),
                recur: recur.unwrap_or_default(),
            };
            commands::add::run(&mut open_context()?, form)
        }
        Commands::Edit {
            id,
            title,
            start,
            end,
            label,
            note,
            recur,
        } => {
            let changes = commands::edit::EditChanges {
                title,
                start,
                end,
                label,
                note,
                recur,
            };
            commands::edit::run(&mut open_context()?, &id, changes)
        }
        Commands::Delete { id } => commands::delete::run(&mut open_context()?, &id),
        Commands::Export {
            year,
            month,
            output,
        } => {
            let month = resolve_month(year, month)?;
            commands::export::run(&open_context()?, month, output)
        }
        Commands::Labels => commands::labels::run(),
        Commands::Config => commands::config::run(&SecondBrainConfig::load()?),
    }
}

fn open_context() -> Result<commands::Context> {
    commands::Context::open(SecondBrainConfig::load()?)
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Missing parts default to the current year and month.
fn resolve_month(year: Option<i32>, month: Option<u32>) -> Result<YearMonth> {
    let current = YearMonth::from_date(today());
    let year = year.unwrap_or(current.year());
    let month = month.unwrap_or(current.month());
    Ok(YearMonth::new(year, month)?)
}
