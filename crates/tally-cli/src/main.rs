//! Tally CLI - Personal expense tracker
//!
//! Usage:
//!   tally init                              Initialize database
//!   tally add -a 12.50 -c food -p cash      Record an expense
//!   tally dashboard                         Full analysis dashboard
//!   tally report categories                 A single report

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Add {
            amount,
            category,
            payment,
            date,
            description,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_add(
                &db,
                amount,
                &category,
                &payment,
                date.as_deref(),
                &description,
            )
        }
        Commands::List {
            category,
            from,
            to,
            limit,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_list(&db, category.as_deref(), from.as_deref(), to.as_deref(), limit)
        }
        Commands::Delete { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_delete(&db, id)
        }
        Commands::Dashboard => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_dashboard(&db)
        }
        Commands::Report { json, action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                ReportAction::Summary => commands::cmd_report_summary(&db, json),
                ReportAction::Categories => commands::cmd_report_categories(&db, json),
                ReportAction::Payments => commands::cmd_report_payments(&db, json),
                ReportAction::Monthly => commands::cmd_report_monthly(&db, json),
                ReportAction::Top { limit } => commands::cmd_report_top(&db, limit, json),
                ReportAction::Percentages => commands::cmd_report_percentages(&db, json),
                ReportAction::Patterns => commands::cmd_report_patterns(&db, json),
            }
        }
        Commands::Export { format, output } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_export(&db, &format, output.as_deref())
        }
        Commands::Status => commands::cmd_status(&cli.db),
    }
}
