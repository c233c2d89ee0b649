//! CLI: reads an expenditure history and prints how many notifications it triggers.
//!
//! Usage:
//!   printf '9 5\n2 3 4 2 3 6 8 4 5\n' | fraud-notify text --quiet
//!   echo '{"expenditures":[2,3,4,2,3,6,8,4,5],"window":5}' | fraud-notify json --details
use clap::{Parser, Subcommand};
use fraud_notify_core::{
    count_notifications, notification_report, read_request, DaySignal, InputError, Request,
};
use log::{error, info};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "fraud-notify",
    version,
    about = "Count days whose spending is at least twice the trailing median"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Read input from this file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Two text lines: `n d`, then n space-separated expenditures
    Text {
        /// Skip the banner and prompts
        #[arg(long)]
        quiet: bool,
    },
    /// A JSON object `{"expenditures": [...], "window": d}`
    Json {
        /// Include the median and threshold of every evaluated day
        #[arg(long)]
        details: bool,
    },
}

#[derive(Debug, Serialize)]
struct JsonOutput {
    notifications: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    signals: Option<Vec<DaySignal>>,
}

const BANNER: &str = "\
--------------------------------------------------
Program: Fraudulent Activity Notifications
Description: This program simulates a bank system that sends notifications to clients if their spending on a given day is at least twice the median of their spending over a trailing number of days.
--------------------------------------------------
";

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = open_input(cli.input.as_deref())
        .and_then(|reader| run(cli, reader, io::stdout().lock()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("rejected input: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, InputError> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    })
}

fn run<R, W>(cli: Cli, reader: R, mut out: W) -> Result<(), InputError>
where
    R: BufRead,
    W: Write,
{
    match cli.command.unwrap_or(Command::Text { quiet: false }) {
        Command::Text { quiet } => {
            info!("text mode");
            if !quiet {
                writeln!(out, "{BANNER}")?;
            }
            let request = read_request(reader, &mut out, !quiet)?;
            let notifications = count_notifications(&request.expenditures, request.window)?;
            info!("{notifications} notifications");
            writeln!(out, "Total notifications: {notifications}")?;
        }
        Command::Json { details } => {
            info!("json mode");
            let request: Request = serde_json::from_reader(reader)?;
            let output = if details {
                let report = notification_report(&request.expenditures, request.window)?;
                JsonOutput {
                    notifications: report.notifications,
                    signals: Some(report.signals),
                }
            } else {
                JsonOutput {
                    notifications: count_notifications(&request.expenditures, request.window)?,
                    signals: None,
                }
            };
            info!("{} notifications", output.notifications);
            serde_json::to_writer(&mut out, &output)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
