//! Console front end and entry point.
//!
//! Wires the library into an interactive terminal session: reads commands
//! from stdin, feeds them to the [`Runtime`] as events, and prints the
//! rendered screen whenever something changed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  lines   ┌──────────────┐  effects  ┌──────────────┐
//! │    stdin     │ ───────▶ │   Runtime    │ ────────▶ │    Worker    │
//! └──────────────┘          │  (AppState)  │ ◀──────── │ (tokio tasks)│
//!                           └──────────────┘  events   └──────────────┘
//!                                  │
//!                                  ▼
//!                               stdout
//! ```
//!
//! Both sources are awaited together, so debounce timers and backend
//! responses are applied while the prompt is idle.

#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use filedeck::backend::JsonBackend;
use filedeck::console::{parse_command, Command, HELP};
use filedeck::ui::render_viewmodel;
use filedeck::{observability, Config, Event, Result, Runtime};

/// Interactive client for a filedeck drive.
#[derive(Debug, Parser)]
#[command(name = "filedeck", version, about)]
struct Args {
    /// JSON data file to use as the backend.
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `filedeck=trace`.
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,

    /// Screen width in columns.
    #[arg(long, default_value_t = 80)]
    cols: usize,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(data) = &self.data {
            config.data_file = Some(data.clone());
        }
        if let Some(level) = &self.trace_level {
            config.trace_level = Some(level.clone());
        }
        Ok(config)
    }
}

/// Prints the screen plus any downloads issued since the last draw.
fn draw(runtime: &Runtime<JsonBackend>, cols: usize, downloads_seen: &mut usize) {
    println!("{}", render_viewmodel(&runtime.viewmodel(), cols));
    for link in &runtime.downloads()[*downloads_seen..] {
        println!("download {} <- {}", link.file_name, link.url);
    }
    *downloads_seen = runtime.downloads().len();
}

async fn run(args: Args) -> Result<()> {
    let config = args.config()?;
    observability::init_tracing(&config);

    let span = tracing::debug_span!("filedeck_start");
    let backend = span.in_scope(|| {
        tracing::debug!(data_file = %config.data_file_path().display(), "starting");
        JsonBackend::open(config.data_file_path())
    })?;

    let mut runtime = Runtime::new(&config, Arc::new(backend));
    let mut downloads_seen = 0;
    runtime.dispatch(Event::Start)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    draw(&runtime, args.cols, &mut downloads_seen);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed");
                    break;
                };

                match parse_command(&line, runtime.state()) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Nothing) => {}
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Show) => draw(&runtime, args.cols, &mut downloads_seen),
                    Ok(Command::Event(event)) => {
                        if runtime.dispatch(event)? {
                            draw(&runtime, args.cols, &mut downloads_seen);
                        }
                    }
                    Err(e) => println!("error: {e}"),
                }
            }
            Some(result) = runtime.process_next() => {
                if result? {
                    draw(&runtime, args.cols, &mut downloads_seen);
                }
            }
        }
    }

    tracing::debug!("shutting down");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("filedeck: {e}");
            ExitCode::FAILURE
        }
    }
}
