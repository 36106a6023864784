//! Command-line driver and entry point.
//!
//! This module provides the thin integration layer between the docfinder
//! library and a terminal. It reads line commands from stdin, turns them into
//! library events, and executes the actions the library returns.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  stdin line                  │
//! │      │ parse_command         │
//! │      ▼                       │
//! │  Event → handle_event        │  ← library state machine
//! │      │                       │
//! │      ▼                       │
//! │  Action::FetchDirectory      │  → store::load → Event::DirectoryLoaded
//! │  Action::PushQuery           │  → MemoryLocation::push_query
//! │      │                       │
//! │      ▼                       │
//! │  render → stdout             │
//! └──────────────────────────────┘
//! ```
//!
//! Everything runs on a single-threaded runtime. The fetch is the only
//! asynchronous operation and is awaited before the next command is read, so
//! events never interleave.

use clap::Parser;
use docfinder::infrastructure::{Location, MemoryLocation};
use docfinder::store::{self, DirectorySource, FileSource, HttpSource};
use docfinder::ui::{self, Command};
use docfinder::{handle_event, initialize, Action, AppState, Config, Event};
use std::collections::VecDeque;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Browse a healthcare provider directory from the terminal.
#[derive(Debug, Parser)]
#[command(name = "docfinder", version, about)]
struct Args {
    /// TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Provider feed URL (overrides the config file).
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Read providers from a local JSON file instead of the endpoint.
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Initial address query, e.g. "name=ali&sortBy=fee-ascending".
    #[arg(long, default_value = "")]
    query: String,

    /// Tracing level: trace, debug, info, warn, error.
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,
}

impl Args {
    /// Loads the config file, if any, and applies flag overrides.
    fn resolve_config(&self) -> docfinder::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(file) = &self.file {
            config.source_file = Some(file.clone());
        }
        if let Some(level) = &self.trace_level {
            config.trace_level = Some(level.clone());
        }
        Ok(config)
    }
}

/// Driver state: the library state plus the collaborators it asks for.
struct Driver {
    state: AppState,
    source: Box<dyn DirectorySource>,
    location: MemoryLocation,
}

impl Driver {
    fn new(config: &Config, initial_query: &str) -> Self {
        let source: Box<dyn DirectorySource> = match &config.source_file {
            Some(path) => Box::new(FileSource::new(path.clone())),
            None => Box::new(HttpSource::new(config.endpoint.clone())),
        };

        Self {
            state: initialize(config, initial_query),
            source,
            location: MemoryLocation::new(config.base_path.clone(), initial_query),
        }
    }

    /// Handles an event and every event its actions produce.
    ///
    /// Returns whether anything needs to be re-rendered.
    async fn dispatch(&mut self, event: Event) -> docfinder::Result<bool> {
        let mut queue = VecDeque::from([event]);
        let mut should_render = false;

        while let Some(event) = queue.pop_front() {
            let (render, actions) = handle_event(&mut self.state, &event)?;
            should_render |= render;

            for action in actions {
                if let Some(follow_up) = self.execute_action(action).await {
                    queue.push_back(follow_up);
                }
            }
        }

        Ok(should_render)
    }

    async fn execute_action(&mut self, action: Action) -> Option<Event> {
        match action {
            Action::FetchDirectory => {
                tracing::debug!(source = %self.source.describe(), "fetching directory");
                let outcome = store::load(self.source.as_ref())
                    .await
                    .map_err(|e| e.to_string());
                Some(Event::DirectoryLoaded(outcome))
            }
            Action::PushQuery(query) => {
                self.location.push_query(&query);
                None
            }
        }
    }

    fn show(&self) {
        print!("{}", ui::render(&self.state));
        let _ = std::io::stdout().flush();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("docfinder: {e}");
            return ExitCode::FAILURE;
        }
    };

    docfinder::observability::init_tracing(&config);
    tracing::info!(query = %args.query, "docfinder starting");

    let mut driver = Driver::new(&config, &args.query);
    if let Err(e) = run(&mut driver).await {
        tracing::error!(error = %e, "driver error");
        eprintln!("docfinder: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!(history = driver.location.entries().len(), "docfinder exited");
    ExitCode::SUCCESS
}

async fn run(driver: &mut Driver) -> docfinder::Result<()> {
    driver.dispatch(Event::Reload).await?;
    driver.show();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();

    while let Some(line) = lines.next_line().await? {
        match ui::parse_command(&line) {
            Ok(Command::Event(event)) => {
                if driver.dispatch(event).await? {
                    driver.show();
                }
            }
            Ok(Command::Show) => driver.show(),
            Ok(Command::Help) => print!("{}", ui::HELP),
            Ok(Command::Quit) => break,
            Err(e) => {
                tracing::debug!(line = %line, error = %e, "rejected command");
                println!("{e} (type 'help' for commands)");
            }
        }
        prompt();
    }

    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
