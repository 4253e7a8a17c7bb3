mod replay;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::{Parser, Subcommand, ValueEnum};
use pagebuilder::config::{ConfigError, EngineConfig};
use pagebuilder::engine::Engine;
use pagebuilder::registry::{self, ComponentKind};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid event on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid JSON output: {0}")]
    Output(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown component type `{0}`")]
    UnknownKind(String),
}

#[derive(Parser, Debug)]
#[command(name = "pagebuilder", about = "Page builder document engine")]
struct Cli {
    /// Tracing filter directives.
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log: String,

    #[arg(long, env = "PAGEBUILDER_VIEWPORT")]
    viewport: Option<String>,

    #[arg(long, env = "PAGEBUILDER_HIGHLIGHT")]
    highlight: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a JSON-lines event log and print the resulting state.
    Replay {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,

        #[arg(long, value_enum, default_value_t = Output::Document)]
        output: Output,

        #[arg(long, default_value_t = false, help = "Print each action as a JSON line before the snapshot")]
        actions: bool,
    },
    /// Print the component library.
    Catalog,
    /// Print the editable field schema of one component type.
    Schema { kind: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Document,
    Render,
    Panel,
    Palette,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = EngineConfig::from_values(cli.viewport.as_deref(), cli.highlight.as_deref())?;

    match cli.command {
        Command::Replay { input, output, actions } => run_replay(config, &input, output, actions),
        Command::Catalog => print_json(&serde_json::to_value(registry::list_types())?),
        Command::Schema { kind } => run_schema(&kind),
    }
}

fn run_replay(config: EngineConfig, input: &str, output: Output, print_actions: bool) -> Result<(), CliError> {
    let reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(input)?))
    };

    let mut engine = Engine::with_config(config);
    let stats = replay::replay(reader, &mut engine, |action| {
        if print_actions {
            println!("{}", serde_json::to_string(action)?);
        }
        Ok(())
    })?;
    tracing::info!(
        events = stats.events,
        skipped = stats.skipped,
        rejected_drops = stats.rejected_drops,
        "replay complete"
    );

    let snapshot = match output {
        Output::Document => serde_json::to_value(engine.document())?,
        Output::Render => serde_json::to_value(engine.render())?,
        Output::Panel => serde_json::to_value(engine.panel())?,
        Output::Palette => serde_json::to_value(engine.palette())?,
    };
    print_json(&snapshot)
}

fn run_schema(raw: &str) -> Result<(), CliError> {
    let kind: ComponentKind = match serde_json::from_value(Value::String(raw.trim().to_lowercase())) {
        Ok(kind) => kind,
        Err(_) => return Err(CliError::UnknownKind(raw.to_owned())),
    };
    print_json(&serde_json::to_value(registry::field_schema(kind))?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
