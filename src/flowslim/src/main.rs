use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowslim_conf::Config;
use flowslim_tools::tools::filter_schema::FilterSchemaInput;
use flowslim_tools::{FilterSchemaTool, FsSchemaStore, ToolDefinition};

/// Narrow the consolidated serverless workflow schema to the ID-based
/// variant and report the size reduction.
#[derive(Parser, Debug)]
#[command(name = "flowslim", version)]
struct Cli {
    /// Path of the consolidated workflow schema to read.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Path the narrowed schema is written to.
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON config file with default schema paths.
    #[arg(long, default_value = "flowslim.json")]
    config: PathBuf,

    /// Session identifier recorded in the logs.
    #[arg(long, default_value = "cli", env = "FLOWSLIM_SESSION_ID")]
    session_id: String,
}

/// A harness that's setting up our logging and environment variables and
/// calls into our "real" `run()`.
fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(true)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(summary) => println!("{summary}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, anyhow::Error> {
    let config = Config::load(&cli.config)?;
    let mut paths = config.schema_paths();
    if let Some(input) = cli.input {
        paths.input = input;
    }
    if let Some(output) = cli.output {
        paths.output = output;
    }

    tracing::debug!(%paths, "resolved schema paths");

    let tool = FilterSchemaTool::new(paths);
    tool.execute(
        &mut FsSchemaStore,
        FilterSchemaInput {
            session_id: cli.session_id,
        },
    )
}
