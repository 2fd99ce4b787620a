use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use degrees::{
    describe_path, load_data, person_id_for_name, shortest_path, PromptDisambiguator,
    RecordStore, DEFAULT_DIRECTORY,
};

/// Find the degrees of separation between two actors.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding people.csv, movies.csv and stars.csv.
    #[arg(default_value = DEFAULT_DIRECTORY)]
    directory: PathBuf,

    /// Log more (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr) // stdout is the interactive channel
        .init();
}

fn read_name() -> anyhow::Result<String> {
    print!("Name: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn resolve(store: &RecordStore) -> anyhow::Result<Option<&str>> {
    let name = read_name()?;
    let mut disambiguator = PromptDisambiguator::new(io::stdin().lock(), io::stdout());
    Ok(person_id_for_name(store, &name, &mut disambiguator))
}

// the message is printed bare, without anyhow's "Error: " prefix
fn person_not_found(err: &mut impl Write) -> ExitCode {
    let _ = writeln!(err, "Person not found.");
    ExitCode::FAILURE
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("Loading data...");
    let store = load_data(&args.directory)
        .with_context(|| format!("loading data from {}", args.directory.display()))?;
    println!("Data loaded.");

    let Some(source) = resolve(&store)? else {
        return Ok(person_not_found(&mut io::stderr()));
    };
    let Some(target) = resolve(&store)? else {
        return Ok(person_not_found(&mut io::stderr()));
    };

    match shortest_path(&store, source, target) {
        None => println!("Not connected."),
        Some(path) => {
            println!("{} degrees of separation.", path.len());
            for line in describe_path(&store, source, &path) {
                println!("{line}");
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
