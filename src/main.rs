//! Runs a short scripted demonstration of [`HashTable`].

use std::error::Error;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use hash_tables::HashTable;
use hash_tables::collections::hash::table::{DEFAULT_CAP, hash};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

const SCRIPT: [(&str, &str); 3] = [("cat", "meows"), ("tac", "weoms"), ("dog", "barks")];

/// Inserts a few animals into a hash table, looks them up and deletes one of them again.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of buckets in the table, preferably prime.
    #[arg(short, long, default_value_t = DEFAULT_CAP)]
    capacity: usize,

    /// Log more detail to stderr, repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(quiet: bool, verbose: u8) -> Result<(), Box<dyn Error>> {
    let level_filter = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    // The library logs through the log crate.
    tracing_log::LogTracer::init()?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("HASH_TABLES_LOG")
        .from_env_lossy();

    let subscriber = Registry::default().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .compact(),
    );
    tracing::subscriber::set_global_default(subscriber)?;

    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing_panic::panic_hook(info);
        prev_hook(info);
    }));

    Ok(())
}

fn print_lookups(table: &HashTable) {
    for (key, _) in SCRIPT {
        match table.search(key) {
            Some(value) => println!("A {key} {value}"),
            None => println!("A {key} is nowhere to be found"),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(error) = init_tracing(args.quiet, args.verbose) {
        eprintln!("Unable to initialise logging: {error}");
        return ExitCode::FAILURE;
    }

    let mut table = match HashTable::try_with_cap(args.capacity) {
        Ok(table) => table,
        Err(error) => {
            tracing::error!("{error}");
            return ExitCode::FAILURE;
        },
    };

    println!("Hash tables");
    for (key, value) in SCRIPT {
        if let Err(error) = table.insert(key, value) {
            tracing::error!("Inserting {key:?}: {error}");
            return ExitCode::FAILURE;
        }
    }
    print_lookups(&table);

    let primary = table.hasher().primary();
    let cap = table.cap() as u64;
    for key in ["cat", "tac"] {
        println!("{key}: {}", hash(key, primary, cap).unwrap_or_default());
    }

    match table.delete("tac") {
        Ok(value) => println!("Deleted tac, which {value}"),
        Err(error) => tracing::warn!("Deleting \"tac\": {error}"),
    }
    print_lookups(&table);

    tracing::debug!("{table:?}");
    println!("{table}");

    ExitCode::SUCCESS
}
