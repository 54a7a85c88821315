use clap::Parser;
use roster::api::RosterApi;
use roster::error::Result;
use roster::store::fs::FileStore;
use std::io::{self, Write};

mod args;
use args::{Cli, Invocation, Operation};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let Invocation {
        file_name,
        operation,
    } = cli.into_invocation()?;

    let mut api = RosterApi::new(FileStore::new(file_name));

    let result = match operation {
        Operation::List => api.list()?,
        Operation::Add { item } => api.add(&item)?,
        Operation::Remove { id } => api.remove(&id)?,
        Operation::FindById { id } => api.find_by_id(&id)?,
    };

    // The sink gets the result bytes exactly as produced: list output must
    // stay byte-identical to the file, so no newline is appended.
    let stdout = io::stdout();
    let mut sink = stdout.lock();
    sink.write_all(&result.output)?;
    sink.flush()?;

    Ok(())
}
