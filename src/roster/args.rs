use clap::Parser;
use roster::error::{Result, RosterError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Flat-file JSON user store", long_about = None)]
pub struct Cli {
    /// Path of the JSON file backing the store
    #[arg(long)]
    pub file_name: PathBuf,

    /// Operation to perform: list, add, remove or findById
    #[arg(long)]
    pub operation: String,

    /// A JSON object with id, email and age fields (required by add)
    #[arg(long)]
    pub item: Option<String>,

    /// Record identifier (required by remove and findById)
    #[arg(long)]
    pub id: Option<String>,
}

/// One validated invocation: the backing file plus exactly one operation
/// carrying its required arguments.
#[derive(Debug)]
pub struct Invocation {
    pub file_name: PathBuf,
    pub operation: Operation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    List,
    Add { item: String },
    Remove { id: String },
    FindById { id: String },
}

impl Cli {
    /// Validate the flag combination before any I/O happens. Unknown
    /// operation names and missing or empty companion flags are
    /// configuration errors.
    pub fn into_invocation(self) -> Result<Invocation> {
        let operation = match self.operation.as_str() {
            "list" => Operation::List,
            "add" => Operation::Add {
                item: require(self.item, "--item", "add")?,
            },
            "remove" => Operation::Remove {
                id: require(self.id, "--id", "remove")?,
            },
            "findById" => Operation::FindById {
                id: require(self.id, "--id", "findById")?,
            },
            other => {
                return Err(RosterError::Config(format!(
                    "Operation {} not allowed",
                    other
                )))
            }
        };

        Ok(Invocation {
            file_name: self.file_name,
            operation,
        })
    }
}

fn require(value: Option<String>, flag: &str, operation: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RosterError::Config(format!(
            "{} has to be specified for operation {}",
            flag, operation
        ))),
    }
}
