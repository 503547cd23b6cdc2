use crate::app::forms::FormKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "candidate-forms")]
#[command(about = "Describe and validate the candidate profile forms")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "JSON user list used for the duplicate login check")]
    pub users: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the JSON schema of a form
    Schema {
        #[arg(value_enum)]
        form: FormKind,
    },
    /// Validate an urlencoded submission and print the report
    Validate {
        #[arg(value_enum)]
        form: FormKind,

        #[arg(long, default_value = "-", help = "Submission body file, '-' for stdin")]
        input: String,
    },
}
