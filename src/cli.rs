use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "modmap",
    about = "Python code modernization analyzer",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a Python source file and print a modernization report
    Analyze {
        /// Path to the Python source file
        path: PathBuf,

        /// Output format (terminal, json)
        #[arg(short, long, default_value = "terminal")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyze a file, then answer one question about the findings
    Ask {
        /// Path to the Python source file
        path: PathBuf,

        /// The question to answer
        question: String,
    },
}
