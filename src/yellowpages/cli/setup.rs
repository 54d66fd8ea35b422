use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "yellowpages", bin_name = "yellowpages", version)]
#[command(about = "Terminal contact directory backed by a flat text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Search every field for a term
    #[command(alias = "s")]
    Search { term: String },

    /// Print one page of records
    #[command(alias = "ls")]
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Records per page (defaults to the configured page-size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show a record by its PK
    Show { pk: u64 },

    /// Add synthetic records to the directory
    Generate {
        /// Number of records to add
        #[arg(default_value_t = 3000)]
        count: usize,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
