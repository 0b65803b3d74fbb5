pub mod builtin;
pub mod suite_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "katas")]
#[command(about = "Binary search and integer palindrome exercises")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search a sorted list for a target; prints its index or -1
    Search {
        /// Sorted (non-decreasing) numbers, comma separated; use `--nums=-3,1` for negatives
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        nums: Vec<i32>,

        #[arg(long, allow_negative_numbers = true)]
        target: i32,
    },

    /// Check whether an integer is a decimal palindrome
    Palindrome {
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Run a suite of cases with expected results
    Suite {
        /// Path to a TOML suite file; the built-in suite runs when omitted
        #[arg(short, long)]
        config: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
