use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "labscore",
    version,
    about = "Scores declarative crypto/media/UI test cases and reports pass rates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a dataset and write the evaluation report
    Run(RunArgs),
    /// Check that every dataset record is well-formed, without scoring
    Validate(ValidateArgs),
    Version,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Newline-delimited JSON test cases
    #[arg(long, default_value = "test_dataset.jsonl", env = "LABSCORE_DATASET")]
    pub dataset: PathBuf,

    /// Where to write the JSON report
    #[arg(long, default_value = "evaluation_results.json", env = "LABSCORE_OUTPUT")]
    pub output: PathBuf,

    /// Do not write the report file
    #[arg(long)]
    pub no_write: bool,

    /// text: progress + summary on stderr; json: report on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Suppress per-case progress lines
    #[arg(long)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(long, default_value = "test_dataset.jsonl", env = "LABSCORE_DATASET")]
    pub dataset: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
