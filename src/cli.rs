use clap::Parser;
use std::path::PathBuf;

use crate::serialize::OutputFormat;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pagehawk-report",
    about = "PageHawk - standalone HTML report and exports for reconnaissance scan results",
    version
)]
pub struct Args {
    /// Scan results JSON produced by the recon run
    #[arg(short, long, default_value = "pagehawk_results.json")]
    pub input: PathBuf,

    /// Output directory for the report and export files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// File name of the generated HTML report
    #[arg(long, default_value = "pagehawk_results.html")]
    pub report_filename: String,

    /// Skip writing the HTML report
    #[arg(long)]
    pub no_html: bool,

    /// Write the JSON/CSV data exports and the five target-list outputs
    #[arg(short, long)]
    pub export: bool,

    /// Formats for the target-list outputs
    #[arg(long, value_delimiter = ',', default_values_t = OutputFormat::ALL)]
    pub formats: Vec<OutputFormat>,

    /// Case-insensitive filter applied to the current-view exports
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Enable verbose logging of all operations
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
