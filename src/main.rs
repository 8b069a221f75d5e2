use clap::Parser;
use console::style;
use env_logger::Env;

use pagehawk_report::cli::Args;
use pagehawk_report::exporter::FileExporter;
use pagehawk_report::flatten::{flatten, load_payload};
use pagehawk_report::reporter::HtmlReporter;
use pagehawk_report::search::visibility_mask;
use pagehawk_report::views::{self, TargetOptions};
use pagehawk_report::ReportError;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    // Initialize logging based on verbosity and quiet flags
    let log_level = if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    log::info!("PageHawk report generator starting with args: {:?}", args);

    if !args.output.is_dir() {
        return Err(ReportError::InvalidPath(format!(
            "output directory does not exist: {}",
            args.output.display()
        ))
        .into());
    }

    // One immutable snapshot per run; every view and export reads from it.
    let payload = load_payload(&args.input);
    let records = flatten(&payload);
    let stats = views::stats(&records);

    if !args.no_html {
        let report_path = args.output.join(&args.report_filename);
        HtmlReporter::new().generate_report(&payload, &records, &report_path)?;
        println!(
            "    {} HTML report saved to {}",
            style("▶").green(),
            style(report_path.display()).bold()
        );
    }

    if args.export {
        let query = args.filter.as_deref().unwrap_or("");
        let mask = visibility_mask(&records, query);
        let exporter = FileExporter::new(&args.output);
        let written = exporter.export_all(&payload, &records, &mask, &args.formats)?;
        println!(
            "    {} {} export files written to {}",
            style("▶").green(),
            style(written.len()).bold(),
            args.output.display()
        );
    }

    let targets = views::unique_targets(&records, TargetOptions::default()).len();
    let with_screenshot = records.iter().filter(|r| r.has_screenshot()).count();

    println!();
    println!("    {} {}", style("▶").cyan(), style("Report summary").bold());
    println!("    {} Targets:       {}", style("├─").dim(), targets);
    println!("    {} Visits:        {}", style("├─").dim(), stats.total);
    println!(
        "    {} Accessible:    {}",
        style("├─").dim(),
        style(stats.accessible).green()
    );
    println!(
        "    {} Unreachable:   {}",
        style("├─").dim(),
        style(stats.unreachable).red()
    );
    println!(
        "    {} Screenshots:   {}",
        style("└─").dim(),
        with_screenshot
    );
    println!();

    Ok(())
}
