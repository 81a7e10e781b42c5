use labscore_core::dataset::load_dataset;
use labscore_core::report::{console, json::write_report, Provenance};
use labscore_core::Engine;

use super::super::args::{OutputFormat, RunArgs};
use crate::exit_codes;

pub(crate) fn run(args: RunArgs) -> anyhow::Result<i32> {
    let dataset = load_dataset(&args.dataset);
    let text = args.format == OutputFormat::Text;

    if text && !(dataset.is_empty() && dataset.rejected.is_empty()) {
        eprintln!(
            "Running {} test cases...",
            dataset.cases.len() + dataset.rejected.len()
        );
    }

    let engine = Engine::new(labscore_metrics::default_evaluators()?);
    let report = engine
        .run_dataset(&dataset)
        .with_provenance(Provenance::new(env!("CARGO_PKG_VERSION")).with_dataset(&dataset));

    match args.format {
        OutputFormat::Text => {
            if !args.quiet {
                console::print_case_lines(&report.overall_results);
            }
            console::print_summary(&report);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if !args.no_write {
        match write_report(&report, &args.output) {
            Ok(()) => eprintln!("Results saved to {}", args.output.display()),
            Err(e) => {
                // the in-memory report still decides the exit code
                tracing::warn!(error = %e, "failed to persist report");
                eprintln!("WARNING: failed to write {}: {:#}", args.output.display(), e);
            }
        }
    }

    let code = exit_codes::for_verdict(report.verdict);
    eprintln!("Evaluation complete. Exit code: {}", code);
    Ok(code)
}
