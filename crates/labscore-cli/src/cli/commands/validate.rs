use labscore_core::dataset::{read_dataset, RejectedRecord};
use serde::Serialize;

use super::super::args::{OutputFormat, ValidateArgs};
use crate::exit_codes::{CONFIG_ERROR, PASS};

#[derive(Serialize)]
struct ValidationSummary<'a> {
    dataset: String,
    valid: usize,
    rejected: &'a [RejectedRecord],
}

pub(crate) fn run(args: ValidateArgs) -> anyhow::Result<i32> {
    let dataset = match read_dataset(&args.dataset) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(CONFIG_ERROR);
        }
    };

    match args.format {
        OutputFormat::Json => {
            let summary = ValidationSummary {
                dataset: dataset.path.display().to_string(),
                valid: dataset.cases.len(),
                rejected: &dataset.rejected,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            for r in &dataset.rejected {
                match &r.test_id {
                    Some(id) => eprintln!("line {} [{}]: {}", r.line, id, r.reason),
                    None => eprintln!("line {}: {}", r.line, r.reason),
                }
            }
            eprintln!(
                "{}: {} valid, {} rejected",
                dataset.path.display(),
                dataset.cases.len(),
                dataset.rejected.len()
            );
        }
    }

    Ok(if dataset.rejected.is_empty() {
        PASS
    } else {
        CONFIG_ERROR
    })
}
