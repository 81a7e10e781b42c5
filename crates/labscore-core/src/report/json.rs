use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::report::EvaluationReport;

/// Write the report as pretty JSON. Goes through a temp file in the same
/// directory and a rename, so a failed write leaves any previous report intact.
pub fn write_report(report: &EvaluationReport, out: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    write_via_temp(out, |file| {
        file.write_all(json.as_bytes())?;
        file.sync_all()
    })
}

/// Runs `fill` against a sibling temp file, then renames it over `out`.
/// The temp file is removed on every failure path.
fn write_via_temp<F>(out: &Path, fill: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut fs::File) -> std::io::Result<()>,
{
    let temp_path = out.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)
        .with_context(|| format!("failed to create {}", temp_path.display()))?;

    let result = fill(&mut file)
        .with_context(|| format!("failed to write {}", temp_path.display()))
        .and_then(|()| {
            drop(file);
            fs::rename(&temp_path, out)
                .with_context(|| format!("failed to write {}", out.display()))
        });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
