//! Results persistence module

use crate::robustness::SummaryReport;
use anyhow::Result;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Column order of the summary table
pub const SUMMARY_COLUMNS: [&str; 7] = ["p", "Q_mean", "Q_std", "Q_lo", "Q_hi", "H", "VI"];

/// Save the summary table to the specified directory.
///
/// Writes `summary_by_p.csv` and `summary_by_p.json` and returns their paths.
pub fn save_summary(report: &SummaryReport, output_dir: &str) -> Result<(PathBuf, PathBuf)> {
    log::info!("Saving {} summary rows to {}", report.rows.len(), output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    let csv_path = Path::new(output_dir).join("summary_by_p.csv");
    save_summary_csv(report, &csv_path)?;

    let json_path = Path::new(output_dir).join("summary_by_p.json");
    save_summary_json(report, &json_path)?;

    log::info!("Summary saved successfully");

    Ok((csv_path, json_path))
}

/// Write the summary as comma-separated text, one row per noise level
fn save_summary_csv(report: &SummaryReport, path: &Path) -> Result<()> {
    log::debug!("Writing {}", path.display());

    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{}", SUMMARY_COLUMNS.join(","))?;

    for row in &report.rows {
        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            row.p, row.q_mean, row.q_std, row.q_lo, row.q_hi, row.consensus_entropy, row.mean_vi
        )?;
    }

    file.flush()?;
    Ok(())
}

/// Write rows plus any per-level failures as pretty JSON
fn save_summary_json(report: &SummaryReport, path: &Path) -> Result<()> {
    log::debug!("Writing {}", path.display());

    let summary = json!({
        "rows": report.rows,
        "failures": report.failures.iter().map(|e| {
            json!({
                "p": e.p(),
                "error": e.to_string(),
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}
