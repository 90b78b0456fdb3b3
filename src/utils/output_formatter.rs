//! Output formatter for analysis results
//!
//! This module renders findings as a plain-text report and sends it either
//! to a file or to standard output.

use std::fs;
use std::path::Path;

use log::{error, info};

use crate::core::analyzer::Finding;
use crate::error::AnalysisError;

/// Printed when no comment matched any pattern
pub const NO_FINDINGS_MESSAGE: &str = "No sensitive information found in HTML comments.";

/// Format findings as a text report
///
/// # Arguments
///
/// * `findings` - Findings in the order they were produced
///
/// # Returns
///
/// The report text, or `None` when there is nothing to report
pub fn format_report(findings: &[Finding]) -> Option<String> {
    if findings.is_empty() {
        return None;
    }

    let mut output = String::from("Findings:\n");
    for finding in findings {
        output.push_str(&format!(
            "- Location: {}\n  Comment: {}\n",
            finding.location, finding.comment
        ));
    }

    Some(output)
}

/// Write the report to a file (overwriting it) or to stdout
///
/// With no findings the "nothing found" message goes to stdout and no file
/// is written. A failed file write is logged and returned.
pub fn write_results(findings: &[Finding], output_file: Option<&Path>) -> Result<(), AnalysisError> {
    let report = match format_report(findings) {
        Some(report) => report,
        None => {
            println!("{}", NO_FINDINGS_MESSAGE);
            return Ok(());
        }
    };

    match output_file {
        Some(path) => {
            if let Err(e) = fs::write(path, &report) {
                error!("Error writing to file: {}", e);
                return Err(AnalysisError::Write {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
            info!("Results written to: {}", path.display());
        }
        None => println!("{}", report),
    }

    Ok(())
}
