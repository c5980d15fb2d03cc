use crate::render::render_report_body;
use sentigrade_analyzer::{AccuracyReporter, AnalyzerKind};
use sentigrade_core::{AppError, AppResult};
use sentigrade_dataset::LabeledDataset;
use std::path::Path;

pub fn build_report_output(dataset: &LabeledDataset, reporter: &dyn AccuracyReporter) -> String {
    let mut out = String::new();
    for (idx, analyzer) in AnalyzerKind::ALL.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("--- {analyzer} Accuracy Report ---\n"));
        match reporter.generate_accuracy_report(dataset, *analyzer) {
            Ok(report) => out.push_str(&render_report_body(&report)),
            Err(err) => {
                log::warn!("{analyzer} accuracy report failed: {}", err.message());
                out.push_str(&format!("Error: {}\n", err.message()));
            }
        }
    }
    out
}

pub fn write_report_output(
    out_path: &Path,
    dataset: &LabeledDataset,
    reporter: &dyn AccuracyReporter,
) -> AppResult<()> {
    let output = build_report_output(dataset, reporter);
    std::fs::write(out_path, output).map_err(|e| {
        AppError::internal(format!("failed to write {}: {e}", out_path.display()))
    })?;
    Ok(())
}
