use crate::model::{AccuracyReport, ClassMetrics, ReportRow};
use sentigrade_core::{AppError, AppResult};
use std::collections::{BTreeMap, BTreeSet};

pub const MACRO_AVG_ROW: &str = "macro avg";
pub const WEIGHTED_AVG_ROW: &str = "weighted avg";

pub fn build_accuracy_report(y_true: &[&str], y_pred: &[&str]) -> AppResult<AccuracyReport> {
    if y_true.len() != y_pred.len() {
        return Err(AppError::validation(format!(
            "prediction count {} does not match dataset size {}",
            y_pred.len(),
            y_true.len()
        )));
    }
    if y_true.is_empty() {
        return Err(AppError::validation("dataset is empty"));
    }

    let labels: Vec<String> = y_true
        .iter()
        .chain(y_pred.iter())
        .map(|label| label.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let index: BTreeMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(idx, label)| (label.as_str(), idx))
        .collect();

    let mut matrix = vec![vec![0u64; labels.len()]; labels.len()];
    let mut correct = 0u64;
    for (truth, predicted) in y_true.iter().zip(y_pred.iter()) {
        matrix[index[truth]][index[predicted]] += 1;
        if truth == predicted {
            correct += 1;
        }
    }

    let mut rows = Vec::with_capacity(labels.len() + 2);
    for (idx, label) in labels.iter().enumerate() {
        rows.push(ReportRow {
            name: label.clone(),
            metrics: class_metrics(&matrix, idx),
        });
    }

    let total = y_true.len() as u64;
    let macro_metrics = macro_average(&rows, total);
    let weighted_metrics = weighted_average(&rows, total);
    rows.push(ReportRow {
        name: MACRO_AVG_ROW.to_string(),
        metrics: macro_metrics,
    });
    rows.push(ReportRow {
        name: WEIGHTED_AVG_ROW.to_string(),
        metrics: weighted_metrics,
    });

    Ok(AccuracyReport {
        rows,
        confusion_matrix: matrix,
        labels,
        accuracy: correct as f64 / total as f64,
    })
}

fn class_metrics(matrix: &[Vec<u64>], class: usize) -> ClassMetrics {
    let tp = matrix[class][class];
    let support: u64 = matrix[class].iter().sum();
    let predicted: u64 = matrix.iter().map(|row| row[class]).sum();

    let precision = ratio(tp, predicted);
    let recall = ratio(tp, support);
    let f1_score = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    ClassMetrics {
        precision,
        recall,
        f1_score,
        support,
    }
}

fn macro_average(class_rows: &[ReportRow], total: u64) -> ClassMetrics {
    let count = class_rows.len() as f64;
    ClassMetrics {
        precision: class_rows.iter().map(|r| r.metrics.precision).sum::<f64>() / count,
        recall: class_rows.iter().map(|r| r.metrics.recall).sum::<f64>() / count,
        f1_score: class_rows.iter().map(|r| r.metrics.f1_score).sum::<f64>() / count,
        support: total,
    }
}

fn weighted_average(class_rows: &[ReportRow], total: u64) -> ClassMetrics {
    let weight = |row: &ReportRow| row.metrics.support as f64 / total as f64;
    ClassMetrics {
        precision: class_rows
            .iter()
            .map(|r| r.metrics.precision * weight(r))
            .sum(),
        recall: class_rows.iter().map(|r| r.metrics.recall * weight(r)).sum(),
        f1_score: class_rows
            .iter()
            .map(|r| r.metrics.f1_score * weight(r))
            .sum(),
        support: total,
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
