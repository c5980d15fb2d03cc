use sentigrade_analyzer::AccuracyReport;

const METRIC_HEADERS: [&str; 4] = ["precision", "recall", "f1-score", "support"];
const COLUMN_GAP: usize = 2;

pub fn render_report_body(report: &AccuracyReport) -> String {
    let mut out = String::new();
    out.push_str("Classification Report:\n");
    out.push_str(&render_classification_report(report));
    out.push('\n');
    out.push_str("Confusion Matrix:\n");
    out.push_str(&render_confusion_matrix(report));
    out.push('\n');
    out.push_str(&format!("Overall Accuracy: {:.2}\n", report.accuracy));
    out
}

pub fn render_classification_report(report: &AccuracyReport) -> String {
    let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
    let cells: Vec<[String; 4]> = report
        .rows
        .iter()
        .map(|row| {
            [
                format!("{:.2}", row.metrics.precision),
                format!("{:.2}", row.metrics.recall),
                format!("{:.2}", row.metrics.f1_score),
                row.metrics.support.to_string(),
            ]
        })
        .collect();

    let headers: Vec<String> = METRIC_HEADERS.iter().map(|h| h.to_string()).collect();
    render_table(&names, &headers, &cells_as_rows(&cells))
}

pub fn render_confusion_matrix(report: &AccuracyReport) -> String {
    let names: Vec<String> = report
        .labels
        .iter()
        .map(|label| format!("True {label}"))
        .collect();
    let headers: Vec<String> = report
        .labels
        .iter()
        .map(|label| format!("Predicted {label}"))
        .collect();
    let cells: Vec<Vec<String>> = report
        .confusion_matrix
        .iter()
        .map(|row| row.iter().map(|count| count.to_string()).collect())
        .collect();

    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    render_table(&names, &headers, &cells)
}

fn cells_as_rows(cells: &[[String; 4]]) -> Vec<Vec<String>> {
    cells.iter().map(|row| row.to_vec()).collect()
}

fn render_table(names: &[&str], headers: &[String], rows: &[Vec<String>]) -> String {
    let name_width = names.iter().map(|n| n.len()).max().unwrap_or(0);
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|row| row[col].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(name_width));
    for (col, header) in headers.iter().enumerate() {
        out.push_str(&" ".repeat(COLUMN_GAP));
        out.push_str(&format!("{:>width$}", header, width = widths[col]));
    }
    out.push('\n');

    for (name, row) in names.iter().zip(rows.iter()) {
        out.push_str(&format!("{:<width$}", name, width = name_width));
        for (col, cell) in row.iter().enumerate() {
            out.push_str(&" ".repeat(COLUMN_GAP));
            out.push_str(&format!("{:>width$}", cell, width = widths[col]));
        }
        out.push('\n');
    }
    out
}
