use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyzerKind {
    TextBlob,
    HuggingFace,
}

impl AnalyzerKind {
    /// Report order is fixed: TextBlob first, then HuggingFace.
    pub const ALL: [AnalyzerKind; 2] = [AnalyzerKind::TextBlob, AnalyzerKind::HuggingFace];

    pub fn name(self) -> &'static str {
        match self {
            AnalyzerKind::TextBlob => "TextBlob",
            AnalyzerKind::HuggingFace => "HuggingFace",
        }
    }

    pub fn config_key(self) -> &'static str {
        match self {
            AnalyzerKind::TextBlob => "textblob",
            AnalyzerKind::HuggingFace => "huggingface",
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub rows: Vec<ReportRow>,
    pub confusion_matrix: Vec<Vec<u64>>,
    pub labels: Vec<String>,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub name: String,
    pub metrics: ClassMetrics,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub support: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzer_names_match_report_headers() {
        assert_eq!(AnalyzerKind::TextBlob.to_string(), "TextBlob");
        assert_eq!(AnalyzerKind::HuggingFace.to_string(), "HuggingFace");
    }

    #[test]
    fn fixed_order_is_textblob_then_huggingface() {
        assert_eq!(
            AnalyzerKind::ALL,
            [AnalyzerKind::TextBlob, AnalyzerKind::HuggingFace]
        );
    }
}
