pub mod generate;
pub mod metrics;
pub mod model;
pub mod provider;

pub use generate::{AccuracyReporter, ProviderRegistry};
pub use metrics::build_accuracy_report;
pub use model::{AccuracyReport, AnalyzerKind, ClassMetrics, ReportRow};
pub use provider::{HttpProvider, MockProvider, SentimentProvider};
