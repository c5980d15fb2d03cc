use crate::metrics::build_accuracy_report;
use crate::model::{AccuracyReport, AnalyzerKind};
use crate::provider::{HttpProvider, MockProvider, SentimentProvider};
use sentigrade_core::config::{AnalyzersConfig, BackendConfig};
use sentigrade_core::{AppError, AppResult};
use sentigrade_dataset::LabeledDataset;
use std::time::Duration;

/// The external collaborator contract: one call per analyzer backend,
/// returning either a populated report or an error for that backend.
pub trait AccuracyReporter {
    fn generate_accuracy_report(
        &self,
        dataset: &LabeledDataset,
        analyzer: AnalyzerKind,
    ) -> AppResult<AccuracyReport>;
}

#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    textblob: BackendConfig,
    huggingface: BackendConfig,
}

impl ProviderRegistry {
    pub fn from_config(config: &AnalyzersConfig) -> Self {
        Self {
            textblob: config.textblob.clone(),
            huggingface: config.huggingface.clone(),
        }
    }

    fn backend(&self, analyzer: AnalyzerKind) -> &BackendConfig {
        match analyzer {
            AnalyzerKind::TextBlob => &self.textblob,
            AnalyzerKind::HuggingFace => &self.huggingface,
        }
    }

    fn provider_for(&self, analyzer: AnalyzerKind) -> AppResult<Box<dyn SentimentProvider>> {
        let backend = self.backend(analyzer);
        let endpoint = backend.endpoint.as_deref().ok_or_else(|| {
            AppError::analyzer(format!(
                "analyzer backend '{analyzer}' is not configured; set analyzers.{}.endpoint",
                analyzer.config_key()
            ))
        })?;

        if let Some(mock) = MockProvider::from_endpoint(endpoint) {
            return Ok(Box::new(mock));
        }
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return Ok(Box::new(HttpProvider::new(
                endpoint.to_string(),
                Duration::from_secs(backend.timeout_secs),
            )));
        }
        Err(AppError::usage(format!(
            "invalid analyzers.{}.endpoint '{endpoint}'; expected http(s):// or mock://",
            analyzer.config_key()
        )))
    }
}

impl AccuracyReporter for ProviderRegistry {
    fn generate_accuracy_report(
        &self,
        dataset: &LabeledDataset,
        analyzer: AnalyzerKind,
    ) -> AppResult<AccuracyReport> {
        let provider = self.provider_for(analyzer)?;
        let texts = dataset.texts();
        let predictions = provider.predict(&texts)?;
        if predictions.len() != dataset.len() {
            return Err(AppError::validation(format!(
                "analyzer '{analyzer}' returned {} predictions for {} samples",
                predictions.len(),
                dataset.len()
            )));
        }
        log::debug!(
            "{analyzer} returned {} predictions",
            predictions.len()
        );

        let predicted: Vec<&str> = predictions.iter().map(String::as_str).collect();
        build_accuracy_report(&dataset.labels(), &predicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentigrade_dataset::LabeledSample;

    fn sample_dataset() -> LabeledDataset {
        LabeledDataset::from_samples(vec![
            LabeledSample {
                text: "Love it".to_string(),
                sentiment: "positive".to_string(),
            },
            LabeledSample {
                text: "Best purchase this year".to_string(),
                sentiment: "positive".to_string(),
            },
            LabeledSample {
                text: "Broke after a week".to_string(),
                sentiment: "negative".to_string(),
            },
        ])
    }

    fn registry(textblob: Option<&str>, huggingface: Option<&str>) -> ProviderRegistry {
        let mut config = AnalyzersConfig::default();
        config.textblob.endpoint = textblob.map(|s| s.to_string());
        config.huggingface.endpoint = huggingface.map(|s| s.to_string());
        ProviderRegistry::from_config(&config)
    }

    #[test]
    fn mock_backend_produces_a_full_report() {
        let registry = registry(Some("mock://positive"), None);
        let report = registry
            .generate_accuracy_report(&sample_dataset(), AnalyzerKind::TextBlob)
            .unwrap();
        assert!((report.accuracy - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(report.labels, vec!["negative", "positive"]);
        assert_eq!(report.confusion_matrix, vec![vec![0, 1], vec![0, 2]]);
    }

    #[test]
    fn unconfigured_backend_is_an_analyzer_error() {
        let registry = registry(None, Some("mock://positive"));
        let err = registry
            .generate_accuracy_report(&sample_dataset(), AnalyzerKind::TextBlob)
            .unwrap_err();
        assert_eq!(err.kind(), sentigrade_core::ErrorKind::Analyzer);
        assert!(err.message().contains("analyzers.textblob.endpoint"));
    }

    #[test]
    fn one_backend_failing_leaves_the_other_usable() {
        let registry = registry(Some("mock://fail"), Some("mock://positive"));
        assert!(registry
            .generate_accuracy_report(&sample_dataset(), AnalyzerKind::TextBlob)
            .is_err());
        assert!(registry
            .generate_accuracy_report(&sample_dataset(), AnalyzerKind::HuggingFace)
            .is_ok());
    }

    #[test]
    fn unknown_endpoint_scheme_is_rejected() {
        let registry = registry(Some("ftp://nope"), None);
        let err = registry
            .generate_accuracy_report(&sample_dataset(), AnalyzerKind::TextBlob)
            .unwrap_err();
        assert_eq!(err.kind(), sentigrade_core::ErrorKind::Usage);
    }

    #[test]
    fn empty_dataset_is_reported_as_an_error() {
        let registry = registry(Some("mock://positive"), None);
        let err = registry
            .generate_accuracy_report(&LabeledDataset::default(), AnalyzerKind::TextBlob)
            .unwrap_err();
        assert_eq!(err.message(), "dataset is empty");
    }
}
