use sentigrade_core::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LabeledSample {
    pub text: String,
    pub sentiment: String,
}

#[derive(Debug, Clone, Default)]
pub struct LabeledDataset {
    samples: Vec<LabeledSample>,
}

impl LabeledDataset {
    pub fn from_samples(samples: Vec<LabeledSample>) -> Self {
        Self { samples }
    }

    pub fn from_csv_path(path: &Path) -> AppResult<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            AppError::usage(format!("failed to read dataset {}: {e}", path.display()))
        })?;
        let mut samples = Vec::new();
        for row in reader.deserialize() {
            let sample: LabeledSample = row.map_err(|e| {
                AppError::validation(format!("failed to parse dataset {}: {e}", path.display()))
            })?;
            samples.push(sample);
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.sentiment.as_str()).collect()
    }
}
