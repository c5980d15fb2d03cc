use sentigrade_core::{AppError, AppResult};
use serde::Serialize;
use std::time::Duration;

pub trait SentimentProvider {
    fn predict(&self, texts: &[&str]) -> AppResult<Vec<String>>;
}

#[derive(Debug, Clone)]
pub struct HttpProvider {
    endpoint: String,
    timeout: Duration,
}

impl HttpProvider {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }
}

impl SentimentProvider for HttpProvider {
    fn predict(&self, texts: &[&str]) -> AppResult<Vec<String>> {
        let body = PredictRequest {
            texts: texts.iter().map(|t| t.to_string()).collect(),
        };
        let response = ureq::post(&self.endpoint)
            .timeout(self.timeout)
            .send_json(body)
            .map_err(|e| AppError::analyzer(format!("analyzer request failed: {e}")))?;
        let value: serde_json::Value = response
            .into_json()
            .map_err(|e| AppError::analyzer(format!("analyzer response parse error: {e}")))?;
        let labels = value
            .get("labels")
            .and_then(|v| v.as_array())
            .ok_or_else(|| AppError::analyzer("analyzer response missing 'labels'"))?;

        let mut predictions = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label
                .as_str()
                .ok_or_else(|| AppError::analyzer("analyzer response labels must be strings"))?;
            predictions.push(label.to_string());
        }
        Ok(predictions)
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    texts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockMode {
    Positive,
    Negative,
    Fail,
}

#[derive(Debug, Clone)]
pub struct MockProvider {
    mode: MockMode,
}

impl MockProvider {
    pub fn from_endpoint(endpoint: &str) -> Option<Self> {
        let mode = match endpoint {
            "mock://positive" => MockMode::Positive,
            "mock://negative" => MockMode::Negative,
            "mock://fail" => MockMode::Fail,
            _ => return None,
        };
        Some(Self { mode })
    }
}

impl SentimentProvider for MockProvider {
    fn predict(&self, texts: &[&str]) -> AppResult<Vec<String>> {
        let label = match self.mode {
            MockMode::Positive => "positive",
            MockMode::Negative => "negative",
            MockMode::Fail => return Err(AppError::analyzer("mock analyzer failure")),
        };
        Ok(vec![label.to_string(); texts.len()])
    }
}
