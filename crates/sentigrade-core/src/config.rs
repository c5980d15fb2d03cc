use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "sentigrade.yaml";
pub const DEFAULT_DATASET_PATH: &str = "accuracy_report_data.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "accuracy_report_output.txt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub output_path: PathBuf,
    pub analyzers: AnalyzersConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            analyzers: AnalyzersConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let config = if let Some(path) = path {
            let data = std::fs::read_to_string(path).map_err(|e| {
                AppError::usage(format!("failed to read config {}: {e}", path.display()))
            })?;
            serde_yaml::from_str::<Config>(&data).map_err(|e| {
                AppError::usage(format!("failed to parse config {}: {e}", path.display()))
            })?
        } else {
            Config::default()
        };

        Ok(config)
    }

    pub fn load_default() -> AppResult<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load(Some(path))
        } else {
            Self::load(None)
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err(AppError::usage("dataset_path is empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::usage("output_path is empty"));
        }
        self.analyzers.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyzersConfig {
    pub textblob: BackendConfig,
    pub huggingface: BackendConfig,
}

impl AnalyzersConfig {
    pub fn validate(&self) -> AppResult<()> {
        self.textblob.validate("analyzers.textblob")?;
        self.huggingface.validate("analyzers.huggingface")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    fn validate(&self, field: &str) -> AppResult<()> {
        if self.timeout_secs == 0 {
            return Err(AppError::usage(format!(
                "{field}.timeout_secs must be > 0"
            )));
        }
        if let Some(endpoint) = &self.endpoint {
            if endpoint.trim().is_empty() {
                return Err(AppError::usage(format!("{field}.endpoint is empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_fixed_paths() {
        let config = Config::default();
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET_PATH));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(config.analyzers.textblob.endpoint.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let yaml = r#"
analyzers:
  huggingface:
    endpoint: "http://127.0.0.1:8091/predict"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET_PATH));
        assert!(config.analyzers.textblob.endpoint.is_none());
        assert_eq!(
            config.analyzers.huggingface.endpoint.as_deref(),
            Some("http://127.0.0.1:8091/predict")
        );
        assert_eq!(
            config.analyzers.huggingface.timeout_secs,
            DEFAULT_TIMEOUT_SECS
        );
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.analyzers.textblob.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Usage);
        assert!(err.message().contains("analyzers.textblob"));
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let mut config = Config::default();
        config.analyzers.huggingface.endpoint = Some("  ".to_string());
        assert!(config.validate().is_err());
    }
}
