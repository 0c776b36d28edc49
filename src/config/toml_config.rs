use crate::utils::error::{EduSpendError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EXCHANGE_ENDPOINT: &str = "https://api.exchangerate.host/convert";
pub const DEFAULT_MODEL_PATH: &str = "models/tca_model.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub exchange: ExchangeConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// No value means the HTTP client's own default.
    pub timeout_seconds: Option<u64>,
    pub access_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_endpoint() -> String {
    DEFAULT_EXCHANGE_ENDPOINT.to_string()
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
            access_key: None,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EduSpendError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when it exists, otherwise returns the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "No config file at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EduSpendError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EXCHANGE_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| EduSpendError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// An access key still shaped like `${VAR}` means the variable was unset.
    pub fn access_key(&self) -> Option<&str> {
        self.exchange
            .access_key
            .as_deref()
            .filter(|key| !key.is_empty() && !key.starts_with("${"))
    }

    pub fn json_output(&self) -> bool {
        self.output.format == "json"
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("exchange.endpoint", &self.exchange.endpoint)?;

        if let Some(timeout) = self.exchange.timeout_seconds {
            validation::validate_positive_number("exchange.timeout_seconds", timeout, 1)?;
        }

        validation::validate_path("model.path", &self.model.path)?;
        validation::validate_one_of("output.format", &self.output.format, &["text", "json"])?;

        Ok(())
    }
}
