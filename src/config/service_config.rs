use crate::utils::error::{QaError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const TOKEN_ENV_VAR: &str = "HF_API_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_index_path")]
    pub index_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_translation_endpoint")]
    pub translation_endpoint: String,
    #[serde(default = "default_table_qa_endpoint")]
    pub table_qa_endpoint: String,
    /// 配置檔中寫 "${HF_API_TOKEN}"，載入時替換為環境變數值
    pub api_token: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_port() -> u16 {
    8080
}

fn default_index_path() -> String {
    "static/index.html".to_string()
}

fn default_translation_endpoint() -> String {
    "https://api-inference.huggingface.co/models/Helsinki-NLP/opus-mt-id-en".to_string()
}

fn default_table_qa_endpoint() -> String {
    "https://api-inference.huggingface.co/models/google/tapas-base-finetuned-wtq".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            index_path: default_index_path(),
        }
    }
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 未提供配置檔時的預設配置，token 直接取自環境變數
    pub fn from_env() -> Result<Self> {
        let api_token =
            std::env::var(TOKEN_ENV_VAR).map_err(|_| QaError::MissingConfigError {
                field: format!("upstream.api_token ({} environment variable)", TOKEN_ENV_VAR),
            })?;

        Ok(Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig {
                translation_endpoint: default_translation_endpoint(),
                table_qa_endpoint: default_table_qa_endpoint(),
                api_token,
                timeout_seconds: None,
            },
        })
    }

    /// 替換環境變數 (例如 ${HF_API_TOKEN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QaError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url(
            "upstream.translation_endpoint",
            &self.upstream.translation_endpoint,
        )?;
        validation::validate_url("upstream.table_qa_endpoint", &self.upstream.table_qa_endpoint)?;
        validation::validate_non_empty_string("upstream.api_token", &self.upstream.api_token)?;

        // 環境變數不存在時替換會保留 ${VAR} 原樣，必須擋下來
        if self.upstream.api_token.contains("${") {
            return Err(QaError::InvalidConfigValueError {
                field: "upstream.api_token".to_string(),
                value: self.upstream.api_token.clone(),
                reason: "Unresolved environment variable in token".to_string(),
            });
        }

        validation::validate_path("server.index_path", &self.server.index_path)?;

        if let Some(timeout) = self.upstream.timeout_seconds {
            validation::validate_range("upstream.timeout_seconds", timeout, 1, 600)?;
        }

        Ok(())
    }
}
