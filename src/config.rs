use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};

/// 未指定任何端點時使用的 chat-completion API。
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// 覆寫設定檔路徑的環境變數。
pub const CONFIG_PATH_ENV: &str = "LINGO_CONFIG";

/// 應用程式設定的頂層結構，通常從 `config/lingo.toml` 載入。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorSettings {
    /// 翻譯 API 的連線設定。
    #[serde(default)]
    pub api: ApiSettings,
    /// 日誌輸出設定。
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl TranslatorSettings {
    /// 從工作區目錄讀取設定。
    /// 優先使用 `LINGO_CONFIG` 指定的路徑；若 `config/lingo.toml` 不存在則回傳預設值。
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let config_path = env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| workspace_root.join("config/lingo.toml"));
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            debug!("No settings file at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// 讀取並解析指定路徑的設定檔。
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("讀取設定失敗: {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("解析設定失敗: {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// 檢查必要的環境設定，並對每個缺少的變數記錄錯誤。
    ///
    /// 缺少憑證不會中止啟動；真正的攔截點在每次翻譯呼叫之前。
    pub fn validate_environment(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.api.resolved_api_key().is_none() {
            missing.push(self.api.api_key_env.clone());
        }
        if !missing.is_empty() {
            error!("Missing required environment variables: {}", missing.join(", "));
            error!("Set them in the environment or add api_key to config/lingo.toml");
        }
        missing
    }
}

/// 翻譯 API 的設定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// 直接在設定中指定的 API 金鑰。
    #[serde(default)]
    pub api_key: Option<String>,
    /// 用於讀取 API 金鑰的環境變數名稱。
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// 覆寫 API 端點。
    #[serde(default)]
    pub base_url: Option<String>,
    /// 用於讀取端點覆寫值的環境變數名稱。
    #[serde(default = "default_base_url_env")]
    pub base_url_env: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// 取樣溫度，保持偏低以取得穩定的譯文。
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// 單次回應的 token 上限。
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl ApiSettings {
    /// 解析並回傳最終的 API 金鑰。
    /// 優先順序：`api_key` 欄位 > `api_key_env` 環境變數；空白值視為未設定。
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from)
            .or_else(|| non_blank_env(&self.api_key_env))
    }

    /// 解析並回傳最終的端點 URL。
    /// 優先順序：`base_url` 欄位 > `base_url_env` 環境變數 > `DEFAULT_ENDPOINT`。
    pub fn resolved_endpoint(&self) -> String {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from)
            .or_else(|| non_blank_env(&self.base_url_env))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_api_key_env(),
            base_url: None,
            base_url_env: default_base_url_env(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// 日誌設定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// 日誌檔路徑；終端機由 UI 佔用，因此日誌一律寫入檔案。
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    #[serde(default = "default_log_level")]
    pub level: String,
    /// log4rs YAML 設定檔（可選），存在時優先使用。
    #[serde(default)]
    pub config: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
            config: None,
        }
    }
}

fn non_blank_env(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_base_url_env() -> String {
    "OPENAI_API_URL".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("lingo.log")
}

fn default_log_level() -> String {
    "info".to_string()
}
