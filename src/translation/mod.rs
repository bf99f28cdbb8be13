//! 翻譯客戶端與其資料結構。
//!
//! 此模組定義了目標語言、單次翻譯的請求/回應，以及所有翻譯後端
//! 都必須實作的 `Translator` trait。實際的 HTTP 呼叫位於 `openai` 子模組。

/// `models` 模組：對外 chat-completion API 的請求與回應結構。
mod models;

/// `openai` 模組：透過 OpenAI 相容 API 完成翻譯的 `Translator` 實作。
pub mod openai;

use std::fmt;

use async_trait::async_trait;
use log::warn;

pub use openai::OpenAiTranslator;

/// 使用者可選擇的目標語言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    French,
    Spanish,
    Japanese,
}

impl Language {
    /// 依照 UI 上的顯示順序列出所有支援的語言。
    pub const ALL: [Language; 3] = [Language::French, Language::Spanish, Language::Japanese];

    /// 回傳語言在 UI 中使用的值（例如 `french`）。
    pub fn ui_value(self) -> &'static str {
        match self {
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Japanese => "japanese",
        }
    }

    /// 回傳語言的顯示名稱，同時也是翻譯指令中使用的名稱。
    pub fn display_name(self) -> &'static str {
        match self {
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Japanese => "Japanese",
        }
    }

    /// 解析 UI 值；無法辨識時回傳 `None`。
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.ui_value().eq_ignore_ascii_case(value))
    }

    /// 解析 UI 值，無法辨識時退回預設的法文。
    pub fn from_ui_value(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            warn!("Unrecognized language value {:?}, falling back to french", value);
            Language::default()
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 單次翻譯的輸入，於使用者送出時建立，呼叫結束後即丟棄。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: Language,
}

/// 成功翻譯後交給畫面顯示的結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub target_language: Language,
}

impl TranslationResponse {
    pub fn new(request: TranslationRequest, translated_text: String) -> Self {
        Self {
            original_text: request.text,
            translated_text,
            target_language: request.target_language,
        }
    }
}

/// 錯誤分類，決定錯誤在 UI 上的呈現方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 輸入為空，只在本地處理，不會送到客戶端。
    Validation,
    /// 缺少可用的憑證，請求從未送出。
    Configuration,
    /// 服務端拒絕憑證。
    Auth,
    /// 其他傳輸、狀態碼或回應格式錯誤。
    Request,
}

/// 翻譯客戶端可能回傳的錯誤。
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("OpenAI API key is not configured. Please check your configuration.")]
    MissingApiKey,
    #[error("OpenAI API key cannot be sent as a header value. Please check your configuration.")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Invalid API key. Please check your OpenAI API key.")]
    Unauthorized,
    #[error("API request failed: {0}")]
    Status(u16),
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned an unexpected response: {0}")]
    MalformedResponse(String),
}

impl TranslationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslationError::MissingApiKey | TranslationError::InvalidApiKey(_) => {
                ErrorKind::Configuration
            }
            TranslationError::Unauthorized => ErrorKind::Auth,
            TranslationError::Status(_)
            | TranslationError::Transport(_)
            | TranslationError::MalformedResponse(_) => ErrorKind::Request,
        }
    }

    /// 憑證相關的錯誤需要額外以阻斷式提示告知使用者。
    pub fn is_credential_problem(&self) -> bool {
        matches!(self.kind(), ErrorKind::Auth | ErrorKind::Configuration)
    }
}

/// 翻譯客戶端介面。
///
/// 每次呼叫都是獨立的：把 `(text, target)` 對應成一次對外請求，
/// 並回傳已修剪空白的譯文或分類過的錯誤。不重試，也不快取。
#[async_trait]
pub trait Translator: Send + Sync {
    /// 後端名稱，用於日誌與狀態列。
    fn name(&self) -> &str;

    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_ui_values() {
        assert_eq!(Language::parse("spanish"), Some(Language::Spanish));
        assert_eq!(Language::parse(" Japanese "), Some(Language::Japanese));
        assert_eq!(Language::parse("klingon"), None);
    }

    #[test]
    fn unknown_ui_value_falls_back_to_french() {
        assert_eq!(Language::from_ui_value("german"), Language::French);
        assert_eq!(Language::from_ui_value(""), Language::French);
    }

    #[test]
    fn error_kinds_follow_taxonomy() {
        assert_eq!(TranslationError::MissingApiKey.kind(), ErrorKind::Configuration);
        assert_eq!(TranslationError::Unauthorized.kind(), ErrorKind::Auth);
        assert_eq!(TranslationError::Status(500).kind(), ErrorKind::Request);
        assert!(TranslationError::Unauthorized.is_credential_problem());
        assert!(!TranslationError::Status(429).is_credential_problem());
    }

    #[test]
    fn auth_message_differs_from_request_message() {
        let auth = TranslationError::Unauthorized.to_string();
        let generic = TranslationError::Status(500).to_string();
        assert_ne!(auth, generic);
        assert_eq!(generic, "API request failed: 500");
    }
}
