use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

use crate::config::ApiSettings;

use super::models::{ChatMessage, ChatPayload, ChatResponse};
use super::{Language, TranslationError, Translator};

/// `Translator` 的 HTTP 實作，對 OpenAI 相容的 chat-completion 端點發出單次請求。
///
/// 不設定逾時也不重試，沿用 `reqwest` 的預設傳輸行為。
pub struct OpenAiTranslator {
    /// `reqwest` 的非同步 HTTP 客戶端。
    client: Client,
    endpoint: String,
    /// 建立時解析的金鑰；缺少時每次呼叫都會在送出前失敗。
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiTranslator {
    /// 根據提供的設定建立一個新的 `OpenAiTranslator`。
    pub fn new(settings: &ApiSettings) -> Self {
        let endpoint = settings.resolved_endpoint();
        info!(
            "Initialized OpenAiTranslator: model={}, endpoint={}",
            settings.model, endpoint
        );
        Self {
            client: Client::new(),
            endpoint,
            api_key: settings.resolved_api_key(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("Translation refused: no API key configured");
            return Err(TranslationError::MissingApiKey);
        };

        let instruction = build_instruction(target);
        let payload = ChatPayload {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &instruction,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let headers = build_headers(api_key)?;
        let response = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        debug!("Translation endpoint answered {}", status);
        if status == StatusCode::UNAUTHORIZED {
            return Err(TranslationError::Unauthorized);
        }
        if !status.is_success() {
            return Err(TranslationError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        extract_translation(&body)
    }
}

/// 建構系統指令，要求模型只輸出譯文。
fn build_instruction(target: Language) -> String {
    format!(
        "You are a professional translator. Translate the following text to {}. \
         Provide only the translation without any explanations or additional text.",
        target.display_name()
    )
}

/// 根據金鑰建構 HTTP 標頭。
fn build_headers(api_key: &str) -> Result<HeaderMap, TranslationError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// 取出第一個選項的訊息內容並修剪空白。
fn extract_translation(body: &str) -> Result<String, TranslationError> {
    let data: ChatResponse = serde_json::from_str(body)
        .map_err(|err| TranslationError::MalformedResponse(err.to_string()))?;
    data.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| TranslationError::MalformedResponse("no message content in choices".into()))
}
