//! Request and response structures for the chat-completion endpoint.
//！此模組包含 chat-completion API 的請求和回應結構。

#[derive(serde::Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(serde::Serialize)]
pub struct ChatPayload<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(serde::Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(serde::Deserialize)]
pub struct ChatChoiceMessage {
    // 拒絕回答或工具呼叫時 content 可能為 null。
    #[serde(default)]
    pub content: Option<String>,
}
