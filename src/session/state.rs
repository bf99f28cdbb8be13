use crate::translation::{
    ErrorKind, Language, TranslationError, TranslationRequest, TranslationResponse,
};

/// 翻譯失敗後保留給畫面的內容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedTranslation {
    pub original_text: String,
    pub target_language: Language,
    pub message: String,
    pub kind: ErrorKind,
}

/// 畫面狀態機的階段。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// 等待使用者輸入。
    #[default]
    Idle,
    /// 請求進行中；送出按鈕停用。
    Translating(TranslationRequest),
    /// 顯示原文與譯文。
    Result(TranslationResponse),
    /// 顯示原文與錯誤訊息。
    Error(FailedTranslation),
}

/// 每個應用程式實例唯一的可變狀態。
///
/// `epoch` 在每次重設時遞增；進行中的請求記住發出時的 epoch，
/// 完成時若已不相符即代表畫面早已被清空，結果必須丟棄。
#[derive(Debug, Default)]
pub struct Session {
    selected_language: Language,
    phase: Phase,
    epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_language(&self) -> Language {
        self.selected_language
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.phase, Phase::Translating(_))
    }

    /// 變更下一次送出使用的語言；不影響進行中的請求。
    pub fn select_language(&mut self, language: Language) {
        self.selected_language = language;
    }

    /// `Idle -> Translating`。非 `Idle` 時回傳 `None`。
    pub fn begin(&mut self, text: String) -> Option<TranslationRequest> {
        if self.phase != Phase::Idle {
            return None;
        }
        let request = TranslationRequest {
            text,
            target_language: self.selected_language,
        };
        self.phase = Phase::Translating(request.clone());
        Some(request)
    }

    /// `Translating -> Result | Error`。
    ///
    /// 若 `epoch` 已過期或目前不在 `Translating`，回傳 `None` 且狀態不變。
    pub fn finish(
        &mut self,
        epoch: u64,
        outcome: &Result<String, TranslationError>,
    ) -> Option<&Phase> {
        if epoch != self.epoch {
            return None;
        }
        let Phase::Translating(request) = &self.phase else {
            return None;
        };
        let request = request.clone();
        self.phase = match outcome {
            Ok(translated) => Phase::Result(TranslationResponse::new(request, translated.clone())),
            Err(err) => Phase::Error(FailedTranslation {
                original_text: request.text,
                target_language: request.target_language,
                message: err.to_string(),
                kind: err.kind(),
            }),
        };
        Some(&self.phase)
    }

    /// 回到預設值：`Idle`、法文，並讓所有進行中的請求失效。
    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.phase = Phase::Idle;
        self.selected_language = Language::default();
    }
}
