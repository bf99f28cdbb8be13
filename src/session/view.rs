use crate::translation::{Language, TranslationResponse};

/// 協調器與畫面之間的邊界。
///
/// 協調器只依賴這個 trait，不關心實際的繪製技術；
/// 終端機介面與測試用的假畫面都實作它。
pub trait View {
    /// 目前輸入框的文字。
    fn input_text(&self) -> String;
    /// 目前選取的語言在 UI 上的原始值，可能無法辨識。
    fn selected_language(&self) -> String;
    /// 停用送出按鈕並顯示進度標籤。
    fn show_translating(&mut self);
    /// 重新啟用送出按鈕。
    fn hide_translating(&mut self);
    fn display_results(&mut self, response: &TranslationResponse);
    fn display_error(&mut self, original_text: &str, message: &str);
    /// 阻斷式提示，使用者確認前攔截所有輸入。
    fn show_alert(&mut self, message: &str);
    fn show_input_view(&mut self);
    fn show_results_view(&mut self);
    /// 清除輸入框、原文與譯文。
    fn clear(&mut self);
    fn select_language(&mut self, language: Language);
    fn focus_input(&mut self);
}

/// 畫面送往協調器的使用者事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// 按下翻譯按鈕。
    TranslateClicked,
    /// 語言選項變更，攜帶 UI 上的原始值。
    LanguageChanged(String),
    /// 按下「重新開始」。
    StartOver,
}

/// 畫面目前顯示的頁面。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 輸入文字與選擇語言。
    #[default]
    Input,
    /// 顯示原文與譯文（或錯誤訊息）。
    Results,
}
