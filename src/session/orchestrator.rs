use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::state::{Phase, Session};
use super::view::{View, ViewEvent};
use crate::translation::{Language, TranslationError, Translator};

/// 輸入為空時顯示的阻斷式提示。
pub const EMPTY_INPUT_NOTICE: &str = "Please enter some text to translate";

/// 背景翻譯任務完成後傳回的結果。
#[derive(Debug)]
pub struct Completion {
    /// 發出請求時的 session epoch。
    epoch: u64,
    result: Result<String, TranslationError>,
}

/// `submit` 的處理結果，供呼叫端更新狀態列。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 已發出請求。
    Started(Language),
    /// 輸入為空，已提示使用者。
    Rejected,
    /// 目前不在 `Idle`，送出按鈕應處於停用或隱藏狀態。
    Ignored,
}

/// 完成事件套用後的結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Translated,
    Failed,
    /// 過期的結果，畫面未被修改。
    Discarded,
}

/// 請求協調器：持有 session 狀態，串接畫面與翻譯客戶端。
///
/// 翻譯客戶端與畫面都由建構子注入。每次送出會 `tokio::spawn` 一個任務，
/// 任務完成後透過 MPSC channel 把結果送回來，由 `poll_completions`（或 `settle`）套用。
pub struct Orchestrator<V: View> {
    translator: Arc<dyn Translator>,
    view: V,
    session: Session,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl<V: View> Orchestrator<V> {
    pub fn new(translator: Arc<dyn Translator>, view: V) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            translator,
            view,
            session: Session::new(),
            completions_tx: tx,
            completions_rx: rx,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn translator_name(&self) -> &str {
        self.translator.name()
    }

    /// 將畫面事件分派到對應的狀態轉換。
    pub fn handle_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::TranslateClicked => {
                self.submit();
            }
            ViewEvent::LanguageChanged(value) => self.change_language(&value),
            ViewEvent::StartOver => self.reset(),
        }
    }

    /// `Idle --submit--> Translating`，輸入為空時停留在 `Idle`。
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.session.phase() != &Phase::Idle {
            debug!("Submit ignored while {:?}", self.session.phase());
            return SubmitOutcome::Ignored;
        }

        let text = self.view.input_text();
        if text.trim().is_empty() {
            info!("Submit rejected: input is empty");
            self.view.show_alert(EMPTY_INPUT_NOTICE);
            return SubmitOutcome::Rejected;
        }

        let Some(request) = self.session.begin(text) else {
            return SubmitOutcome::Ignored;
        };
        let language = request.target_language;
        info!(
            "Submitting {} chars for translation to {} via {}",
            request.text.chars().count(),
            language,
            self.translator.name()
        );
        self.view.show_translating();

        let epoch = self.session.epoch();
        let translator = Arc::clone(&self.translator);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = translator.translate(&request.text, language).await;
            let _ = tx.send(Completion { epoch, result });
        });

        SubmitOutcome::Started(language)
    }

    /// 接受任何狀態下的語言變更；只影響下一次送出。
    pub fn change_language(&mut self, value: &str) {
        let language = Language::from_ui_value(value);
        self.session.select_language(language);
        info!("Selected language: {}", language);
    }

    /// 回到 `Idle` 並清空畫面。進行中的請求不會被取消，但其結果會被丟棄。
    pub fn reset(&mut self) {
        if self.session.in_flight() {
            debug!("Reset while a translation is in flight; its result will be discarded");
        }
        self.session.reset();
        self.view.clear();
        self.view.select_language(self.session.selected_language());
        self.view.hide_translating();
        self.view.show_input_view();
        self.view.focus_input();
    }

    /// 非阻塞地套用所有已完成的請求，回傳處理的數量。
    pub fn poll_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// 等待下一個完成事件並套用。
    pub async fn settle(&mut self) -> Settled {
        match self.completions_rx.recv().await {
            Some(completion) => self.apply(completion),
            // 發送端由 self 持有，channel 不會關閉。
            None => Settled::Discarded,
        }
    }

    /// `Translating --success/failure--> Result | Error`。
    pub fn apply(&mut self, completion: Completion) -> Settled {
        let Completion { epoch, result } = completion;
        let Some(phase) = self.session.finish(epoch, &result) else {
            warn!(
                "Discarding stale translation result (epoch {} vs current {})",
                epoch,
                self.session.epoch()
            );
            return Settled::Discarded;
        };

        self.view.hide_translating();
        match phase {
            Phase::Result(response) => {
                self.view.display_results(response);
                self.view.show_results_view();
                Settled::Translated
            }
            Phase::Error(failure) => {
                error!("Translation failed: {}", failure.message);
                self.view
                    .display_error(&failure.original_text, &failure.message);
                self.view.show_results_view();
                if let Err(err) = &result
                    && err.is_credential_problem()
                {
                    self.view.show_alert(&failure.message);
                }
                Settled::Failed
            }
            Phase::Idle | Phase::Translating(_) => Settled::Discarded,
        }
    }
}
