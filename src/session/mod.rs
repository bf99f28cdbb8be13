//! 翻譯流程的畫面狀態機。
//!
//! 此模組描述輸入、對外翻譯呼叫與結果/錯誤顯示之間的先後順序：
//! `Idle -> Translating -> Result | Error -> Idle`。

/// `orchestrator` 模組：`Orchestrator`，串接畫面事件、session 狀態與翻譯客戶端。
pub mod orchestrator;

/// `state` 模組：`Session` 與 `Phase`，純資料的狀態轉換。
pub mod state;

/// `view` 模組：協調器所依賴的 `View` trait 與 `ViewEvent`。
pub mod view;

pub use orchestrator::{Completion, EMPTY_INPUT_NOTICE, Orchestrator, Settled, SubmitOutcome};
pub use state::{FailedTranslation, Phase, Session};
pub use view::{Screen, View, ViewEvent};
