//! `app` 模組是 lingo 終端機應用程式的核心。
//!
//! 它持有請求協調器與終端機畫面，把鍵盤事件轉成畫面事件，
//! 並在每次 tick 時套用背景翻譯任務的結果。

// --- 子模組宣告 ---

/// `keyboard` 模組：專門處理所有的鍵盤輸入事件。
mod keyboard;
/// `state` 模組：定義了 `App` 結構。
mod state;
/// `tick` 模組：處理應用程式的定時更新事件（tick）。
mod tick;
/// `view` 模組：`TerminalView`，協調器所使用的終端機畫面。
mod view;

// --- 公共 API 重新導出 ---
pub use state::App;
pub use view::{InputComposer, TerminalView};
