use ratatui::style::Color;

// 背景與文字
pub const BG_PRIMARY: Color = Color::Rgb(16, 18, 24);
pub const BG_PANEL: Color = Color::Rgb(24, 27, 36);
pub const FG_PRIMARY: Color = Color::Rgb(214, 218, 226);
pub const FG_DIM: Color = Color::Rgb(120, 126, 140);

// 標題列與狀態列
pub const BAR_BG: Color = Color::Rgb(38, 70, 140);
pub const BAR_TEXT: Color = Color::Rgb(236, 241, 255);

// 提示視窗
pub const MENU_BG: Color = Color::Rgb(64, 58, 84);
pub const MENU_BORDER: Color = Color::Rgb(200, 190, 230);
pub const MENU_TEXT: Color = Color::Rgb(245, 243, 250);

// 面板邊框
pub const BORDER_IDLE: Color = Color::Rgb(72, 110, 130);
pub const BORDER_FOCUS: Color = Color::Rgb(214, 140, 40);
pub const PANEL_HIGHLIGHT_BG: Color = Color::Rgb(92, 128, 220);

// 按鈕
pub const BUTTON_BG: Color = Color::Rgb(46, 132, 96);
pub const BUTTON_TEXT: Color = Color::Rgb(250, 250, 250);
pub const BUTTON_DISABLED_BG: Color = Color::Rgb(56, 58, 66);

pub const ERROR_FG: Color = Color::Rgb(232, 96, 96);
