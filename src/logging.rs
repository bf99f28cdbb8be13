//! 日誌初始化。
//!
//! 終端機畫面由 UI 佔用，所以所有日誌都寫入檔案。

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::LoggingSettings;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

/// 依照設定安裝全域 logger。
///
/// 優先順序：
/// 1. `[logging].config` 指向的 log4rs YAML 設定檔。
/// 2. 設定了 `RUST_LOG` 時，使用 `env_logger` 並將輸出導向日誌檔。
/// 3. 以 `[logging].level` 建立 log4rs 檔案 appender。
pub fn init(settings: &LoggingSettings) -> Result<()> {
    if let Some(path) = settings.config.as_ref()
        && path.exists()
    {
        log4rs::init_file(path, Default::default())
            .with_context(|| format!("載入 log4rs 設定失敗: {}", path.display()))?;
        return Ok(());
    }

    if std::env::var_os("RUST_LOG").is_some() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.file)
            .with_context(|| format!("開啟日誌檔失敗: {}", settings.file.display()))?;
        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()
            .context("初始化 env_logger 失敗")?;
        return Ok(());
    }

    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&settings.file)
        .with_context(|| format!("開啟日誌檔失敗: {}", settings.file.display()))?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(parse_level(&settings.level)))
        .context("建立 log4rs 設定失敗")?;
    log4rs::init_config(config).context("初始化 log4rs 失敗")?;
    Ok(())
}

/// 無法辨識的等級退回 `info`。
fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}
