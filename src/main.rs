pub mod app;
pub mod config;
pub mod event;
pub mod logging;
pub mod session;
pub mod translation;
pub mod tui;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use app::App;
use config::TranslatorSettings;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use event::Event;
use futures_util::StreamExt;
use log::{error, info};
use translation::openai::OpenAiTranslator;
use tui::{init, restore};
use ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    let workspace_root = env::current_dir().context("無法取得目前工作目錄")?;
    let settings = TranslatorSettings::load(&workspace_root)?;
    logging::init(&settings.logging)?;
    info!("lingo {} starting", env!("CARGO_PKG_VERSION"));

    let missing = settings.validate_environment();
    let translator = Arc::new(OpenAiTranslator::new(&settings.api));
    let mut app = App::new(translator);
    if !missing.is_empty() {
        app.status_message = format!("Missing environment variables: {}", missing.join(", "));
    }

    let mut tui = init()?;
    let outcome = run(&mut tui, &mut app).await;
    restore()?;
    if let Err(err) = &outcome {
        error!("Terminal loop failed: {:#}", err);
    }
    info!("lingo exiting");
    outcome
}

async fn run(tui: &mut tui::Tui, app: &mut App) -> Result<()> {
    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(Duration::from_millis(100));

    while app.running {
        tui.draw(|frame| render(frame, app))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => Event::Key(key),
                    Some(Ok(CrosstermEvent::Resize(_, _))) => Event::Resize,
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                }
            }
        };

        app.handle_event(event);
    }
    Ok(())
}
