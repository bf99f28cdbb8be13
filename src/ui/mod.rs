use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::app::{App, TerminalView};
use crate::session::Screen;
use crate::translation::Language;

mod theme;
use theme::*;

const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 16;

pub fn render(f: &mut Frame<'_>, app: &App) {
    let size = f.size();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let block = Paragraph::new(format!(
            "Terminal too small, resize to at least {}x{}.",
            MIN_WIDTH, MIN_HEIGHT
        ))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("lingo")
                .borders(Borders::ALL)
                .style(Style::default().fg(FG_PRIMARY).bg(MENU_BG)),
        )
        .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY));
        f.render_widget(block, size);
        return;
    }

    let base = Block::default().style(Style::default().bg(BG_PRIMARY));
    f.render_widget(base, size);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);
    let title_area = vertical[0];
    let body = vertical[1];
    let status_area = vertical[2];

    render_title_bar(f, app, title_area);
    let view = app.view();
    match view.screen() {
        Screen::Input => render_input_screen(f, view, body),
        Screen::Results => render_results_screen(f, view, body),
    }
    render_status_bar(f, app, status_area);

    if let Some(message) = view.alert() {
        render_alert(f, message);
    }
}

fn render_title_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(
        " lingo | Translate to {} ",
        app.selected_language().display_name()
    );
    let bar = Paragraph::new(title)
        .alignment(Alignment::Left)
        .style(Style::default().fg(BAR_TEXT).bg(BAR_BG).add_modifier(Modifier::BOLD));
    f.render_widget(bar, area);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(BORDER_FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BORDER_IDLE)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(title, Style::default().fg(FG_PRIMARY)))
        .style(Style::default().bg(BG_PANEL))
}

fn render_input_screen(f: &mut Frame<'_>, view: &TerminalView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_input_area(f, view, rows[0]);
    render_language_selector(f, view, rows[1]);
    render_translate_button(f, view, rows[2]);
}

fn render_input_area(f: &mut Frame<'_>, view: &TerminalView, area: Rect) {
    let block = panel_block(" Text to translate ", view.input_focused());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let composer = view.composer();
    let width = inner.width as usize;
    let (cursor_col, cursor_row) = composer.cursor_display_position(width);
    // Keep the cursor row visible.
    let scroll = cursor_row.saturating_sub(inner.height.saturating_sub(1));

    let paragraph = if composer.is_empty() {
        Paragraph::new(Span::styled(
            "Enter text here...",
            Style::default().fg(FG_DIM).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let lines: Vec<Line> = composer
            .wrapped_lines(width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(FG_PRIMARY))))
            .collect();
        Paragraph::new(lines).scroll((scroll, 0))
    };
    f.render_widget(paragraph, inner);

    if view.input_focused() && view.alert().is_none() && inner.width > 0 && inner.height > 0 {
        f.set_cursor(
            inner.x + cursor_col.min(inner.width.saturating_sub(1)),
            inner.y + cursor_row.saturating_sub(scroll),
        );
    }
}

fn render_language_selector(f: &mut Frame<'_>, view: &TerminalView, area: Rect) {
    let checked = view.checked_language();
    let mut spans: Vec<Span> = Vec::new();
    for (idx, language) in Language::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        let (marker, style) = if language == checked {
            (
                "(•)",
                Style::default()
                    .fg(Color::White)
                    .bg(PANEL_HIGHLIGHT_BG)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("( )", Style::default().fg(FG_PRIMARY))
        };
        spans.push(Span::styled(
            format!("{} {}", marker, language.display_name()),
            style,
        ));
    }
    let paragraph = Paragraph::new(Line::from(spans))
        .block(panel_block(" Language (Tab) ", false))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_translate_button(f: &mut Frame<'_>, view: &TerminalView, area: Rect) {
    let (label, style) = if view.is_translating() {
        (
            "[ Translating... ]",
            Style::default().fg(FG_DIM).bg(BUTTON_DISABLED_BG),
        )
    } else {
        (
            "[ Translate ]  Ctrl+T",
            Style::default()
                .fg(BUTTON_TEXT)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD),
        )
    };
    render_button(f, label, style, area);
}

fn render_button(f: &mut Frame<'_>, label: &str, style: Style, area: Rect) {
    let width = (label.chars().count() as u16 + 2).min(area.width);
    let button_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(1) / 2,
        width,
        height: 1.min(area.height),
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(button, button_area);
}

fn render_results_screen(f: &mut Frame<'_>, view: &TerminalView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let original = Paragraph::new(view.original())
        .style(Style::default().fg(FG_PRIMARY))
        .wrap(Wrap { trim: false })
        .block(panel_block(" Original text ", false));
    f.render_widget(original, rows[0]);

    let (title, text_style) = if view.failed() {
        (" Translation failed ", Style::default().fg(ERROR_FG))
    } else {
        (" Your translation ", Style::default().fg(Color::White))
    };
    let translated = Paragraph::new(view.translated())
        .style(text_style)
        .wrap(Wrap { trim: false })
        .block(panel_block(title, true));
    f.render_widget(translated, rows[1]);

    render_button(
        f,
        "[ Start Over ]  Enter",
        Style::default()
            .fg(BUTTON_TEXT)
            .bg(BUTTON_BG)
            .add_modifier(Modifier::BOLD),
        rows[2],
    );
}

fn render_status_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match app.view().screen() {
        Screen::Input => "Ctrl+T translate | Tab language | Ctrl+Q quit",
        Screen::Results => "Enter start over | Ctrl+Q quit",
    };
    let footer = Paragraph::new(format!(" {} | {} ", app.status_message, hints))
        .style(Style::default().bg(BAR_BG).fg(BAR_TEXT));
    f.render_widget(footer, area);
}

fn render_alert(f: &mut Frame<'_>, message: &str) {
    let area = centered_rect(60, 40, f.size());
    f.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(" Notice ", Style::default().fg(MENU_TEXT)))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(MENU_BORDER))
        .style(Style::default().fg(MENU_TEXT).bg(MENU_BG));
    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]  Enter",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1])[1]
}
