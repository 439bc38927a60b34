//! Search overlay

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::{App, InputMode};
use crate::ui::modal::centered_rect;
use crate::ui::Theme;

/// Render the search overlay when open
pub fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    if !app.search.open {
        return;
    }

    let popup = centered_rect(area, 60, 70);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .style(Theme::card())
        .title(Span::styled(" Search ", Theme::title()));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner);

    draw_query_line(frame, app, chunks[0]);
    draw_results(frame, app, chunks[1]);
}

fn draw_query_line(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let cursor = if editing { "█" } else { "" };
    let line = Line::from(vec![
        Span::styled("🔎 ", Theme::dimmed()),
        Span::styled(app.search.query.clone(), Theme::input()),
        Span::styled(cursor, Theme::accent()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    if app.search.loading.is_loading() {
        let msg = app.search.loading.message().unwrap_or("Searching...");
        frame.render_widget(
            Paragraph::new(msg)
                .style(Theme::loading())
                .alignment(Alignment::Center),
            area,
        );
        return;
    }
    if let Some(msg) = app.search.loading.message() {
        if app.search.loading.is_error() {
            frame.render_widget(
                Paragraph::new(msg)
                    .style(Theme::error())
                    .alignment(Alignment::Center),
                area,
            );
            return;
        }
    }
    if app.search.results.is_empty() {
        let hint = if app.search.query.is_empty() {
            "Type a title and press Enter"
        } else {
            "No results"
        };
        frame.render_widget(
            Paragraph::new(hint)
                .style(Theme::dimmed())
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let visible = area.height as usize;
    let items: Vec<ListItem> = app
        .search
        .results
        .iter()
        .enumerate()
        .skip(app.search.list.view_offset(visible))
        .take(visible)
        .map(|(i, hit)| {
            let selected = i == app.search.list.selected;
            let marker = if selected { "▸ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(
                    marker,
                    if selected { Theme::accent() } else { Theme::dimmed() },
                ),
                Span::styled(
                    hit.title.clone(),
                    if selected { Theme::selected() } else { Theme::text() },
                ),
                Span::styled(
                    hit.year.map(|y| format!(" ({})", y)).unwrap_or_default(),
                    Theme::dimmed(),
                ),
                Span::raw(" "),
                Span::styled(format!("[{}]", hit.kind), Theme::dimmed()),
            ]);
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items), area);
}
