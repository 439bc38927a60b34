//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout.

pub mod home;
pub mod modal;
pub mod search;
pub mod theme;
pub mod watch;

pub use theme::Theme;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::nav::Route;

/// Top-level draw: header, routed view, overlays, status bar
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::text()), area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .split(area);

    draw_header(frame, app, chunks[0]);

    match app.nav.route() {
        Route::Home | Route::Movies => home::draw_catalog(frame, app, chunks[1]),
        Route::Watch { .. } => watch::draw_watch(frame, app, chunks[1]),
    }

    modal::draw_modal(frame, app, chunks[1]);
    search::draw_search(frame, app, chunks[1]);

    draw_status_bar(frame, app, chunks[2]);

    if let Some(error) = &app.error {
        draw_error_popup(frame, error, area);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let tab = |label: &str, active: bool| {
        Span::styled(
            format!(" {} ", label),
            if active { Theme::selected() } else { Theme::dimmed() },
        )
    };
    let (home_active, movies_active, watch_active) = match app.nav.route() {
        Route::Home => (true, false, false),
        Route::Movies => (false, true, false),
        Route::Watch { .. } => (false, false, true),
    };

    let mut spans = vec![
        Span::styled(" FLICKTUI ", Theme::accent()),
        tab("Home", home_active),
        tab("Movies", movies_active),
    ];
    if watch_active {
        spans.push(tab("Watch", true));
    }
    spans.push(Span::styled(
        format!("   Trending: {}", app.home.window),
        Theme::dimmed(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = if app.search.open {
        &[("↑↓", "select"), ("Enter", "open"), ("Esc", "close")]
    } else if app.scroll_lock.is_locked() {
        &[("Enter", "watch"), ("Esc", "close")]
    } else if matches!(app.nav.route(), Route::Watch { .. }) {
        &[("↑↓", "server"), ("Enter", "open link"), ("Esc", "back")]
    } else {
        &[
            ("←→↑↓", "browse"),
            ("Enter", "info"),
            ("/", "search"),
            ("w", "window"),
            ("Tab", "movies"),
            ("q", "quit"),
        ]
    };

    let mut spans = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled(format!(" {} ", key), Theme::keybind()));
        spans.push(Span::styled(format!("{} ", desc), Theme::status_bar()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Theme::status_bar()),
        area,
    );
}

fn draw_error_popup(frame: &mut Frame, error: &str, area: Rect) {
    let popup = modal::centered_rect(area, 50, 20);
    frame.render_widget(Clear, popup);
    let widget = Paragraph::new(error)
        .style(Theme::error())
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::error())
                .title(Span::styled(" Error ", Theme::error())),
        );
    frame.render_widget(widget, popup);
}
