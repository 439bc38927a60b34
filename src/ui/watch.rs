//! Watch view: title header, language-grouped server panel, advisory overlay

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::modal::centered_rect;
use crate::ui::Theme;

/// Render the watch view into `area`
pub fn draw_watch(frame: &mut Frame, app: &App, area: Rect) {
    if app.watch.loading.is_loading() {
        let msg = app.watch.loading.message().unwrap_or("Loading...");
        frame.render_widget(
            Paragraph::new(msg)
                .style(Theme::loading())
                .alignment(Alignment::Center),
            area,
        );
        return;
    }
    if app.watch.loading.is_error() {
        let msg = app.watch.loading.message().unwrap_or("Request failed");
        frame.render_widget(
            Paragraph::new(format!("Could not load this title: {}", msg))
                .style(Theme::error())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    }
    let Some(movie) = &app.watch.movie else {
        return;
    };

    let chunks =
        Layout::vertical([Constraint::Length(5), Constraint::Min(3)]).split(area);

    draw_header(frame, movie, chunks[0]);

    if movie.servers.is_empty() {
        draw_request_notice(frame, movie, chunks[1]);
    } else {
        draw_server_panel(frame, app, movie, chunks[1]);
    }

    if app.watch.advisory.is_visible() {
        draw_advisory(frame, app, area);
    }
}

fn draw_header(frame: &mut Frame, movie: &crate::models::MovieExpanded, area: Rect) {
    let mut meta = vec![Span::styled(format!("{}", movie.year), Theme::dimmed())];
    if let Some(age) = &movie.age_rating {
        meta.push(Span::styled(format!("  {}", age), Theme::warning()));
    }
    if !movie.genres.is_empty() {
        meta.push(Span::styled(
            format!("  {}", movie.genres.join(" · ")),
            Theme::dimmed(),
        ));
    }

    let header = Paragraph::new(vec![
        Line::styled(movie.title.clone(), Theme::title()),
        Line::from(meta),
        Line::styled(movie.short_overview(), Theme::text()),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );
    frame.render_widget(header, area);
}

/// Flat server list with language group headers
fn draw_server_panel(
    frame: &mut Frame,
    app: &App,
    movie: &crate::models::MovieExpanded,
    area: Rect,
) {
    let mut items: Vec<ListItem> = Vec::new();
    let mut flat_idx = 0usize;
    for (language, group) in movie.servers_by_language() {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{} {}", language.icon(), language),
            Theme::title(),
        ))));
        for server in group {
            let selected = flat_idx == app.watch.server_list.selected;
            let marker = if selected { "▸ " } else { "  " };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    marker,
                    if selected { Theme::accent() } else { Theme::dimmed() },
                ),
                Span::styled(
                    format!("{} {}", server.icon(), server.name),
                    if selected { Theme::selected() } else { Theme::text() },
                ),
            ])));
            flat_idx += 1;
        }
    }

    let count = app.watch.flat_servers().len();
    let title = format!(
        " Servers ({}/{}) ",
        app.watch.server_list.selected + 1,
        count
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_focused())
            .title(Span::styled(title, Theme::title())),
    );
    frame.render_widget(list, area);
}

/// Shown when the backend has no servers for this title yet
fn draw_request_notice(frame: &mut Frame, movie: &crate::models::MovieExpanded, area: Rect) {
    let notice = Paragraph::new(vec![
        Line::styled("No streams available yet", Theme::warning()),
        Line::raw(""),
        Line::styled(
            format!(
                "\"{}\" has no servers right now. Check back later; titles are added as they come in.",
                movie.title
            ),
            Theme::dimmed(),
        ),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(notice, area);
}

/// One-time ad-block advisory before any link is opened
fn draw_advisory(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(area, 60, 40);
    frame.render_widget(Clear, popup);

    let style = match app.watch.advisory.browser() {
        Some(b) if b.built_in_adblock => Theme::success(),
        _ => Theme::warning(),
    };

    let advisory = Paragraph::new(vec![
        Line::styled("Before you open a stream", Theme::title()),
        Line::raw(""),
        Line::styled(app.watch.advisory.message(), Theme::text()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Enter", Theme::keybind()),
            Span::styled(" got it", Theme::dimmed()),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(Theme::card()),
    );
    frame.render_widget(advisory, popup);
}
