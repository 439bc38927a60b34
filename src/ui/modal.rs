//! Detail modal overlay
//!
//! Full-card modal for the title whose `info` parameter is set. Shows the
//! expanded summary, trailer link if one resolves, and a strip of related
//! titles drawn from the rest of the page.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::preview::{similar_titles, youtube_video_id};
use crate::ui::Theme;

/// Render the detail modal if a card has one open
pub fn draw_modal(frame: &mut Frame, app: &App, area: Rect) {
    let Some(card) = app.home.open_card() else {
        return;
    };
    let movie = &card.movie;

    let popup = centered_rect(area, 70, 80);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .style(Theme::card())
        .title(Span::styled(format!(" {} ", movie.title), Theme::title()))
        .title_alignment(Alignment::Left);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::vertical([
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(inner);

    draw_body(frame, movie, chunks[0]);
    draw_similar_strip(frame, app, movie, chunks[1]);

    let hints = Line::from(vec![
        Span::styled("Enter", Theme::keybind()),
        Span::styled(" watch  ", Theme::dimmed()),
        Span::styled("Esc", Theme::keybind()),
        Span::styled(" close", Theme::dimmed()),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}

fn draw_body(frame: &mut Frame, movie: &crate::models::MovieSummary, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}", movie.year), Theme::dimmed()),
        match movie.rating_badge() {
            Some(badge) => Span::styled(format!("   ★ {}", badge), Theme::star()),
            None => Span::raw(""),
        },
    ])];
    if let Some(genres) = movie.genre_pair() {
        lines.push(Line::styled(genres, Theme::dimmed()));
    }
    lines.push(Line::raw(""));
    match &movie.overview {
        Some(overview) => lines.push(Line::styled(overview.clone(), Theme::text())),
        None => lines.push(Line::styled(
            "No description is available for this title yet.",
            Theme::dimmed(),
        )),
    }
    if let Some(id) = movie.trailer_url.as_deref().and_then(youtube_video_id) {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("Trailer: ", Theme::dimmed()),
            Span::styled(crate::preview::embed_url(id), Theme::success()),
        ]));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}

/// Related titles from the rest of the loaded page
fn draw_similar_strip(
    frame: &mut Frame,
    app: &App,
    movie: &crate::models::MovieSummary,
    area: Rect,
) {
    let pool = app.home.page.all_titles();
    let picks = similar_titles(movie, &pool);
    if picks.is_empty() {
        return;
    }

    let mut spans = vec![Span::styled("More like this:  ", Theme::title())];
    for (i, pick) in picks.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Theme::dimmed()));
        }
        spans.push(Span::styled(pick.short_title(), Theme::text()));
    }

    let strip = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );
    frame.render_widget(strip, area);
}

/// Centered sub-rectangle by percentage of the parent
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
