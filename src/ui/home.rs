//! Catalog view: hero banner, section carousels, and the hover preview
//!
//! Poster cards are fixed-width cells; the hover card's horizontal placement
//! comes from the shared positioner, working in virtual pixels and mapped
//! back to terminal columns here.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::preview::{card_position, AnchorRect, Viewport};
use crate::ui::Theme;

/// Poster card width in terminal columns
pub const POSTER_COLS: u16 = 20;
/// Poster card height in terminal rows
pub const POSTER_ROWS: u16 = 5;
/// Virtual pixels per terminal column for the positioner
pub const PX_PER_CELL: f64 = 10.0;

/// Maps a carousel row's cell geometry into the positioner's pixel space
pub struct CellViewport {
    /// Leftmost column of the carousel area
    origin: u16,
    /// Total width of the carousel area in columns
    cols: u16,
    /// First visible poster index (scroll offset)
    offset: usize,
}

impl CellViewport {
    pub fn new(origin: u16, cols: u16, offset: usize) -> Self {
        Self {
            origin,
            cols,
            offset,
        }
    }

    /// Posters that fit in the row
    pub fn visible_posters(&self) -> usize {
        (self.cols / POSTER_COLS) as usize
    }

    /// Leftmost column of the poster at `index`, if visible
    pub fn poster_col(&self, index: usize) -> Option<u16> {
        let slot = index.checked_sub(self.offset)?;
        if slot >= self.visible_posters() {
            return None;
        }
        Some(self.origin + slot as u16 * POSTER_COLS)
    }

    /// Convert a pixel x back to an absolute terminal column, clamped to the
    /// carousel area
    pub fn col_at(&self, px: f64) -> u16 {
        let col = (px / PX_PER_CELL).round() as i64;
        let col = col.clamp(0, self.cols.saturating_sub(1) as i64);
        self.origin + col as u16
    }
}

impl Viewport for CellViewport {
    fn anchor_rect(&self, index: usize) -> AnchorRect {
        let col = self.poster_col(index).unwrap_or(self.origin) - self.origin;
        AnchorRect::new(col as f64 * PX_PER_CELL, POSTER_COLS as f64 * PX_PER_CELL)
    }

    fn width(&self) -> f64 {
        self.cols as f64 * PX_PER_CELL
    }
}

/// Render the catalog page into `area`
pub fn draw_catalog(frame: &mut Frame, app: &App, area: Rect) {
    if app.home.loading.is_loading() {
        let msg = app.home.loading.message().unwrap_or("Loading...");
        let loading = Paragraph::new(msg)
            .style(Theme::loading())
            .alignment(Alignment::Center);
        frame.render_widget(loading, area);
        return;
    }

    if app.home.page.sections.is_empty() {
        let empty = Paragraph::new("The catalog is empty. Press r to retry.")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let mut constraints = vec![Constraint::Length(4)];
    constraints.extend(
        std::iter::repeat(Constraint::Length(POSTER_ROWS + 1)).take(app.home.page.sections.len()),
    );
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    draw_hero(frame, app, rows[0]);

    for (i, section) in app.home.page.sections.iter().enumerate() {
        draw_carousel(frame, app, i, section, rows[i + 1]);
    }

    draw_hover_preview(frame, app, area, &rows);
}

/// Hero banner: first trending title
fn draw_hero(frame: &mut Frame, app: &App, area: Rect) {
    let Some(hero) = app.home.page.hero() else {
        return;
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(hero.title.clone(), Theme::title()),
        Span::styled(format!("  ({})", hero.year), Theme::dimmed()),
        match hero.rating_badge() {
            Some(badge) => Span::styled(format!("  ★ {}", badge), Theme::star()),
            None => Span::raw(""),
        },
    ])];
    if let Some(genres) = hero.genre_pair() {
        lines.push(Line::styled(genres, Theme::dimmed()));
    }
    if let Some(overview) = &hero.overview {
        lines.push(Line::styled(overview.clone(), Theme::text()));
    }

    let hero_panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );
    frame.render_widget(hero_panel, area);
}

/// One section carousel: label row plus a strip of poster cards
fn draw_carousel(
    frame: &mut Frame,
    app: &App,
    row_idx: usize,
    section: &crate::models::Section,
    area: Rect,
) {
    let is_active_row = row_idx == app.home.row;
    let label = match section.kind {
        crate::models::SectionKind::Trending(w) => format!("{} · {}", section.kind.label(), w),
        _ => section.kind.label().to_string(),
    };
    let label_style = if is_active_row {
        Theme::accent()
    } else {
        Theme::title()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, label_style)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let strip = Rect::new(area.x, area.y + 1, area.width, POSTER_ROWS);
    let Some(row_state) = app.home.rows.get(row_idx) else {
        return;
    };
    let visible = (strip.width / POSTER_COLS) as usize;
    let viewport = CellViewport::new(strip.x, strip.width, row_state.view_offset(visible));

    for (idx, movie) in section.titles.iter().enumerate() {
        let Some(col) = viewport.poster_col(idx) else {
            continue;
        };
        let hovered = is_active_row && idx == row_state.selected;
        let style = if hovered { Theme::card_hover() } else { Theme::card() };
        let border_style = if hovered {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let mut lines = vec![Line::styled(movie.short_title(), style)];
        if let Some(badge) = movie.rating_badge() {
            lines.push(Line::from(Span::styled(format!("★ {}", badge), Theme::star())));
        }
        lines.push(Line::styled(format!("{}", movie.year), Theme::dimmed()));

        let card = Paragraph::new(lines).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
        let poster_area = Rect::new(col, strip.y, POSTER_COLS.min(strip.width), POSTER_ROWS);
        frame.render_widget(card, poster_area);
    }
}

/// Floating preview card over the hovered poster
fn draw_hover_preview(frame: &mut Frame, app: &App, area: Rect, rows: &[Rect]) {
    if app.scroll_lock.is_locked() {
        // The detail modal supersedes the hover preview
        return;
    }
    let Some(card) = app.home.selected_card() else {
        return;
    };
    if !card.is_hovered() {
        return;
    }
    let Some(row_state) = app.home.rows.get(app.home.row) else {
        return;
    };
    let strip = rows[app.home.row + 1];

    let visible = (strip.width / POSTER_COLS) as usize;
    let viewport = CellViewport::new(strip.x, strip.width, row_state.view_offset(visible));
    let anchor = viewport.anchor_rect(row_state.selected);
    let position = card_position(anchor, viewport.width());
    let (left_px, right_px) = position.bounds(anchor, viewport.width());

    let left = viewport.col_at(left_px);
    let right = viewport.col_at(right_px);
    let width = right.saturating_sub(left).max(POSTER_COLS);

    // Below the hovered strip when there is room, else above it
    let height = 7u16;
    let below = strip.y + POSTER_ROWS + 1;
    let y = if below + height <= area.y + area.height {
        below
    } else {
        strip.y.saturating_sub(height)
    };
    let popup = Rect::new(left, y, width.min(area.width - (left - area.x)), height);

    let movie = &card.movie;
    let mut lines = vec![Line::from(vec![
        Span::styled(movie.short_title(), Theme::title()),
        Span::styled(format!(" ({})", movie.year), Theme::dimmed()),
    ])];
    if let Some(genres) = movie.genre_pair() {
        lines.push(Line::styled(genres, Theme::dimmed()));
    }
    if let Some(badge) = movie.rating_badge() {
        lines.push(Line::from(Span::styled(format!("★ {}", badge), Theme::star())));
    }
    if let Some(overview) = movie.short_overview() {
        lines.push(Line::styled(overview, Theme::text()));
    }
    lines.push(Line::from(vec![
        Span::styled("Enter", Theme::keybind()),
        Span::styled(" more info", Theme::dimmed()),
    ]));

    let preview = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_focused())
            .style(Theme::card_hover()),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(preview, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::CardPosition;

    #[test]
    fn test_visible_posters() {
        let viewport = CellViewport::new(0, 80, 0);
        assert_eq!(viewport.visible_posters(), 4);
    }

    #[test]
    fn test_poster_col_respects_offset() {
        let viewport = CellViewport::new(2, 80, 1);
        assert_eq!(viewport.poster_col(0), None);
        assert_eq!(viewport.poster_col(1), Some(2));
        assert_eq!(viewport.poster_col(2), Some(22));
        assert_eq!(viewport.poster_col(5), None);
    }

    #[test]
    fn test_anchor_rect_maps_cells_to_pixels() {
        let viewport = CellViewport::new(0, 80, 0);
        let anchor = viewport.anchor_rect(1);
        assert_eq!(anchor.left, 200.0);
        assert_eq!(anchor.width, 200.0);
        assert_eq!(viewport.width(), 800.0);
    }

    #[test]
    fn test_col_at_clamps_to_area() {
        let viewport = CellViewport::new(5, 80, 0);
        assert_eq!(viewport.col_at(-50.0), 5);
        assert_eq!(viewport.col_at(400.0), 45);
        assert_eq!(viewport.col_at(10_000.0), 84);
    }

    #[test]
    fn test_first_poster_pins_preview_flush_left() {
        let viewport = CellViewport::new(0, 120, 0);
        let anchor = viewport.anchor_rect(0);
        let position = card_position(anchor, viewport.width());
        assert_eq!(position, CardPosition::FlushLeft);
    }
}
