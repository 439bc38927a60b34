//! App state and core application logic
//!
//! Owns the navigation store, the poster cards with their hover/modal
//! machinery, and keyboard handling. Async work is signalled upward through
//! [`Action`] values and absorbed back through [`DataEvent`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::advisory::AdvisoryState;
use crate::config::Config;
use crate::models::{CatalogPage, MovieExpanded, SearchHit, ServerLink, TimeWindow};
use crate::nav::{NavStore, Route, ScrollLock};
use crate::preview::{CardPhase, PreviewCard};

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Loading State
// =============================================================================

/// Loading state for async operations
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    /// Loading with optional message
    Loading(Option<String>),
    /// Error with message
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadingState::Loading(Some(msg)) => Some(msg),
            LoadingState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Actions and Data Events
// =============================================================================

/// Side effect requested by a key press, performed by the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Fetch the catalog page for a trending window
    LoadPage(TimeWindow),
    /// Fetch a title's expanded record for the watch view
    LoadWatch(String),
    /// Run a search query
    Search(String),
    /// Hand a stream URL to the user's browser
    OpenUrl(String),
}

/// Completed async work delivered back to the app
#[derive(Debug)]
pub enum DataEvent {
    Page(Result<CatalogPage, String>),
    Movie(Result<MovieExpanded, String>),
    SearchResults(Result<Vec<SearchHit>, String>),
}

// =============================================================================
// Selection State (per-view)
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub selected: usize,
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Scroll offset that keeps the selection inside a window of `visible` items
    pub fn view_offset(&self, visible: usize) -> usize {
        if visible == 0 || self.selected < visible {
            0
        } else {
            self.selected - visible + 1
        }
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// View-Specific State
// =============================================================================

/// Catalog page state: section carousels with one card per poster
#[derive(Debug, Default)]
pub struct HomeState {
    pub page: CatalogPage,
    /// Cards parallel to `page.sections`
    pub cards: Vec<Vec<PreviewCard>>,
    /// Selected carousel row
    pub row: usize,
    /// Horizontal selection per row
    pub rows: Vec<ListState>,
    pub window: TimeWindow,
    pub loading: LoadingState,
}

impl HomeState {
    /// Currently highlighted card, if the page has any
    pub fn selected_card(&self) -> Option<&PreviewCard> {
        self.cards.get(self.row)?.get(self.rows.get(self.row)?.selected)
    }

    pub fn selected_card_mut(&mut self) -> Option<&mut PreviewCard> {
        let col = self.rows.get(self.row)?.selected;
        self.cards.get_mut(self.row)?.get_mut(col)
    }

    /// Card whose modal is currently open, if any
    pub fn open_card_mut(&mut self) -> Option<&mut PreviewCard> {
        self.cards
            .iter_mut()
            .flatten()
            .find(|c| c.phase() == CardPhase::ModalOpen)
    }

    pub fn open_card(&self) -> Option<&PreviewCard> {
        self.cards
            .iter()
            .flatten()
            .find(|c| c.phase() == CardPhase::ModalOpen)
    }
}

/// Search overlay state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub open: bool,
    pub query: String,
    /// Cursor position in query, in bytes (ASCII edits keep it on a char
    /// boundary via insert/backspace)
    pub cursor: usize,
    pub results: Vec<SearchHit>,
    pub list: ListState,
    pub loading: LoadingState,
}

impl SearchState {
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.query[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.query.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
        self.results.clear();
        self.list = ListState::default();
        self.loading = LoadingState::Idle;
    }

    pub fn set_results(&mut self, results: Vec<SearchHit>) {
        self.list.set_len(results.len());
        self.results = results;
        self.loading = LoadingState::Idle;
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.results.get(self.list.selected)
    }
}

/// Watch view state
#[derive(Debug, Default)]
pub struct WatchState {
    pub movie: Option<MovieExpanded>,
    /// Flat selection over the language-grouped server list
    pub server_list: ListState,
    pub advisory: AdvisoryState,
    pub loading: LoadingState,
}

impl WatchState {
    /// Servers in panel order, flattened across language groups
    pub fn flat_servers(&self) -> Vec<&ServerLink> {
        self.movie
            .as_ref()
            .map(|m| {
                m.servers_by_language()
                    .into_iter()
                    .flat_map(|(_, group)| group)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn selected_server(&self) -> Option<&ServerLink> {
        self.flat_servers().get(self.server_list.selected).copied()
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    pub nav: NavStore,
    pub scroll_lock: ScrollLock,
    pub running: bool,
    pub input_mode: InputMode,
    /// Global error message
    pub error: Option<String>,

    pub home: HomeState,
    pub search: SearchState,
    pub watch: WatchState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            nav: NavStore::new(),
            scroll_lock: ScrollLock::new(),
            running: true,
            input_mode: InputMode::Normal,
            error: None,
            home: HomeState::default(),
            search: SearchState::default(),
            watch: WatchState::default(),
        };
        app.home.window = config.startup_window();
        app.home.loading = LoadingState::Loading(Some("Loading catalog...".into()));
        app.watch.advisory = AdvisoryState::new(config.browser_command().as_deref());
        app
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// Rebuild poster cards for a freshly loaded page
    pub fn set_page(&mut self, page: CatalogPage) {
        self.home.cards = page
            .sections
            .iter()
            .map(|section| {
                section
                    .titles
                    .iter()
                    .map(|movie| {
                        PreviewCard::new(movie.clone(), &mut self.nav, self.scroll_lock.clone())
                    })
                    .collect()
            })
            .collect();
        self.home.rows = page
            .sections
            .iter()
            .map(|s| ListState::new(s.titles.len()))
            .collect();
        self.home.row = 0;
        self.home.page = page;
        self.home.loading = LoadingState::Idle;
        self.refresh_cards();
        self.hover_selected();
    }

    /// Absorb completed async work
    pub fn apply_event(&mut self, event: DataEvent) {
        match event {
            DataEvent::Page(Ok(page)) => self.set_page(page),
            DataEvent::Page(Err(e)) => {
                self.home.loading = LoadingState::Error(e);
            }
            DataEvent::Movie(Ok(movie)) => {
                self.watch.server_list = ListState::new(movie.servers.len());
                self.watch.movie = Some(movie);
                self.watch.loading = LoadingState::Idle;
            }
            DataEvent::Movie(Err(e)) => {
                self.watch.loading = LoadingState::Error(e);
            }
            DataEvent::SearchResults(Ok(hits)) => self.search.set_results(hits),
            DataEvent::SearchResults(Err(e)) => {
                self.search.loading = LoadingState::Error(e);
            }
        }
    }

    /// Push the latest navigation state into every card
    fn refresh_cards(&mut self) {
        let snapshot = self.nav.state().clone();
        for card in self.home.cards.iter_mut().flatten() {
            card.sync(&snapshot);
        }
    }

    /// Hover the highlighted card; everything else loses its hover
    fn hover_selected(&mut self) {
        let (row, col) = (
            self.home.row,
            self.home.rows.get(self.home.row).map(|r| r.selected),
        );
        for (r, cards) in self.home.cards.iter_mut().enumerate() {
            for (c, card) in cards.iter_mut().enumerate() {
                if Some(c) == col && r == row {
                    card.pointer_enter();
                } else {
                    card.pointer_leave();
                }
            }
        }
    }

    /// Close whatever modal is open, on any exit path
    fn close_modal(&mut self) {
        if let Some(card) = self.home.open_card_mut() {
            // Split borrow workaround: take the id, close via index lookup
            let id = card.movie.id.clone();
            for cards in self.home.cards.iter_mut() {
                for c in cards.iter_mut() {
                    if c.movie.id == id {
                        c.close(&mut self.nav);
                    }
                }
            }
        }
        self.refresh_cards();
        self.hover_selected();
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returning the side effect to perform
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Clear error on any keypress
        self.error = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in editing (search box) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.search.open = false;
                self.search.clear();
                None
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                let query = self.search.query.trim().to_string();
                if query.is_empty() {
                    None
                } else {
                    self.search.loading = LoadingState::Loading(Some("Searching...".into()));
                    Some(Action::Search(query))
                }
            }
            KeyCode::Char(c) => {
                self.search.insert(c);
                None
            }
            KeyCode::Backspace => {
                self.search.backspace();
                None
            }
            _ => None,
        }
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Global shortcuts
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return None;
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.search.open = true;
                self.input_mode = InputMode::Editing;
                return None;
            }
            KeyCode::Esc => return self.handle_escape(),
            _ => {}
        }

        if self.search.open {
            return self.handle_search_key(key);
        }

        // An open modal captures navigation keys
        if self.scroll_lock.is_locked() {
            return self.handle_modal_key(key);
        }

        match self.nav.route().clone() {
            Route::Home | Route::Movies => self.handle_catalog_key(key),
            Route::Watch { .. } => self.handle_watch_key(key),
        }
    }

    /// Escape cascades: search overlay, then modal, then watch view
    fn handle_escape(&mut self) -> Option<Action> {
        if self.search.open {
            self.search.open = false;
            self.search.clear();
            return None;
        }
        if self.scroll_lock.is_locked() {
            self.close_modal();
            return None;
        }
        if matches!(self.nav.route(), Route::Watch { .. }) {
            self.watch.movie = None;
            self.watch.loading = LoadingState::Idle;
            self.nav.push(Route::Home);
            self.refresh_cards();
            return Some(Action::LoadPage(self.home.window));
        }
        None
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.home.row > 0 {
                    self.home.row -= 1;
                    self.hover_selected();
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.home.row + 1 < self.home.cards.len() {
                    self.home.row += 1;
                    self.hover_selected();
                }
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(row) = self.home.rows.get_mut(self.home.row) {
                    row.up();
                }
                self.hover_selected();
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(row) = self.home.rows.get_mut(self.home.row) {
                    row.down();
                }
                self.hover_selected();
                None
            }
            KeyCode::Enter | KeyCode::Char('i') => {
                if let Some(card) = self.home.selected_card_mut() {
                    card.open_info(&mut self.nav);
                }
                self.refresh_cards();
                None
            }
            KeyCode::Char('w') => {
                self.home.window = self.home.window.toggle();
                self.home.loading = LoadingState::Loading(Some("Loading catalog...".into()));
                Some(Action::LoadPage(self.home.window))
            }
            KeyCode::Tab => {
                let next = match self.nav.route() {
                    Route::Movies => Route::Home,
                    _ => Route::Movies,
                };
                self.nav.push(next);
                self.refresh_cards();
                None
            }
            KeyCode::Char('r') => {
                self.home.loading = LoadingState::Loading(Some("Loading catalog...".into()));
                Some(Action::LoadPage(self.home.window))
            }
            _ => None,
        }
    }

    /// Keys while a detail modal is open; carousel navigation is suppressed
    fn handle_modal_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('p') => {
                let id = self.home.open_card()?.movie.id.clone();
                self.close_modal();
                self.watch.loading = LoadingState::Loading(Some("Loading title...".into()));
                self.watch.movie = None;
                self.nav.push(Route::Watch { id: id.clone() });
                self.refresh_cards();
                Some(Action::LoadWatch(id))
            }
            _ => None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.search.list.up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.search.list.down();
                None
            }
            KeyCode::Enter => {
                let id = self.search.selected_hit()?.id.clone();
                self.search.open = false;
                self.search.clear();
                self.watch.loading = LoadingState::Loading(Some("Loading title...".into()));
                self.watch.movie = None;
                self.nav.push(Route::Watch { id: id.clone() });
                self.refresh_cards();
                Some(Action::LoadWatch(id))
            }
            KeyCode::Char('e') | KeyCode::Char('/') => {
                self.input_mode = InputMode::Editing;
                None
            }
            _ => None,
        }
    }

    fn handle_watch_key(&mut self, key: KeyEvent) -> Option<Action> {
        // The advisory overlay swallows keys until dismissed
        if self.watch.advisory.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('a')) {
                self.watch.advisory.dismiss();
            }
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.watch.server_list.up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.watch.server_list.down();
                None
            }
            KeyCode::Enter => {
                let url = self.watch.selected_server()?.url.clone();
                Some(Action::OpenUrl(url))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MovieSummary, Section, SectionKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn movie(id: &str, genre: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: format!("Title {}", id),
            genres: vec![genre.to_string()],
            ..Default::default()
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(&Config::default());
        app.set_page(CatalogPage {
            sections: vec![
                Section {
                    kind: SectionKind::Trending(TimeWindow::Day),
                    titles: vec![movie("1", "Action"), movie("2", "Drama")],
                },
                Section {
                    kind: SectionKind::TopRated,
                    titles: vec![movie("3", "Action")],
                },
            ],
        });
        app
    }

    // -------------------------------------------------------------------------
    // ListState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_list_state_navigation() {
        let mut list = ListState::new(3);
        list.down();
        list.down();
        assert_eq!(list.selected, 2);
        list.down();
        assert_eq!(list.selected, 2);
        list.up();
        assert_eq!(list.selected, 1);
    }

    #[test]
    fn test_list_state_set_len_clamps() {
        let mut list = ListState::new(10);
        list.selected = 8;
        list.set_len(5);
        assert_eq!(list.selected, 4);
        list.set_len(0);
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_list_state_view_offset_follows_selection() {
        let mut list = ListState::new(10);
        assert_eq!(list.view_offset(4), 0);
        for _ in 0..5 {
            list.down();
        }
        assert_eq!(list.view_offset(4), 2);
        assert_eq!(list.view_offset(0), 0);
    }

    // -------------------------------------------------------------------------
    // Hover and Modal Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_selection_moves_hover() {
        let mut app = loaded_app();
        assert!(app.home.selected_card().unwrap().is_hovered());
        assert_eq!(app.home.selected_card().unwrap().movie.id, "1");

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.home.selected_card().unwrap().movie.id, "2");
        assert!(app.home.selected_card().unwrap().is_hovered());
        assert!(!app.home.cards[0][0].is_hovered());
    }

    #[test]
    fn test_enter_opens_modal_and_locks_scroll() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Enter));
        assert!(app.scroll_lock.is_locked());
        assert_eq!(app.nav.info(), Some("1"));
        assert_eq!(app.home.cards[0][0].phase(), CardPhase::ModalOpen);
    }

    #[test]
    fn test_carousel_keys_suppressed_while_modal_open() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Right));
        // Selection did not move
        assert_eq!(app.home.rows[0].selected, 0);
    }

    #[test]
    fn test_escape_closes_modal_and_releases_lock() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.scroll_lock.is_locked());
        assert_eq!(app.nav.info(), None);
        // Selection hover survives the close
        assert!(app.home.selected_card().unwrap().is_hovered());
    }

    #[test]
    fn test_second_card_replaces_first_modal() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.nav.info(), Some("2"));
        assert_eq!(app.home.cards[0][0].phase(), CardPhase::Idle);
        assert_eq!(app.home.cards[0][1].phase(), CardPhase::ModalOpen);
    }

    #[test]
    fn test_reopen_after_close() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.home.cards[0][0].phase(), CardPhase::ModalOpen);
    }

    #[test]
    fn test_modal_enter_navigates_to_watch() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Enter));
        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Some(Action::LoadWatch("1".to_string())));
        assert_eq!(app.nav.route(), &Route::Watch { id: "1".into() });
        assert!(!app.scroll_lock.is_locked());
    }

    // -------------------------------------------------------------------------
    // Window Toggle and Reload Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_window_toggle_requests_reload() {
        let mut app = loaded_app();
        let action = app.handle_key(key(KeyCode::Char('w')));
        assert_eq!(action, Some(Action::LoadPage(TimeWindow::Week)));
        assert!(app.home.loading.is_loading());
    }

    #[test]
    fn test_tab_switches_catalog_route() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.nav.route(), &Route::Movies);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.nav.route(), &Route::Home);
    }

    // -------------------------------------------------------------------------
    // Search Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_search_flow() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Editing);
        assert!(app.search.open);

        for c in "dune".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Some(Action::Search("dune".to_string())));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_search_escape_closes_overlay() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.search.open);
        assert!(app.search.query.is_empty());
    }

    #[test]
    fn test_search_result_opens_watch() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Char('/')));
        for c in "du".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        app.apply_event(DataEvent::SearchResults(Ok(vec![SearchHit {
            id: "55".into(),
            title: "Dune".into(),
            kind: crate::models::MediaKind::Movie,
            year: Some(2021),
            rating: None,
            poster_url: None,
            overview: None,
        }])));

        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Some(Action::LoadWatch("55".to_string())));
        assert_eq!(app.nav.route(), &Route::Watch { id: "55".into() });
    }

    // -------------------------------------------------------------------------
    // Watch View Tests
    // -------------------------------------------------------------------------

    fn watch_app() -> App {
        let mut app = loaded_app();
        app.nav.push(Route::Watch { id: "1".into() });
        app.apply_event(DataEvent::Movie(Ok(MovieExpanded {
            id: "1".into(),
            title: "Title 1".into(),
            year: 2024,
            age_rating: None,
            genres: vec![],
            overview: String::new(),
            poster_url: None,
            servers: vec![crate::models::ServerLink {
                name: "StreamWish".into(),
                url: "https://stream.example/1".into(),
                language: crate::models::Language::Latino,
            }],
            similar: vec![],
        })));
        app
    }

    #[test]
    fn test_advisory_swallows_keys_until_dismissed() {
        let mut app = watch_app();
        assert!(app.watch.advisory.is_visible());
        assert_eq!(app.handle_key(key(KeyCode::Enter)), None);
        assert!(!app.watch.advisory.is_visible());

        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            action,
            Some(Action::OpenUrl("https://stream.example/1".to_string()))
        );
    }

    #[test]
    fn test_watch_escape_returns_home() {
        let mut app = watch_app();
        app.watch.advisory.dismiss();
        let action = app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.nav.route(), &Route::Home);
        assert_eq!(action, Some(Action::LoadPage(TimeWindow::Day)));
        assert!(app.watch.movie.is_none());
    }

    // -------------------------------------------------------------------------
    // Error and Event Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_page_error_sets_loading_error() {
        let mut app = App::new(&Config::default());
        app.apply_event(DataEvent::Page(Err("boom".into())));
        assert!(app.home.loading.is_error());
        assert_eq!(app.home.loading.message(), Some("boom"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = loaded_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }
}
