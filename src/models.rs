//! Data structures and types for flicktui
//!
//! Contains all shared models used across the application organized by domain:
//! - **Catalog**: movie summaries and the sectioned home page
//! - **Detail**: expanded movie records with embed servers and similar titles
//! - **Search**: lightweight search hits
//!
//! Fields the catalog API may omit are `Option` and render with fallbacks
//! (placeholder poster, omitted rating badge) rather than failing.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Catalog Models
// =============================================================================

/// Trending time window for the catalog page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    Day,
    Week,
}

impl TimeWindow {
    /// Query-parameter value expected by the API
    pub fn as_param(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            TimeWindow::Day => TimeWindow::Week,
            TimeWindow::Week => TimeWindow::Day,
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeWindow::Day => write!(f, "Today"),
            TimeWindow::Week => write!(f, "This Week"),
        }
    }
}

/// One movie as shown on a poster card
///
/// Immutable for a card's lifetime; `id` identifies a summary within a
/// displayed list but is not globally validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub poster_url: Option<String>,
    pub year: u16,
    pub genres: Vec<String>,
    pub rating: Option<f32>,
    pub overview: Option<String>,
    pub trailer_url: Option<String>,
}

impl MovieSummary {
    /// Title truncated for the hover card
    pub fn short_title(&self) -> String {
        truncate_chars(&self.title, 22)
    }

    /// Overview truncated for the hover card
    pub fn short_overview(&self) -> Option<String> {
        self.overview.as_deref().map(|o| truncate_chars(o, 60))
    }

    /// Rating badge text, omitted when the API gave no rating
    pub fn rating_badge(&self) -> Option<String> {
        self.rating.map(|r| format!("{:.1}", r))
    }

    /// At most the first two genres, dot-separated
    pub fn genre_pair(&self) -> Option<String> {
        match self.genres.as_slice() {
            [] => None,
            [one] => Some(one.clone()),
            [one, two, ..] => Some(format!("{} • {}", one, two)),
        }
    }
}

impl fmt::Display for MovieSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rating {
            Some(r) => write!(f, "{} ({}) ★ {:.1}", self.title, self.year, r),
            None => write!(f, "{} ({})", self.title, self.year),
        }
    }
}

/// Named result buckets on a catalog page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    Trending(TimeWindow),
    NowPlaying,
    TopRated,
    Upcoming,
}

impl SectionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Trending(_) => "Trending",
            SectionKind::NowPlaying => "In Theaters",
            SectionKind::TopRated => "Top Rated",
            SectionKind::Upcoming => "Coming Soon",
        }
    }
}

/// One carousel row of the catalog page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub titles: Vec<MovieSummary>,
}

/// A fetched catalog page: ordered sections, possibly empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogPage {
    pub sections: Vec<Section>,
}

impl CatalogPage {
    /// Every title on the page, flattened in section order.
    /// Feeds the similar-titles strip in the detail modal.
    pub fn all_titles(&self) -> Vec<MovieSummary> {
        self.sections
            .iter()
            .flat_map(|s| s.titles.iter().cloned())
            .collect()
    }

    /// First trending title, used for the hero banner
    pub fn hero(&self) -> Option<&MovieSummary> {
        self.sections
            .iter()
            .find(|s| matches!(s.kind, SectionKind::Trending(_)))
            .and_then(|s| s.titles.first())
    }
}

// =============================================================================
// Detail Models
// =============================================================================

/// Spoken-language tag for embed servers, in panel display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Latino,
    Castellano,
    Vose,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Latino, Language::Castellano, Language::Vose];

    /// Parse the API's language tag; unknown tags fold into VOSE
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Latino" => Language::Latino,
            "Castellano" => Language::Castellano,
            _ => Language::Vose,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Language::Latino => "🇲🇽",
            Language::Castellano => "🇪🇸",
            Language::Vose => "🌐",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Latino => write!(f, "Latino"),
            Language::Castellano => write!(f, "Castellano"),
            Language::Vose => write!(f, "VOSE"),
        }
    }
}

/// One embed server offered by the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerLink {
    pub name: String,
    pub url: String,
    pub language: Language,
}

impl ServerLink {
    /// Per-server icon, mirroring the hosts the catalog serves
    pub fn icon(&self) -> &'static str {
        match self.name.as_str() {
            "StreamWish" => "🎬",
            "FileLions" => "🦁",
            "Wolfstream" => "🐺",
            "ABstream" => "📺",
            "Filemoon" => "🌙",
            _ => "📡",
        }
    }
}

impl fmt::Display for ServerLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.icon(), self.name, self.language)
    }
}

/// Expanded movie record from the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieExpanded {
    pub id: String,
    pub title: String,
    pub year: u16,
    pub age_rating: Option<String>,
    pub genres: Vec<String>,
    pub overview: String,
    pub poster_url: Option<String>,
    pub servers: Vec<ServerLink>,
    pub similar: Vec<MovieSummary>,
}

impl MovieExpanded {
    /// Overview truncated for the watch view header
    pub fn short_overview(&self) -> String {
        if self.overview.is_empty() {
            "No description is available for this title yet.".to_string()
        } else {
            truncate_chars(&self.overview, 220)
        }
    }

    /// Servers grouped by language, groups in `Language::ALL` order,
    /// empty groups omitted
    pub fn servers_by_language(&self) -> Vec<(Language, Vec<&ServerLink>)> {
        Language::ALL
            .iter()
            .filter_map(|lang| {
                let group: Vec<&ServerLink> = self
                    .servers
                    .iter()
                    .filter(|s| s.language == *lang)
                    .collect();
                if group.is_empty() {
                    None
                } else {
                    Some((*lang, group))
                }
            })
            .collect()
    }
}

// =============================================================================
// Search Models
// =============================================================================

/// Media kind discriminator on search hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Tv => write!(f, "Series"),
        }
    }
}

/// Lightweight result record from the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub kind: MediaKind,
    pub year: Option<u16>,
    pub rating: Option<f32>,
    pub poster_url: Option<String>,
    pub overview: Option<String>,
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year_str = self.year.map(|y| format!(" ({})", y)).unwrap_or_default();
        write!(f, "{}{} [{}]", self.title, year_str, self.kind)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Truncate on a char boundary, appending an ellipsis when shortened
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{}...", cut)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, genres: &[&str]) -> MovieSummary {
        MovieSummary {
            id: id.into(),
            title: format!("Movie {}", id),
            poster_url: None,
            year: 2020,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            rating: None,
            overview: None,
            trailer_url: None,
        }
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 22), "short");
        assert_eq!(
            truncate_chars("a very long movie title indeed", 22),
            "a very long movie titl..."
        );
        // Multi-byte input must not split a char
        assert_eq!(truncate_chars("áéíóú", 3), "áéí...");
    }

    #[test]
    fn test_genre_pair() {
        assert_eq!(movie("1", &[]).genre_pair(), None);
        assert_eq!(movie("1", &["Action"]).genre_pair(), Some("Action".into()));
        assert_eq!(
            movie("1", &["Action", "Drama", "Comedy"]).genre_pair(),
            Some("Action • Drama".into())
        );
    }

    #[test]
    fn test_rating_badge_omitted_when_missing() {
        let mut m = movie("1", &[]);
        assert_eq!(m.rating_badge(), None);
        m.rating = Some(7.84);
        assert_eq!(m.rating_badge(), Some("7.8".into()));
    }

    #[test]
    fn test_language_from_tag() {
        assert_eq!(Language::from_tag("Latino"), Language::Latino);
        assert_eq!(Language::from_tag("Castellano"), Language::Castellano);
        assert_eq!(Language::from_tag("VOSE"), Language::Vose);
        assert_eq!(Language::from_tag("Subtitulado"), Language::Vose);
    }

    #[test]
    fn test_servers_grouped_in_language_order() {
        let detail = MovieExpanded {
            id: "1".into(),
            title: "Test".into(),
            year: 2020,
            age_rating: None,
            genres: vec![],
            overview: String::new(),
            poster_url: None,
            servers: vec![
                ServerLink {
                    name: "Filemoon".into(),
                    url: "https://a".into(),
                    language: Language::Vose,
                },
                ServerLink {
                    name: "StreamWish".into(),
                    url: "https://b".into(),
                    language: Language::Latino,
                },
                ServerLink {
                    name: "FileLions".into(),
                    url: "https://c".into(),
                    language: Language::Latino,
                },
            ],
            similar: vec![],
        };

        let groups = detail.servers_by_language();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Language::Latino);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, Language::Vose);
    }

    #[test]
    fn test_page_hero_prefers_trending() {
        let page = CatalogPage {
            sections: vec![
                Section {
                    kind: SectionKind::NowPlaying,
                    titles: vec![movie("9", &[])],
                },
                Section {
                    kind: SectionKind::Trending(TimeWindow::Day),
                    titles: vec![movie("1", &[]), movie("2", &[])],
                },
            ],
        };
        assert_eq!(page.hero().map(|m| m.id.as_str()), Some("1"));
        assert_eq!(page.all_titles().len(), 3);
    }

    #[test]
    fn test_empty_overview_fallback() {
        let detail = MovieExpanded {
            id: "1".into(),
            title: "Test".into(),
            year: 2020,
            age_rating: None,
            genres: vec![],
            overview: String::new(),
            poster_url: None,
            servers: vec![],
            similar: vec![],
        };
        assert!(detail.short_overview().contains("No description"));
    }
}
