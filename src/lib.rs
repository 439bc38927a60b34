//! FlickTUI - terminal front-end for a movie catalog
//!
//! Browse trending movies, preview a title from its poster, open its detail
//! modal, and hand a stream server link to your browser.
//!
//! # Modules
//!
//! - `models` - Catalog page, title, and server data structures
//! - `api` - Catalog backend client
//! - `nav` - Shared navigation state and the modal scroll lock
//! - `preview` - Hover card state machine, positioner, trailer resolver
//! - `advisory` - Ad-block notice shown before opening stream links
//! - `ui` - TUI components
//! - `app` - Application state and keyboard handling

pub mod advisory;
pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod nav;
pub mod preview;
pub mod ui;

// Re-export commonly used types
pub use api::{CatalogClient, CatalogError};
pub use app::{Action, App, DataEvent};
pub use models::{
    CatalogPage, Language, MediaKind, MovieExpanded, MovieSummary, SearchHit, Section,
    SectionKind, ServerLink, TimeWindow,
};
pub use nav::{NavStore, Route, ScrollLock};
pub use preview::{card_position, youtube_video_id, CardPhase, PreviewCard};
