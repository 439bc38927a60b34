//! Hover preview and detail modal machinery

pub mod card;
pub mod position;
pub mod similar;
pub mod trailer;

pub use card::{reduce, CardPhase, PreviewCard};
pub use position::{card_position, AnchorRect, CardPosition, Viewport, ANCHOR_WIDTH, CARD_WIDTH};
pub use similar::{similar_titles, SIMILAR_LIMIT};
pub use trailer::{embed_url, youtube_video_id};
