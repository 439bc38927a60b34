//! YouTube trailer link resolution
//!
//! Catalog records carry trailer URLs in whatever shape the upstream editor
//! pasted: `watch?v=`, `youtu.be/`, `embed/`, old-style `/v/` paths, or a
//! bare `&v=` parameter. [`youtube_video_id`] normalizes all of them to the
//! 11-character video id, or `None` when the link is not a YouTube video.

use std::sync::OnceLock;

use regex::Regex;

/// Canonical length of a YouTube video id
const VIDEO_ID_LEN: usize = 11;

fn id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*)")
            .expect("trailer id pattern is valid")
    })
}

/// Extract the 11-character video id from a YouTube URL in any common shape
///
/// When a URL matches several shapes the right-most match is taken, so a
/// `&v=` parameter overrides an id embedded earlier in the path. Candidates
/// of any other length are rejected rather than truncated.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    let caps = id_pattern().captures_iter(url).last()?;
    let id = caps.get(1)?.as_str();
    if id.len() == VIDEO_ID_LEN {
        Some(id)
    } else {
        None
    }
}

/// Privacy-enhanced embed URL for a resolved video id
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{}", video_id)
}

// =============================================================================
// Unit Tests
// =============================================================================
