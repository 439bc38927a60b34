//! Ad-block advisory for external stream links
//!
//! Embed hosts are ad-heavy, so before handing a link to the user's browser
//! the watch view shows a one-time notice: browsers with a built-in ad
//! blocker get a short confirmation, the rest get a recommendation to
//! install one. Dismissed per session.

/// What we know about the browser a link will open in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserInfo {
    /// Display name, e.g. "Brave"
    pub name: &'static str,
    /// Ships an ad blocker out of the box
    pub built_in_adblock: bool,
}

/// Classify a browser launch command
///
/// Matches on the binary name so wrapper paths and flags don't matter.
/// Returns `None` for commands we don't recognize.
pub fn classify_browser(command: &str) -> Option<BrowserInfo> {
    let binary = command
        .split_whitespace()
        .next()?
        .rsplit('/')
        .next()?
        .to_ascii_lowercase();

    let info = match binary.as_str() {
        s if s.contains("brave") => BrowserInfo {
            name: "Brave",
            built_in_adblock: true,
        },
        s if s.contains("opera") => BrowserInfo {
            name: "Opera",
            built_in_adblock: true,
        },
        s if s.contains("firefox") => BrowserInfo {
            name: "Firefox",
            built_in_adblock: false,
        },
        s if s.contains("chromium") => BrowserInfo {
            name: "Chromium",
            built_in_adblock: false,
        },
        s if s.contains("chrome") => BrowserInfo {
            name: "Chrome",
            built_in_adblock: false,
        },
        s if s.contains("edge") => BrowserInfo {
            name: "Edge",
            built_in_adblock: false,
        },
        s if s.contains("safari") => BrowserInfo {
            name: "Safari",
            built_in_adblock: false,
        },
        _ => return None,
    };
    Some(info)
}

/// Session state of the advisory overlay
#[derive(Debug, Clone, Default)]
pub struct AdvisoryState {
    browser: Option<BrowserInfo>,
    dismissed: bool,
}

impl AdvisoryState {
    pub fn new(browser_command: Option<&str>) -> Self {
        Self {
            browser: browser_command.and_then(classify_browser),
            dismissed: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.dismissed
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn browser(&self) -> Option<&BrowserInfo> {
        self.browser.as_ref()
    }

    /// Advisory text for the current browser
    pub fn message(&self) -> String {
        match &self.browser {
            Some(b) if b.built_in_adblock => format!(
                "{} blocks ads out of the box. Stream pages should open clean.",
                b.name
            ),
            Some(b) => format!(
                "Stream hosts are ad-heavy. Install an ad blocker (e.g. uBlock Origin) in {} before opening links.",
                b.name
            ),
            None => "Stream hosts are ad-heavy. Use a browser with an ad blocker when opening links.".to_string(),
        }
    }
}
