//! Hover-card layout positioner
//!
//! Computes where the floating preview card sits relative to its anchor
//! poster so it never clips off-screen. Pure function of the anchor
//! rectangle and viewport width, in virtual pixels; the TUI maps terminal
//! cells to this space through the [`Viewport`] trait. Recomputed on every
//! hover entry since scrolling can move the anchor between hovers.

/// Hover card width in virtual pixels
pub const CARD_WIDTH: f64 = 320.0;
/// Anchor poster width in virtual pixels
pub const ANCHOR_WIDTH: f64 = 200.0;

/// Anchors this close to a viewport edge pin the card flush to the anchor
const EDGE_PIN: f64 = 100.0;
/// Minimum gap between the card and either viewport edge
const MARGIN: f64 = 20.0;

/// Anchor bounding rectangle in viewport pixels, read at computation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub left: f64,
    pub right: f64,
    pub width: f64,
}

impl AnchorRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self {
            left,
            right: left + width,
            width,
        }
    }
}

/// Measurement interface for the rendering surface
///
/// Keeps the positioner pure and unit-testable: anything that can report an
/// anchor rectangle and a viewport width can drive it.
pub trait Viewport {
    /// Bounding rectangle of the anchor at `index` in the hovered carousel
    fn anchor_rect(&self, index: usize) -> AnchorRect;
    /// Total viewport width in the same units
    fn width(&self) -> f64;
}

/// Where the hover card lands, as a CSS-like offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardPosition {
    /// Flush with the anchor's left edge (`left: 0`, no translate)
    FlushLeft,
    /// Flush with the anchor's right edge (`right: 0`, no translate)
    FlushRight,
    /// Card's left edge at a fixed viewport x (clamped near the left edge)
    AtViewportLeft(f64),
    /// Card's right edge inset from the viewport's right edge
    AtViewportRight(f64),
    /// Centered on the anchor: offset of the card's left edge from the
    /// anchor's left edge
    Centered { offset: f64 },
}

impl CardPosition {
    /// Resolve to absolute `(left, right)` card bounds in viewport pixels
    pub fn bounds(&self, anchor: AnchorRect, viewport_width: f64) -> (f64, f64) {
        let left = match self {
            CardPosition::FlushLeft => anchor.left,
            CardPosition::FlushRight => anchor.right - CARD_WIDTH,
            CardPosition::AtViewportLeft(x) => *x,
            CardPosition::AtViewportRight(inset) => viewport_width - inset - CARD_WIDTH,
            CardPosition::Centered { offset } => anchor.left + offset,
        };
        (left, left + CARD_WIDTH)
    }
}

/// Compute the hover card position for an anchor within the viewport
///
/// Tie-break/clamping policy, not a constraint solver: anchors near either
/// viewport edge pin flush, mid-viewport anchors center with a 20 px clamp.
pub fn card_position(anchor: AnchorRect, viewport_width: f64) -> CardPosition {
    // First visible element: pin to the anchor's left edge
    if anchor.left <= EDGE_PIN {
        return CardPosition::FlushLeft;
    }

    // Last visible element: pin to the anchor's right edge
    if anchor.right >= viewport_width - EDGE_PIN {
        return CardPosition::FlushRight;
    }

    // Mid-viewport: center the card on the anchor
    let center = anchor.left + ANCHOR_WIDTH / 2.0;
    let card_left = center - CARD_WIDTH / 2.0;

    if card_left < MARGIN {
        return CardPosition::AtViewportLeft(MARGIN);
    }
    if card_left + CARD_WIDTH > viewport_width - MARGIN {
        return CardPosition::AtViewportRight(MARGIN);
    }

    CardPosition::Centered {
        offset: card_left - anchor.left,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
