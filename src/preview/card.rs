//! Preview card state machine
//!
//! Each poster card owns one of these. The card moves between three phases:
//! idle, hover preview, and full detail modal. The modal is driven by the
//! shared `info` navigation parameter, but a card that has been explicitly
//! closed stays closed until the parameter moves away and comes back, so
//! stale state cannot reopen the modal.

use crate::models::MovieSummary;
use crate::nav::{NavState, NavStore, NavSubscription, ScrollLock, ScrollLockGuard};

/// Presentation phase of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// Plain poster
    Idle,
    /// Floating preview card shown over the poster
    Hovering,
    /// Full-screen detail modal
    ModalOpen,
}

/// Pure phase computation shared by [`PreviewCard::phase`] and tests
///
/// The modal shows exactly when the navigation parameter selects this card
/// and the card has not been explicitly closed since. Hover is suppressed
/// while the modal is open.
pub fn reduce(
    nav_info: Option<&str>,
    movie_id: &str,
    modal_was_closed: bool,
    hovered: bool,
) -> CardPhase {
    let selected = nav_info == Some(movie_id);
    if selected && !modal_was_closed {
        CardPhase::ModalOpen
    } else if hovered {
        CardPhase::Hovering
    } else {
        CardPhase::Idle
    }
}

/// One poster card with its hover and modal state
#[derive(Debug)]
pub struct PreviewCard {
    pub movie: MovieSummary,
    hovered: bool,
    /// Set when the user dismisses the modal; re-armed when the navigation
    /// parameter moves to another card or clears
    modal_was_closed: bool,
    /// Cached `nav.info == movie.id` from the last sync
    selected: bool,
    subscription: NavSubscription,
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl PreviewCard {
    /// Mount a card: subscribes to navigation changes immediately
    pub fn new(movie: MovieSummary, nav: &mut NavStore, lock: ScrollLock) -> Self {
        let subscription = nav.subscribe();
        let mut card = Self {
            movie,
            hovered: false,
            modal_was_closed: false,
            selected: false,
            subscription,
            lock,
            guard: None,
        };
        card.sync(&nav.state().clone());
        card
    }

    pub fn phase(&self) -> CardPhase {
        if self.selected && !self.modal_was_closed {
            CardPhase::ModalOpen
        } else if self.hovered {
            CardPhase::Hovering
        } else {
            CardPhase::Idle
        }
    }

    /// Cursor moved onto the poster. Ignored while the modal is open.
    pub fn pointer_enter(&mut self) {
        if self.phase() != CardPhase::ModalOpen {
            self.hovered = true;
        }
    }

    /// Cursor left the poster
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Promote the hover preview to the full modal
    ///
    /// Publishes the card's id as the `info` parameter; the modal itself
    /// appears on the next [`sync`](Self::sync).
    pub fn open_info(&mut self, nav: &mut NavStore) {
        self.modal_was_closed = false;
        self.hovered = false;
        nav.open_info(self.movie.id.clone());
    }

    /// Dismiss the modal and drop back to idle
    pub fn close(&mut self, nav: &mut NavStore) {
        self.modal_was_closed = true;
        self.hovered = false;
        self.guard = None;
        nav.clear_info();
    }

    /// Absorb a navigation change if one was published since the last poll
    ///
    /// Cheap no-op when the subscription is clean. Owns the scroll lock
    /// guard: held exactly while this card's modal is visible.
    pub fn sync(&mut self, nav: &NavState) {
        if !self.subscription.take_dirty() {
            return;
        }

        let selected = nav.info.as_deref() == Some(self.movie.id.as_str());
        if !selected {
            // Parameter moved away or cleared: re-arm for the next open
            self.modal_was_closed = false;
        }
        self.selected = selected;

        if self.phase() == CardPhase::ModalOpen {
            self.hovered = false;
            if self.guard.is_none() {
                self.guard = Some(self.lock.acquire());
            }
        } else {
            self.guard = None;
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: format!("Title {}", id),
            ..Default::default()
        }
    }

    fn mounted(id: &str, nav: &mut NavStore, lock: &ScrollLock) -> PreviewCard {
        PreviewCard::new(movie(id), nav, lock.clone())
    }

    #[test]
    fn test_reduce_phase_table() {
        assert_eq!(reduce(None, "1", false, false), CardPhase::Idle);
        assert_eq!(reduce(None, "1", false, true), CardPhase::Hovering);
        assert_eq!(reduce(Some("1"), "1", false, false), CardPhase::ModalOpen);
        // Hover never shows through an open modal
        assert_eq!(reduce(Some("1"), "1", false, true), CardPhase::ModalOpen);
        // Closed flag masks the parameter
        assert_eq!(reduce(Some("1"), "1", true, false), CardPhase::Idle);
        assert_eq!(reduce(Some("1"), "1", true, true), CardPhase::Hovering);
        // Another card's id never opens this one
        assert_eq!(reduce(Some("2"), "1", false, false), CardPhase::Idle);
    }

    #[test]
    fn test_hover_then_open_then_close() {
        let mut nav = NavStore::new();
        let lock = ScrollLock::new();
        let mut card = mounted("1", &mut nav, &lock);
        assert_eq!(card.phase(), CardPhase::Idle);

        card.pointer_enter();
        assert_eq!(card.phase(), CardPhase::Hovering);

        card.open_info(&mut nav);
        card.sync(&nav.state().clone());
        assert_eq!(card.phase(), CardPhase::ModalOpen);
        assert!(lock.is_locked());

        card.close(&mut nav);
        assert_eq!(card.phase(), CardPhase::Idle);
        assert!(!lock.is_locked());
        assert_eq!(nav.info(), None);
    }

    #[test]
    fn test_closed_modal_stays_closed_until_rearmed() {
        let mut nav = NavStore::new();
        let lock = ScrollLock::new();
        let mut card = mounted("1", &mut nav, &lock);

        card.open_info(&mut nav);
        card.sync(&nav.state().clone());
        card.close(&mut nav);
        card.sync(&nav.state().clone());
        assert_eq!(card.phase(), CardPhase::Idle);

        // Reopening after a full clear works again
        card.open_info(&mut nav);
        card.sync(&nav.state().clone());
        assert_eq!(card.phase(), CardPhase::ModalOpen);
    }

    #[test]
    fn test_parameter_moving_away_rearms() {
        let mut nav = NavStore::new();
        let lock = ScrollLock::new();
        let mut card = mounted("1", &mut nav, &lock);

        card.open_info(&mut nav);
        card.sync(&nav.state().clone());
        card.close(&mut nav);
        card.sync(&nav.state().clone());

        // Another card opens, then this one is selected again externally
        nav.open_info("2");
        card.sync(&nav.state().clone());
        nav.open_info("1");
        card.sync(&nav.state().clone());
        assert_eq!(card.phase(), CardPhase::ModalOpen);
    }

    #[test]
    fn test_two_cards_mutually_exclusive() {
        let mut nav = NavStore::new();
        let lock = ScrollLock::new();
        let mut x = mounted("1", &mut nav, &lock);
        let mut y = mounted("2", &mut nav, &lock);

        x.open_info(&mut nav);
        let snap = nav.state().clone();
        x.sync(&snap);
        y.sync(&snap);
        assert_eq!(x.phase(), CardPhase::ModalOpen);
        assert_eq!(y.phase(), CardPhase::Idle);

        y.open_info(&mut nav);
        let snap = nav.state().clone();
        x.sync(&snap);
        y.sync(&snap);
        assert_eq!(x.phase(), CardPhase::Idle);
        assert_eq!(y.phase(), CardPhase::ModalOpen);
        // Exactly one lock holder across the swap
        assert!(lock.is_locked());
        y.close(&mut nav);
        let snap = nav.state().clone();
        x.sync(&snap);
        y.sync(&snap);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_hover_suppressed_while_modal_open() {
        let mut nav = NavStore::new();
        let lock = ScrollLock::new();
        let mut card = mounted("1", &mut nav, &lock);

        card.open_info(&mut nav);
        card.sync(&nav.state().clone());
        card.pointer_enter();
        assert!(!card.is_hovered());
        assert_eq!(card.phase(), CardPhase::ModalOpen);
    }

    #[test]
    fn test_repeated_open_close_cycles_release_lock() {
        let mut nav = NavStore::new();
        let lock = ScrollLock::new();
        let mut card = mounted("1", &mut nav, &lock);

        for _ in 0..3 {
            card.open_info(&mut nav);
            card.sync(&nav.state().clone());
            assert!(lock.is_locked());
            card.close(&mut nav);
            card.sync(&nav.state().clone());
            assert!(!lock.is_locked());
        }
    }

    #[test]
    fn test_drop_releases_lock_and_subscription() {
        let mut nav = NavStore::new();
        let lock = ScrollLock::new();
        {
            let mut card = mounted("1", &mut nav, &lock);
            card.open_info(&mut nav);
            card.sync(&nav.state().clone());
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
        nav.open_info("2");
        assert_eq!(nav.subscriber_count(), 0);
    }
}
