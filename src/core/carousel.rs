//! Image carousel state machine for the item detail modal.
//!
//! The carousel is an explicit finite-state machine over a non-empty image
//! list: `Closed`, `Open` (modal visible), and `Fullscreen` (modal visible
//! with the fullscreen image layer on top). Dismissal is two-tier: a dismiss
//! gesture (Escape or backdrop click) exits fullscreen first and only closes
//! the modal from the non-fullscreen tier. There is no direct
//! `Fullscreen -> Closed` transition.
//!
//! All operations are total: navigation wraps around, and every method on a
//! `Closed` carousel is a no-op.

/// Carousel state, scoped to one open modal instance.
///
/// `count` is the image count of the bound item and is at least 1 for any
/// item the gallery displays (enforced at creation time by the add-item
/// form, not checked here).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Carousel {
    /// No modal open.
    #[default]
    Closed,
    /// Modal open, showing image `index` of `count`.
    Open { index: usize, count: usize },
    /// Modal open with the fullscreen image layer active.
    Fullscreen { index: usize, count: usize },
}

impl Carousel {
    /// Open the carousel on an item with `count` images.
    ///
    /// Always starts at index 0 with fullscreen off, also when reopening the
    /// same item.
    pub fn open(count: usize) -> Self {
        Self::Open { index: 0, count }
    }

    /// Whether the modal is visible (either tier).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether the fullscreen layer is active.
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, Self::Fullscreen { .. })
    }

    /// Currently displayed image index, if open.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Open { index, .. } | Self::Fullscreen { index, .. } => Some(*index),
        }
    }

    /// Advance to the next image, wrapping from the last index to 0.
    #[must_use]
    pub fn next(self) -> Self {
        self.map_index(|index, count| (index + 1) % count)
    }

    /// Step back to the previous image, wrapping from 0 to the last index.
    #[must_use]
    pub fn previous(self) -> Self {
        self.map_index(|index, count| (index + count - 1) % count)
    }

    /// Jump directly to image `i`.
    ///
    /// Out-of-range indices are ignored and the state is returned unchanged;
    /// the thumbnail strip only emits valid indices, so an invalid `i` is a
    /// caller bug rather than a user action.
    #[must_use]
    pub fn select(self, i: usize) -> Self {
        self.map_index(|index, count| if i < count { i } else { index })
    }

    /// Toggle the fullscreen layer, preserving the image index.
    #[must_use]
    pub fn toggle_fullscreen(self) -> Self {
        match self {
            Self::Closed => Self::Closed,
            Self::Open { index, count } => Self::Fullscreen { index, count },
            Self::Fullscreen { index, count } => Self::Open { index, count },
        }
    }

    /// Leave the fullscreen layer, keeping the modal open.
    #[must_use]
    pub fn exit_fullscreen(self) -> Self {
        match self {
            Self::Fullscreen { index, count } => Self::Open { index, count },
            other => other,
        }
    }

    /// Two-tier dismissal, shared by Escape and backdrop clicks: exit
    /// fullscreen if fullscreen, otherwise close the modal.
    #[must_use]
    pub fn dismiss(self) -> Self {
        match self {
            Self::Closed => Self::Closed,
            Self::Open { .. } => Self::Closed,
            Self::Fullscreen { index, count } => Self::Open { index, count },
        }
    }

    /// Explicit close control. Only reachable from the non-fullscreen tier;
    /// from `Fullscreen` this is a no-op (exit fullscreen first).
    #[must_use]
    pub fn close(self) -> Self {
        match self {
            Self::Open { .. } => Self::Closed,
            other => other,
        }
    }

    fn map_index(self, f: impl FnOnce(usize, usize) -> usize) -> Self {
        match self {
            Self::Closed => Self::Closed,
            Self::Open { index, count } => Self::Open {
                index: f(index, count),
                count,
            },
            Self::Fullscreen { index, count } => Self::Fullscreen {
                index: f(index, count),
                count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_starts_at_zero() {
        let c = Carousel::open(3);
        assert_eq!(c, Carousel::Open { index: 0, count: 3 });
        assert!(!c.is_fullscreen());
    }

    #[test]
    fn test_next_wraps_around() {
        // 3 images: 0 -> 1 -> 2 -> 0
        let mut c = Carousel::open(3);
        assert_eq!(c.index(), Some(0));
        c = c.next();
        assert_eq!(c.index(), Some(1));
        c = c.next();
        assert_eq!(c.index(), Some(2));
        c = c.next();
        assert_eq!(c.index(), Some(0));
    }

    #[test]
    fn test_previous_wraps_from_zero() {
        let c = Carousel::open(3).previous();
        assert_eq!(c.index(), Some(2));
    }

    #[test]
    fn test_cyclic_group_property() {
        // next^count and previous^count are both the identity
        for count in 1..=5 {
            let start = Carousel::open(count).select(count / 2);
            let mut forward = start;
            let mut backward = start;
            for _ in 0..count {
                forward = forward.next();
                backward = backward.previous();
            }
            assert_eq!(forward, start);
            assert_eq!(backward, start);
        }
    }

    #[test]
    fn test_next_previous_inverse() {
        for index in 0..4 {
            let start = Carousel::open(4).select(index);
            assert_eq!(start.next().previous(), start);
            assert_eq!(start.previous().next(), start);
        }
    }

    #[test]
    fn test_single_image_navigation_stays_put() {
        let c = Carousel::open(1);
        assert_eq!(c.next().index(), Some(0));
        assert_eq!(c.previous().index(), Some(0));
    }

    #[test]
    fn test_select_valid_index() {
        let c = Carousel::open(4).select(2);
        assert_eq!(c.index(), Some(2));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let c = Carousel::open(3).select(1);
        assert_eq!(c.select(3), c);
        assert_eq!(c.select(99), c);
    }

    #[test]
    fn test_fullscreen_preserves_index() {
        let c = Carousel::open(3).next();
        let fs = c.toggle_fullscreen();
        assert!(fs.is_fullscreen());
        assert_eq!(fs.index(), Some(1));
        assert_eq!(fs.toggle_fullscreen(), c);
    }

    #[test]
    fn test_navigation_works_in_fullscreen() {
        let fs = Carousel::open(3).toggle_fullscreen().next();
        assert!(fs.is_fullscreen());
        assert_eq!(fs.index(), Some(1));
    }

    #[test]
    fn test_two_tier_dismissal() {
        // Dismiss while fullscreen: modal stays open, fullscreen drops
        let fs = Carousel::open(3).next().toggle_fullscreen();
        let dismissed = fs.dismiss();
        assert!(dismissed.is_open());
        assert!(!dismissed.is_fullscreen());
        assert_eq!(dismissed.index(), Some(1));

        // Dismiss again: modal closes
        assert_eq!(dismissed.dismiss(), Carousel::Closed);
    }

    #[test]
    fn test_close_from_fullscreen_is_disallowed() {
        let fs = Carousel::open(2).toggle_fullscreen();
        // Must go through Open first
        assert_eq!(fs.close(), fs);
        assert_eq!(fs.exit_fullscreen().close(), Carousel::Closed);
    }

    #[test]
    fn test_closed_is_inert() {
        let closed = Carousel::Closed;
        assert_eq!(closed.next(), closed);
        assert_eq!(closed.previous(), closed);
        assert_eq!(closed.select(0), closed);
        assert_eq!(closed.toggle_fullscreen(), closed);
        assert_eq!(closed.dismiss(), closed);
        assert_eq!(closed.index(), None);
    }

    #[test]
    fn test_reopen_resets_index() {
        let c = Carousel::open(3).next().next();
        assert_eq!(c.dismiss(), Carousel::Closed);
        assert_eq!(Carousel::open(3).index(), Some(0));
    }
}
