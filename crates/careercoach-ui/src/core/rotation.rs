//! Cyclic rotation state for the testimonial carousel.
//!
//! # Design
//! - Pure state machine; the view owns the timer and feeds [`Rotation::tick`].
//! - Manual navigation bumps `epoch` so the view can re-arm its interval and
//!   restart the countdown.
//! - A zero-length rotation ignores every transition.

use thiserror::Error;

/// Rejected rotation transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RotationError {
    /// Jump target outside `0..len`.
    #[error("index {index} is out of range for {len} items")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of items in the rotation.
        len: usize,
    },
}

/// Current position within a cyclic list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
    paused: bool,
    epoch: u32,
}

impl Rotation {
    /// Rotation over `len` items starting at the first, auto-advance enabled.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            paused: false,
            epoch: 0,
        }
    }

    /// Current index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Item count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the rotation has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether auto-advance is suspended.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Manual navigation counter.
    #[must_use]
    pub const fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Move to the next item (manual).
    pub const fn advance(&mut self) {
        if self.step_forward() {
            self.bump();
        }
    }

    /// Move to the previous item (manual).
    pub const fn retreat(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.bump();
    }

    /// Jump straight to `index` (manual).
    ///
    /// # Errors
    /// Returns [`RotationError::OutOfRange`] when `index >= len`; the state is
    /// left unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<(), RotationError> {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "rotation jump rejected");
            return Err(RotationError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        self.bump();
        Ok(())
    }

    /// Timer-driven advance; ignored while paused.
    pub const fn tick(&mut self) {
        if !self.paused {
            self.step_forward();
        }
    }

    /// Suspend or resume auto-advance.
    pub const fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the paused flag.
    pub const fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    const fn step_forward(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    const fn bump(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careercoach_test_support::fixtures::testimonials;

    #[test]
    fn advance_wraps_after_last_item() {
        let mut rotation = Rotation::new(4);
        for _ in 0..3 {
            rotation.advance();
        }
        assert_eq!(rotation.index(), 3);
        rotation.advance();
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn retreat_wraps_to_last_item() {
        let mut rotation = Rotation::new(4);
        rotation.retreat();
        assert_eq!(rotation.index(), 3);
        rotation.retreat();
        assert_eq!(rotation.index(), 2);
    }

    #[test]
    fn out_of_range_jump_leaves_state_alone() {
        let mut rotation = Rotation::new(4);
        rotation.jump_to(2).expect("in range");
        let before = rotation;
        assert_eq!(
            rotation.jump_to(4),
            Err(RotationError::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(rotation, before);
    }

    #[test]
    fn tick_respects_pause_and_keeps_epoch() {
        let mut rotation = Rotation::new(3);
        rotation.tick();
        assert_eq!(rotation.index(), 1);
        assert_eq!(rotation.epoch(), 0);

        rotation.toggle_paused();
        rotation.tick();
        assert_eq!(rotation.index(), 1);

        rotation.set_paused(false);
        rotation.tick();
        assert_eq!(rotation.index(), 2);
    }

    #[test]
    fn manual_navigation_bumps_epoch() {
        let mut rotation = Rotation::new(3);
        rotation.advance();
        rotation.retreat();
        rotation.jump_to(1).expect("in range");
        assert_eq!(rotation.epoch(), 3);
    }

    #[test]
    fn empty_rotation_is_inert() {
        let mut rotation = Rotation::new(0);
        rotation.advance();
        rotation.retreat();
        rotation.tick();
        assert!(rotation.jump_to(0).is_err());
        assert_eq!(rotation, Rotation::new(0));
        assert!(rotation.is_empty());
    }

    #[test]
    fn full_cycle_over_testimonials_returns_to_the_first() {
        let stories = testimonials(4);
        let mut rotation = Rotation::new(stories.len());
        let mut seen = Vec::new();
        for _ in 0..stories.len() {
            seen.push(stories[rotation.index()].id);
            rotation.tick();
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(stories[rotation.index()].id, 1);
    }
}
