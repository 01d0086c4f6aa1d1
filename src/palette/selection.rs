//! Additive selection and color cycling state.

use super::registry::ColorName;

/// Cycle thresholds (frames) selectable with shift+1..5.
pub const CYCLE_SPEEDS: [u32; 5] = [30, 80, 120, 160, 250];

/// Index into [`CYCLE_SPEEDS`] used by default (shift+4 / "3-Default" in help).
pub const DEFAULT_CYCLE_SPEED: usize = 3;

/// Cycle threshold forced by test mode so the palette changes quickly.
pub const TEST_MODE_CYCLE_THRESHOLD: u32 = 3;

/// Errors raised when editing an [`AdditiveSelection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("cannot remove {0}: additive mode needs at least one color")]
    LastMember(ColorName),
}

/// Ordered set of color groups mixed together in additive mode.
///
/// Never empty; starts as `["B&W"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditiveSelection {
    names: Vec<ColorName>,
}

impl Default for AdditiveSelection {
    fn default() -> Self {
        Self {
            names: vec![ColorName::BlackWhite],
        }
    }
}

impl AdditiveSelection {
    /// Selected groups in insertion order.
    pub fn names(&self) -> &[ColorName] {
        &self.names
    }

    pub fn contains(&self, name: ColorName) -> bool {
        self.names.contains(&name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no group is selected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Add `name` if absent, remove it if present.
    ///
    /// Removing the only remaining group is rejected and leaves the
    /// selection unchanged. Returns whether the name is selected afterwards.
    pub fn toggle(&mut self, name: ColorName) -> Result<bool, SelectionError> {
        match self.names.iter().position(|n| *n == name) {
            Some(_) if self.names.len() == 1 => Err(SelectionError::LastMember(name)),
            Some(idx) => {
                self.names.remove(idx);
                Ok(false)
            }
            None => {
                self.names.push(name);
                Ok(true)
            }
        }
    }

    /// Back to the single default group.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Progress through [`ColorName::CYCLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleState {
    /// Index into the cycle list
    pub index: usize,
    /// Frames since the last advance
    pub ticks: u32,
    /// Frames to wait before advancing
    pub threshold: u32,
}

impl Default for CycleState {
    fn default() -> Self {
        Self {
            index: 0,
            ticks: 0,
            threshold: CYCLE_SPEEDS[DEFAULT_CYCLE_SPEED],
        }
    }
}

impl CycleState {
    /// Color currently shown.
    pub fn current(&self) -> ColorName {
        ColorName::CYCLE[self.index]
    }

    /// Restart from the first color without touching the threshold.
    pub fn restart(&mut self) {
        self.index = 0;
        self.ticks = 0;
    }

    /// Move to the next color, wrapping at the end of the list.
    pub fn advance(&mut self) -> ColorName {
        self.index = (self.index + 1) % ColorName::CYCLE.len();
        self.ticks = 0;
        self.current()
    }

    /// Count one frame; advances and returns the new color once the
    /// threshold has been reached.
    pub fn tick(&mut self) -> Option<ColorName> {
        if self.ticks >= self.threshold {
            Some(self.advance())
        } else {
            self.ticks += 1;
            None
        }
    }

    /// Set the threshold from a shift+digit speed (1-5).
    ///
    /// Out-of-range speeds are ignored.
    pub fn set_speed(&mut self, speed: u8) {
        if let Some(threshold) = (speed as usize)
            .checked_sub(1)
            .and_then(|idx| CYCLE_SPEEDS.get(idx))
        {
            self.threshold = *threshold;
        }
    }

    pub fn reset_speed(&mut self) {
        self.threshold = CYCLE_SPEEDS[DEFAULT_CYCLE_SPEED];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_defaults_to_black_white() {
        let selection = AdditiveSelection::default();
        assert_eq!(selection.names(), &[ColorName::BlackWhite]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = AdditiveSelection::default();
        assert_eq!(selection.toggle(ColorName::Red), Ok(true));
        assert_eq!(selection.names(), &[ColorName::BlackWhite, ColorName::Red]);
        assert_eq!(selection.toggle(ColorName::Red), Ok(false));
        assert_eq!(selection.names(), &[ColorName::BlackWhite]);
    }

    #[test]
    fn toggle_twice_is_identity_for_absent_names() {
        let mut selection = AdditiveSelection::default();
        selection.toggle(ColorName::Green).unwrap();
        selection.toggle(ColorName::Cyan).unwrap();
        let before = selection.clone();

        for name in [ColorName::Red, ColorName::Blue, ColorName::Magenta] {
            selection.toggle(name).unwrap();
            selection.toggle(name).unwrap();
            assert_eq!(selection, before);
        }
    }

    #[test]
    fn toggle_twice_keeps_membership_for_present_names() {
        let mut selection = AdditiveSelection::default();
        selection.toggle(ColorName::Green).unwrap();
        selection.toggle(ColorName::BlackWhite).unwrap();
        selection.toggle(ColorName::BlackWhite).unwrap();
        assert!(selection.contains(ColorName::BlackWhite));
        assert!(selection.contains(ColorName::Green));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn removing_last_member_is_rejected() {
        let mut selection = AdditiveSelection::default();
        let err = selection.toggle(ColorName::BlackWhite).unwrap_err();
        assert_eq!(err, SelectionError::LastMember(ColorName::BlackWhite));
        assert_eq!(selection.names(), &[ColorName::BlackWhite]);
        assert!(!selection.is_empty());
    }

    #[test]
    fn reset_restores_default() {
        let mut selection = AdditiveSelection::default();
        selection.toggle(ColorName::Yellow).unwrap();
        selection.reset();
        assert_eq!(selection, AdditiveSelection::default());
    }

    #[test]
    fn cycle_wraps_after_full_lap() {
        let mut cycle = CycleState::default();
        let start = cycle.current();
        for _ in 0..ColorName::CYCLE.len() {
            cycle.advance();
        }
        assert_eq!(cycle.current(), start);
    }

    #[test]
    fn cycle_order_ends_with_black_white() {
        let mut cycle = CycleState::default();
        cycle.index = ColorName::CYCLE.len() - 1;
        assert_eq!(cycle.current(), ColorName::BlackWhite);
        assert_eq!(cycle.advance(), ColorName::Red);
    }

    #[test]
    fn tick_advances_after_threshold() {
        let mut cycle = CycleState {
            threshold: 2,
            ..CycleState::default()
        };
        assert_eq!(cycle.tick(), None);
        assert_eq!(cycle.tick(), None);
        assert_eq!(cycle.tick(), Some(ColorName::Green));
        assert_eq!(cycle.ticks, 0);
    }

    #[test]
    fn set_speed_uses_lookup_table() {
        let mut cycle = CycleState::default();
        assert_eq!(cycle.threshold, 160);
        cycle.set_speed(1);
        assert_eq!(cycle.threshold, 30);
        cycle.set_speed(5);
        assert_eq!(cycle.threshold, 250);
        cycle.set_speed(0);
        cycle.set_speed(6);
        assert_eq!(cycle.threshold, 250);
        cycle.reset_speed();
        assert_eq!(cycle.threshold, 160);
    }

    #[test]
    fn restart_keeps_threshold() {
        let mut cycle = CycleState::default();
        cycle.set_speed(2);
        cycle.advance();
        cycle.ticks = 7;
        cycle.restart();
        assert_eq!(cycle.index, 0);
        assert_eq!(cycle.ticks, 0);
        assert_eq!(cycle.threshold, 80);
    }
}
