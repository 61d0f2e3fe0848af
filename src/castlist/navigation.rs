//! Position within a castlist: which tribe and which of its pages is on screen.
//!
//! The state is rebuilt on every click from the button's custom_id, so every
//! transition is a pure function of the current value.
use super::layout::{LayoutLimits, Scenario, determine_scenario};
use super::tribe::Tribe;

/// A move requested by a navigation button.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavAction {
    NextPage,
    /// Previous page ("last" as in the one before).
    LastPage,
    NextTribe,
    /// Previous tribe.
    LastTribe,
    /// Boundary placeholder; the suffix keeps ids unique within one message.
    Disabled(String),
}

impl NavAction {
    pub fn is_disabled(&self) -> bool {
        matches!(self, NavAction::Disabled(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub tribe_index: usize,
    pub tribe_page: usize,
    pub scenario: Scenario,
    page_counts: Vec<usize>,
}

impl NavigationState {
    /// Initial `(0, 0)` state over explicit per-tribe page counts.
    pub fn new(scenario: Scenario, page_counts: Vec<usize>) -> Self {
        let page_counts = page_counts.into_iter().map(|n| n.max(1)).collect();
        Self {
            tribe_index: 0,
            tribe_page: 0,
            scenario,
            page_counts,
        }
    }

    /// Initial state for a tribe list. Only multi-page layouts have more than one page
    /// per tribe; the other scenarios show everything at once.
    pub fn for_tribes(tribes: &[Tribe], limits: &LayoutLimits) -> Self {
        let scenario = determine_scenario(tribes, limits);
        let page_counts = tribes
            .iter()
            .map(|t| {
                if scenario.is_paginated() {
                    limits.page_count(t.member_count(), scenario.uses_separators())
                } else {
                    1
                }
            })
            .collect();
        Self::new(scenario, page_counts)
    }

    /// Moves to a decoded position, clamping both coordinates into range. The tribe
    /// list may have changed since the button was rendered.
    #[must_use]
    pub fn resume(&self, tribe_index: usize, tribe_page: usize) -> Self {
        let mut next = self.clone();
        next.tribe_index = tribe_index.min(self.tribe_count().saturating_sub(1));
        next.tribe_page = tribe_page.min(next.pages_in_current_tribe() - 1);
        next
    }

    pub fn tribe_count(&self) -> usize {
        self.page_counts.len()
    }

    pub fn pages_in_current_tribe(&self) -> usize {
        self.page_counts
            .get(self.tribe_index)
            .copied()
            .unwrap_or(1)
    }

    pub fn has_prev_page(&self) -> bool {
        self.tribe_page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.tribe_page + 1 < self.pages_in_current_tribe()
    }

    pub fn has_prev_tribe(&self) -> bool {
        self.tribe_index > 0
    }

    pub fn has_next_tribe(&self) -> bool {
        self.tribe_index + 1 < self.tribe_count()
    }

    #[must_use]
    pub fn next_page(&self) -> Self {
        let mut next = self.clone();
        if self.has_next_page() {
            next.tribe_page += 1;
        }
        next
    }

    #[must_use]
    pub fn prev_page(&self) -> Self {
        let mut next = self.clone();
        if self.has_prev_page() {
            next.tribe_page -= 1;
        }
        next
    }

    #[must_use]
    pub fn next_tribe(&self) -> Self {
        let mut next = self.clone();
        if self.has_next_tribe() {
            next.tribe_index += 1;
            next.tribe_page = 0;
        }
        next
    }

    #[must_use]
    pub fn prev_tribe(&self) -> Self {
        let mut next = self.clone();
        if self.has_prev_tribe() {
            next.tribe_index -= 1;
            next.tribe_page = 0;
        }
        next
    }

    /// Applies a decoded button action. Disabled buttons never move.
    #[must_use]
    pub fn apply(&self, action: &NavAction) -> Self {
        match action {
            NavAction::NextPage => self.next_page(),
            NavAction::LastPage => self.prev_page(),
            NavAction::NextTribe => self.next_tribe(),
            NavAction::LastTribe => self.prev_tribe(),
            NavAction::Disabled(_) => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> NavigationState {
        NavigationState::new(Scenario::MultiPage, vec![1, 3, 1])
    }

    #[test]
    fn starts_at_origin() {
        let s = grid();
        assert_eq!((s.tribe_index, s.tribe_page), (0, 0));
    }

    #[test]
    fn tribe_moves_reset_page() {
        let s = grid().next_tribe().next_page().next_page();
        assert_eq!((s.tribe_index, s.tribe_page), (1, 2));
        let back = s.prev_tribe();
        assert_eq!((back.tribe_index, back.tribe_page), (0, 0));
        let fwd = s.next_tribe();
        assert_eq!((fwd.tribe_index, fwd.tribe_page), (2, 0));
    }

    #[test]
    fn resume_clamps_out_of_range_positions() {
        let s = grid().resume(7, 9);
        assert_eq!((s.tribe_index, s.tribe_page), (2, 0));
        let s = grid().resume(1, 9);
        assert_eq!((s.tribe_index, s.tribe_page), (1, 2));
    }

    #[test]
    fn resume_with_no_tribes_stays_at_origin() {
        let s = NavigationState::new(Scenario::Ideal, vec![]).resume(3, 3);
        assert_eq!((s.tribe_index, s.tribe_page), (0, 0));
        assert!(!s.has_next_tribe());
        assert!(!s.has_next_page());
    }

    #[test]
    fn disabled_action_is_a_no_op() {
        let s = grid().next_tribe();
        assert_eq!(s.apply(&NavAction::Disabled("next".into())), s);
    }
}
