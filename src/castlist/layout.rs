//! Component budget arithmetic and display scenario resolution.
use super::tribe::Tribe;
use crate::constants::{
    COMPONENTS_PER_MEMBER, HEADER_COMPONENTS, NAVIGATION_RESERVE, PLATFORM_COMPONENT_LIMIT,
};
use crate::error::{CastlistError, Result};
use std::fmt;

/// How a castlist is laid out for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scenario {
    /// Every tribe and member on one screen, separated.
    Ideal,
    /// Every tribe on one screen once the inter-tribe separators are dropped.
    NoSeparators,
    /// One tribe per screen, split into pages, with a navigation row.
    MultiPage,
}

impl Scenario {
    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Ideal => "ideal",
            Scenario::NoSeparators => "no-separators",
            Scenario::MultiPage => "multi-page",
        }
    }

    pub fn uses_separators(self) -> bool {
        !matches!(self, Scenario::NoSeparators)
    }

    pub fn is_paginated(self) -> bool {
        matches!(self, Scenario::MultiPage)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget constants. Defaults follow Discord's current limits; the config layer can
/// override every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutLimits {
    pub component_limit: usize,
    pub navigation_reserve: usize,
    pub header_components: usize,
    pub components_per_member: usize,
}

impl Default for LayoutLimits {
    fn default() -> Self {
        Self {
            component_limit: PLATFORM_COMPONENT_LIMIT,
            navigation_reserve: NAVIGATION_RESERVE,
            header_components: HEADER_COMPONENTS,
            components_per_member: COMPONENTS_PER_MEMBER,
        }
    }
}

impl LayoutLimits {
    /// Components a fully expanded tribe block costs.
    pub fn components_for_tribe(&self, member_count: usize, use_separators: bool) -> usize {
        self.header_components
            + member_count * self.components_per_member
            + usize::from(use_separators)
    }

    /// Budget for one paginated screen: everything but the navigation row.
    pub fn page_budget(&self) -> usize {
        self.component_limit.saturating_sub(self.navigation_reserve)
    }

    /// Largest member count whose tribe block fits `page_budget`.
    pub fn page_size(&self, use_separators: bool) -> Result<usize> {
        let fixed = self.components_for_tribe(0, use_separators);
        let per_member = self.components_per_member.max(1);
        let budget = self.page_budget();
        let size = budget.saturating_sub(fixed) / per_member;
        if size == 0 {
            return Err(CastlistError::CapacityExceeded {
                needed: fixed + per_member,
                budget,
            });
        }
        Ok(size)
    }

    /// Page size with the one-member fallback applied when nothing fits.
    pub fn effective_page_size(&self, use_separators: bool) -> usize {
        self.page_size(use_separators).unwrap_or_else(|e| {
            tracing::warn!(target="castlist.layout", error=%e, "falling back to one member per page");
            1
        })
    }

    pub fn page_count(&self, member_count: usize, use_separators: bool) -> usize {
        member_count
            .div_ceil(self.effective_page_size(use_separators))
            .max(1)
    }
}

/// Scenario for a set of tribe sizes.
pub fn scenario_for_counts<I>(member_counts: I, limits: &LayoutLimits) -> Scenario
where
    I: IntoIterator<Item = usize> + Clone,
{
    let total = |seps: bool| -> usize {
        member_counts
            .clone()
            .into_iter()
            .map(|n| limits.components_for_tribe(n, seps))
            .sum()
    };
    if total(true) <= limits.component_limit {
        Scenario::Ideal
    } else if total(false) <= limits.component_limit {
        Scenario::NoSeparators
    } else {
        Scenario::MultiPage
    }
}

pub fn determine_scenario(tribes: &[Tribe], limits: &LayoutLimits) -> Scenario {
    scenario_for_counts(tribes.iter().map(Tribe::member_count), limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tribe_cost_formula() {
        let limits = LayoutLimits::default();
        assert_eq!(limits.components_for_tribe(0, false), 3);
        assert_eq!(limits.components_for_tribe(0, true), 4);
        assert_eq!(limits.components_for_tribe(5, true), 3 + 15 + 1);
    }

    #[test]
    fn default_page_size_is_ten() {
        let limits = LayoutLimits::default();
        assert_eq!(limits.page_budget(), 35);
        assert_eq!(limits.page_size(true).unwrap(), 10);
        assert_eq!(limits.page_size(false).unwrap(), 10);
    }

    #[test]
    fn page_size_never_zero() {
        let limits = LayoutLimits {
            component_limit: 6,
            navigation_reserve: 5,
            header_components: 3,
            components_per_member: 3,
        };
        assert!(matches!(
            limits.page_size(true),
            Err(CastlistError::CapacityExceeded { .. })
        ));
        assert_eq!(limits.effective_page_size(true), 1);
        assert_eq!(limits.page_count(4, true), 4);
    }

    #[test]
    fn page_count_has_floor_of_one() {
        let limits = LayoutLimits::default();
        assert_eq!(limits.page_count(0, true), 1);
        assert_eq!(limits.page_count(10, true), 1);
        assert_eq!(limits.page_count(11, true), 2);
        assert_eq!(limits.page_count(30, true), 3);
    }

    #[test]
    fn scenario_thresholds() {
        let limits = LayoutLimits::default();
        // 2 tribes: (3+3*5+1)*2 = 38 fits with separators.
        assert_eq!(scenario_for_counts([5, 5], &limits), Scenario::Ideal);
        // 3+18+1 + 3+15+1 = 41 > 40, without separators 39.
        assert_eq!(scenario_for_counts([6, 5], &limits), Scenario::NoSeparators);
        assert_eq!(scenario_for_counts([2, 30, 1], &limits), Scenario::MultiPage);
        assert_eq!(scenario_for_counts(Vec::<usize>::new(), &limits), Scenario::Ideal);
    }
}
