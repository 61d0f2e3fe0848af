//! Tribe ordering strategies applied before layout.
use super::tribe::Tribe;
use crate::constants::DEFAULT_CASTLIST;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStrategy {
    /// Tribes containing the requesting user come first (default castlist only).
    #[default]
    UserFirst,
    /// Keep the loader's order untouched.
    AsConfigured,
}

impl FromStr for OrderStrategy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user-first" => Ok(OrderStrategy::UserFirst),
            "as-configured" => Ok(OrderStrategy::AsConfigured),
            _ => Err(()),
        }
    }
}

/// Reorders tribes for one viewer. Non-default castlists are curated, so they pass
/// through unchanged. Both partitions keep their relative order.
pub fn reorder(
    tribes: Vec<Tribe>,
    requesting_user_id: &str,
    strategy: OrderStrategy,
    castlist: &str,
) -> Vec<Tribe> {
    if strategy == OrderStrategy::AsConfigured || castlist != DEFAULT_CASTLIST {
        return tribes;
    }
    let (mine, rest): (Vec<Tribe>, Vec<Tribe>) = tribes
        .into_iter()
        .partition(|t| t.has_member(requesting_user_id));
    mine.into_iter().chain(rest).collect()
}
