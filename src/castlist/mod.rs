//! Castlist engine: tribe ordering, component budgeting, pagination, navigation and
//! rendering. Everything here is synchronous except the tribe loader, which awaits the
//! guild directory.

pub mod card;
pub mod layout;
pub mod navigation;
pub mod order;
pub mod paginate;
pub mod render;
pub mod tribe;

pub use layout::{LayoutLimits, Scenario, determine_scenario};
pub use navigation::{NavAction, NavigationState};
pub use order::{OrderStrategy, reorder};
pub use render::{CastlistView, render};
pub use tribe::{Member, Tribe, load_tribes};
