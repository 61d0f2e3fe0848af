//! Persistence: the flat JSON store and the queries the castlist needs from it.
//! Access submodules by full path, e.g. `database::tribes::tribes_in_castlist`.

pub mod models;
pub mod players;
pub mod store;
pub mod tribes;
