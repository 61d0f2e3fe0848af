//! Service layer between interaction handlers and the castlist engine.
pub mod castlist;
pub mod directory;
