//! This module acts as the router for component interactions.
//!
//! `handler.rs` delegates here; each component family (today only the castlist one)
//! gets its own handler, and custom_id formats live in `ids`.

pub mod castlist_handler;
pub mod ids;
pub mod util;
