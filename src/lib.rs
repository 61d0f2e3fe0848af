// Library entry so integration tests and the binary share the same modules.
pub mod castlist;
pub mod commands;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod services;
pub mod ui;

pub use error::{CastlistError, Result};
pub use model::AppState;
