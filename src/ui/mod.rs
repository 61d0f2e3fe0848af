//! UI building blocks: the generic component tree, button helpers, style constants
//! and the Components V2 wire adapter.
pub mod buttons;
pub mod components_v2;
pub mod style;
pub mod tree;
