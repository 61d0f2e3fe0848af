// Slash command modules. Each exposes `register()` and its run entry points.

pub mod castlist;
