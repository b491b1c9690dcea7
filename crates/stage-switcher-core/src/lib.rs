pub mod config;
pub mod logging;

pub mod host;
pub mod menu;
pub mod rewrite;
pub mod stages;
pub mod switcher;
