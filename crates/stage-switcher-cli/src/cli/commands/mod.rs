//! CLI command handlers, one per file.

mod completions;
mod css;
mod menu;
mod rewrite;
mod stages;

pub use completions::run_completions;
pub use css::run_css;
pub use menu::run_menu;
pub use rewrite::run_rewrite;
pub use stages::run_stages;
