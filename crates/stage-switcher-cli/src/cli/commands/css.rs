//! `stage-switcher css` – print the toolbar stylesheet.

use anyhow::Result;
use stage_switcher_core::host::ToolbarHooks;
use stage_switcher_core::stages::StageMap;
use stage_switcher_core::switcher::StageSwitcher;

/// The stylesheet is fixed, so no configuration is loaded.
pub fn run_css() -> Result<()> {
    print!("{}", render_css()?);
    Ok(())
}

pub(crate) fn render_css() -> Result<String> {
    let mut css = String::new();
    StageSwitcher::new(StageMap::default(), None).on_render_styles(&mut css)?;
    Ok(css)
}
