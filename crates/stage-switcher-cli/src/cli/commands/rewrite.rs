//! `stage-switcher rewrite` – URL of the current request on one stage.

use anyhow::{Context, Result};
use stage_switcher_core::host::RequestContext;
use stage_switcher_core::switcher::StageSwitcher;

pub fn run_rewrite(switcher: &StageSwitcher, stage: &str, request: &dyn RequestContext) -> Result<()> {
    let url = switcher
        .url_for(stage, request)
        .with_context(|| format!("rewrite {} for stage {stage}", request.request_uri()))?;
    println!("{url}");
    Ok(())
}
