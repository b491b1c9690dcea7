//! `stage-switcher menu` – show the entries the toolbar would get.

use anyhow::Result;
use stage_switcher_core::host::{RequestContext, ToolbarHooks};
use stage_switcher_core::menu::{MenuCollector, MenuNode};
use stage_switcher_core::stages::StageError;
use stage_switcher_core::switcher::StageSwitcher;

pub fn run_menu(switcher: &StageSwitcher, request: &dyn RequestContext, json: bool) -> Result<()> {
    let nodes = render_menu(switcher, request)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
    } else {
        print!("{}", format_menu(&nodes));
    }
    Ok(())
}

/// Run the menu hook once. A current stage missing from the map is reported
/// here, since the hook itself only logs it.
pub(crate) fn render_menu(
    switcher: &StageSwitcher,
    request: &dyn RequestContext,
) -> Result<Vec<MenuNode>, StageError> {
    if let Some(current) = switcher.current_stage() {
        if !switcher.stages().is_empty() && !switcher.stages().contains(current) {
            return Err(StageError::UnknownCurrentStage(current.to_string()));
        }
    }
    let mut bar = MenuCollector::new();
    switcher.on_render_menu(&mut bar, request);
    Ok(bar.into_nodes())
}

pub(crate) fn format_menu(nodes: &[MenuNode]) -> String {
    if nodes.is_empty() {
        return "Stage switcher hidden for this request.\n".to_string();
    }
    let mut out = format!("{:<20} {:<14} {:<14} {}\n", "ID", "PARENT", "TITLE", "HREF");
    for n in nodes {
        out.push_str(&format!(
            "{:<20} {:<14} {:<14} {}\n",
            n.id, n.parent, n.title, n.href
        ));
    }
    out
}
