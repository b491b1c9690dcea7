//! `stage-switcher stages` – list configured stages.

use anyhow::Result;
use stage_switcher_core::switcher::StageSwitcher;

pub fn run_stages(switcher: &StageSwitcher) -> Result<()> {
    print!("{}", format_stages(switcher));
    Ok(())
}

pub(crate) fn format_stages(switcher: &StageSwitcher) -> String {
    let stages = switcher.stages();
    if stages.is_empty() {
        return "No stages configured.\n".to_string();
    }
    let current = switcher.current_stage();
    let mut out = format!("{:<2} {:<16} {:<12} {}\n", "", "STAGE", "PATH", "URL");
    for s in stages.iter() {
        let marker = if current == Some(s.name.as_str()) { "*" } else { "" };
        let path = if s.path().is_empty() { "-" } else { s.path() };
        out.push_str(&format!("{:<2} {:<16} {:<12} {}\n", marker, s.name, path, s.url));
    }
    if let Some(name) = current.filter(|c| !stages.contains(c)) {
        out.push_str(&format!("warning: current stage `{name}` is not listed\n"));
    }
    out
}
