//! Toolbar menu nodes emitted by the switcher.

use serde::Serialize;

use crate::host::AdminBar;

/// Id of the dropdown's root node.
pub const ROOT_ID: &str = "stage";
/// Toolbar group the root node is attached to (right-hand side).
pub const ROOT_PARENT: &str = "top-secondary";
/// Href used for non-clickable entries.
pub const NO_LINK: &str = "#";

/// One toolbar entry, as handed to the host's admin bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    pub id: String,
    pub parent: String,
    pub title: String,
    pub href: String,
}

impl MenuNode {
    /// Root entry showing the current stage; never a link.
    pub fn root(title: impl Into<String>) -> Self {
        Self {
            id: ROOT_ID.to_string(),
            parent: ROOT_PARENT.to_string(),
            title: title.into(),
            href: NO_LINK.to_string(),
        }
    }

    /// Child entry linking to another stage.
    pub fn stage_link(stage: &str, title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: format!("{ROOT_ID}_{stage}"),
            parent: ROOT_ID.to_string(),
            title: title.into(),
            href: href.into(),
        }
    }

    pub fn is_link(&self) -> bool {
        self.href != NO_LINK
    }
}

/// Admin bar that just records the nodes it receives.
#[derive(Debug, Default)]
pub struct MenuCollector {
    nodes: Vec<MenuNode>,
}

impl MenuCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<MenuNode> {
        self.nodes
    }
}

impl AdminBar for MenuCollector {
    fn add_menu(&mut self, node: MenuNode) {
        self.nodes.push(node);
    }
}
