//! Minimal host toolbar for integration tests.
//!
//! Mirrors the host render lifecycle: registered hooks get the menu callback
//! first, then the style callback, and the toolbar renders nodes as HTML-ish
//! lines so tests can assert on the final output.

use std::fmt::Write;

use stage_switcher_core::host::{AdminBar, RequestContext, ToolbarHooks};
use stage_switcher_core::menu::MenuNode;

#[derive(Default)]
pub struct FakeToolbar {
    pub nodes: Vec<MenuNode>,
    pub head: String,
}

impl AdminBar for FakeToolbar {
    fn add_menu(&mut self, node: MenuNode) {
        assert!(
            self.nodes.iter().all(|n| n.id != node.id),
            "duplicate menu id {}",
            node.id
        );
        self.nodes.push(node);
    }
}

impl FakeToolbar {
    /// Run both hooks in host order and return the rendered toolbar.
    pub fn render(hooks: &[&dyn ToolbarHooks], ctx: &dyn RequestContext) -> Self {
        let mut bar = FakeToolbar::default();
        for h in hooks {
            h.on_render_menu(&mut bar, ctx);
        }
        for h in hooks {
            h.on_render_styles(&mut bar.head).unwrap();
        }
        bar
    }

    pub fn html(&self) -> String {
        let mut out = self.head.clone();
        for n in &self.nodes {
            writeln!(
                out,
                "<li id=\"wp-admin-bar-{}\" data-parent=\"{}\"><a href=\"{}\">{}</a></li>",
                n.id, n.parent, n.href, n.title
            )
            .unwrap();
        }
        out
    }

    pub fn href_of(&self, id: &str) -> Option<&str> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.href.as_str())
    }
}
