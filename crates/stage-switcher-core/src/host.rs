//! Boundary to the host CMS.
//!
//! The host implements [`AdminBar`] and [`RequestContext`] and calls the two
//! [`ToolbarHooks`] methods from its toolbar render lifecycle: menu
//! registration first, then the pre-output style hook.

use std::fmt;

use crate::menu::MenuNode;

/// Host toolbar that accepts menu entries.
pub trait AdminBar {
    fn add_menu(&mut self, node: MenuNode);
}

/// Read-only view of the request being rendered.
pub trait RequestContext {
    /// Full request URI: path plus query string.
    fn request_uri(&self) -> &str;

    fn is_super_admin(&self) -> bool;

    fn is_multisite(&self) -> bool {
        false
    }

    fn is_main_site(&self) -> bool {
        true
    }

    /// Home URL of the site serving this request (multi-site installs).
    fn current_site_url(&self) -> Option<&str> {
        None
    }
}

/// The two toolbar lifecycle callbacks.
pub trait ToolbarHooks {
    /// Called while the toolbar collects its menu.
    fn on_render_menu(&self, bar: &mut dyn AdminBar, ctx: &dyn RequestContext);

    /// Called right before the toolbar is written out.
    fn on_render_styles(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Plain-data [`RequestContext`], for hosts that snapshot the request up front.
#[derive(Debug, Clone, Default)]
pub struct StaticRequest {
    pub request_uri: String,
    pub super_admin: bool,
    pub multisite: bool,
    pub main_site: bool,
    pub site_url: Option<String>,
}

impl StaticRequest {
    /// Single-site request for `request_uri`.
    pub fn new(request_uri: impl Into<String>) -> Self {
        Self {
            request_uri: request_uri.into(),
            main_site: true,
            ..Self::default()
        }
    }

    pub fn super_admin(mut self, yes: bool) -> Self {
        self.super_admin = yes;
        self
    }

    /// Mark as a non-main site of a multi-site install served from `site_url`.
    pub fn subsite(mut self, site_url: impl Into<String>) -> Self {
        self.multisite = true;
        self.main_site = false;
        self.site_url = Some(site_url.into());
        self
    }
}

impl RequestContext for StaticRequest {
    fn request_uri(&self) -> &str {
        &self.request_uri
    }

    fn is_super_admin(&self) -> bool {
        self.super_admin
    }

    fn is_multisite(&self) -> bool {
        self.multisite
    }

    fn is_main_site(&self) -> bool {
        self.main_site
    }

    fn current_site_url(&self) -> Option<&str> {
        self.site_url.as_deref()
    }
}
