//! The stage switcher: visibility gate plus menu and style hooks.

use std::fmt;

use thiserror::Error;

use crate::config::SwitcherConfig;
use crate::host::{AdminBar, RequestContext, ToolbarHooks};
use crate::menu::MenuNode;
use crate::rewrite::{self, RewriteError, StripMode};
use crate::stages::{capitalize_words, StageError, StageMap};

/// Stylesheet that puts the "admin-site" dashicon in front of the dropdown.
pub const TOOLBAR_CSS: &str = r#"<style>
  #wp-admin-bar-stage > a:before {
    content: "\f177";
    top: 2px;
  }
</style>
"#;

/// Decides whether the current user gets the switcher at all.
pub type VisibilityPredicate = Box<dyn Fn(&dyn RequestContext) -> bool + Send + Sync>;

#[derive(Debug, Error)]
pub enum SwitchError {
    #[error(transparent)]
    Stage(#[from] StageError),
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
    #[error("current stage is not configured")]
    NoCurrentStage,
    #[error("subdomain install requires the current site URL")]
    MissingSiteUrl,
}

pub struct StageSwitcher {
    stages: StageMap,
    current_stage: Option<String>,
    subdomain_install: bool,
    strip_mode: StripMode,
    visibility: VisibilityPredicate,
}

impl fmt::Debug for StageSwitcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageSwitcher")
            .field("stages", &self.stages)
            .field("current_stage", &self.current_stage)
            .field("subdomain_install", &self.subdomain_install)
            .field("strip_mode", &self.strip_mode)
            .finish_non_exhaustive()
    }
}

impl StageSwitcher {
    /// Switcher over `stages` with the default super-admin visibility check.
    pub fn new(stages: StageMap, current_stage: Option<String>) -> Self {
        Self {
            stages,
            current_stage,
            subdomain_install: false,
            strip_mode: StripMode::default(),
            visibility: Box::new(|ctx: &dyn RequestContext| ctx.is_super_admin()),
        }
    }

    pub fn from_config(cfg: &SwitcherConfig) -> Result<Self, StageError> {
        Ok(Self::new(cfg.stage_map()?, cfg.current_stage.clone())
            .with_subdomain_install(cfg.subdomain_install)
            .with_strip_mode(cfg.strip_mode))
    }

    pub fn with_subdomain_install(mut self, enabled: bool) -> Self {
        self.subdomain_install = enabled;
        self
    }

    pub fn with_strip_mode(mut self, mode: StripMode) -> Self {
        self.strip_mode = mode;
        self
    }

    /// Replace the visibility predicate.
    pub fn with_visibility<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&dyn RequestContext) -> bool + Send + Sync + 'static,
    {
        self.visibility = Box::new(predicate);
        self
    }

    pub fn stages(&self) -> &StageMap {
        &self.stages
    }

    pub fn current_stage(&self) -> Option<&str> {
        self.current_stage.as_deref()
    }

    /// Both the stage map and the current stage are present.
    pub fn is_configured(&self) -> bool {
        !self.stages.is_empty() && self.current_stage.is_some()
    }

    pub fn is_visible(&self, ctx: &dyn RequestContext) -> bool {
        self.is_configured() && (self.visibility)(ctx)
    }

    fn uses_subdomain_rewrite(&self, ctx: &dyn RequestContext) -> bool {
        ctx.is_multisite() && self.subdomain_install && !ctx.is_main_site()
    }

    /// URL of the current request on `target`.
    pub fn url_for(&self, target: &str, ctx: &dyn RequestContext) -> Result<String, SwitchError> {
        let current = self.current_stage.as_deref().ok_or(SwitchError::NoCurrentStage)?;
        let current = self
            .stages
            .get(current)
            .ok_or_else(|| StageError::UnknownCurrentStage(current.to_string()))?;
        let target = self.stages.require(target)?;

        let multi_tenant = self.uses_subdomain_rewrite(ctx);
        let site_url = if multi_tenant {
            ctx.current_site_url().ok_or(SwitchError::MissingSiteUrl)?
        } else {
            ""
        };

        Ok(rewrite::rewrite_with(
            &target.url,
            current.path(),
            ctx.request_uri(),
            multi_tenant,
            site_url,
            self.strip_mode,
        )?)
    }

    /// Nodes the toolbar should show for this request; empty when hidden.
    ///
    /// Stages whose URL cannot be rewritten are left out with a warning.
    pub fn build_menu(&self, ctx: &dyn RequestContext) -> Result<Vec<MenuNode>, StageError> {
        if !self.is_visible(ctx) {
            tracing::debug!("stage switcher hidden for this request");
            return Ok(Vec::new());
        }
        let Some(current) = self.current_stage.as_deref() else {
            return Ok(Vec::new());
        };
        if !self.stages.contains(current) {
            return Err(StageError::UnknownCurrentStage(current.to_string()));
        }

        let mut nodes = Vec::with_capacity(self.stages.len());
        nodes.push(MenuNode::root(capitalize_words(current)));

        for stage in self.stages.iter().filter(|s| s.name != current) {
            match self.url_for(&stage.name, ctx) {
                Ok(href) => nodes.push(MenuNode::stage_link(&stage.name, stage.label(), href)),
                Err(err) => {
                    tracing::warn!("skipping stage {}: {}", stage.name, err);
                }
            }
        }
        Ok(nodes)
    }
}

impl ToolbarHooks for StageSwitcher {
    fn on_render_menu(&self, bar: &mut dyn AdminBar, ctx: &dyn RequestContext) {
        match self.build_menu(ctx) {
            Ok(nodes) => {
                tracing::debug!("adding {} stage switcher entries", nodes.len());
                for node in nodes {
                    bar.add_menu(node);
                }
            }
            Err(err) => tracing::warn!("stage switcher disabled: {}", err),
        }
    }

    fn on_render_styles(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(TOOLBAR_CSS)
    }
}
