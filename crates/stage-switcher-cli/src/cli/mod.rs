//! CLI for previewing the stage switcher outside the CMS.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use stage_switcher_core::config::{self, SwitcherConfig};
use stage_switcher_core::host::StaticRequest;
use stage_switcher_core::switcher::StageSwitcher;
use std::path::PathBuf;

use commands::{run_completions, run_css, run_menu, run_rewrite, run_stages};

/// Top-level CLI for the stage switcher.
#[derive(Debug, Parser)]
#[command(name = "stage-switcher")]
#[command(about = "Preview the admin-toolbar stage switcher for a request", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/stage-switcher/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// The request being simulated.
#[derive(Debug, Clone, Args)]
pub struct RequestArgs {
    /// Request URI (path and query) being rendered.
    #[arg(long, default_value = "/")]
    pub uri: String,

    /// Render as a super-administrator.
    #[arg(long)]
    pub super_admin: bool,

    /// Home URL of the multi-site subsite serving the request.
    #[arg(long, value_name = "URL")]
    pub site_url: Option<String>,

    /// With --site-url: the subsite is the network's main site.
    #[arg(long, requires = "site_url")]
    pub main_site: bool,
}

impl RequestArgs {
    pub fn to_request(&self) -> StaticRequest {
        let mut req = StaticRequest::new(self.uri.clone()).super_admin(self.super_admin);
        if let Some(site_url) = &self.site_url {
            req = req.subsite(site_url.clone());
            req.main_site = self.main_site;
        }
        req
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List configured stages in menu order.
    Stages,

    /// Show the toolbar entries rendered for a request.
    Menu {
        #[command(flatten)]
        request: RequestArgs,

        /// Print entries as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the URL of the current request on another stage.
    Rewrite {
        /// Target stage name.
        #[arg(long)]
        stage: String,

        #[command(flatten)]
        request: RequestArgs,
    },

    /// Print the toolbar stylesheet.
    Css,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Load config (explicit path or XDG default), apply env overrides, build the switcher.
fn load_switcher(path: Option<&PathBuf>) -> Result<StageSwitcher> {
    let mut cfg: SwitcherConfig = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    cfg.apply_env_overrides();
    tracing::debug!("loaded config: {:?}", cfg);
    StageSwitcher::from_config(&cfg).context("invalid stage configuration")
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config_path = cli.config.as_ref();

        match cli.command {
            CliCommand::Stages => run_stages(&load_switcher(config_path)?)?,
            CliCommand::Menu { request, json } => {
                run_menu(&load_switcher(config_path)?, &request.to_request(), json)?
            }
            CliCommand::Rewrite { stage, request } => {
                run_rewrite(&load_switcher(config_path)?, &stage, &request.to_request())?
            }
            CliCommand::Css => run_css()?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
