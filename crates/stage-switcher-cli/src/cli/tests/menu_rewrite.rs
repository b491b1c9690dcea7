//! Tests for the menu and rewrite subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use stage_switcher_core::host::RequestContext;

#[test]
fn cli_parse_menu_defaults() {
    match parse(&["stage-switcher", "menu"]) {
        CliCommand::Menu { request, json } => {
            assert_eq!(request.uri, "/");
            assert!(!request.super_admin);
            assert!(request.site_url.is_none());
            assert!(!json);
        }
        _ => panic!("expected Menu"),
    }
}

#[test]
fn cli_parse_menu_full() {
    match parse(&[
        "stage-switcher",
        "menu",
        "--uri",
        "/blog/post/1?x=1",
        "--super-admin",
        "--json",
    ]) {
        CliCommand::Menu { request, json } => {
            assert_eq!(request.uri, "/blog/post/1?x=1");
            assert!(request.super_admin);
            assert!(json);
            let req = request.to_request();
            assert!(req.is_super_admin());
            assert!(!req.is_multisite());
        }
        _ => panic!("expected Menu with flags"),
    }
}

#[test]
fn cli_parse_menu_subsite() {
    match parse(&[
        "stage-switcher",
        "menu",
        "--site-url",
        "https://tenant1.example.dev",
    ]) {
        CliCommand::Menu { request, .. } => {
            let req = request.to_request();
            assert!(req.is_multisite());
            assert!(!req.is_main_site());
            assert_eq!(req.current_site_url(), Some("https://tenant1.example.dev"));
        }
        _ => panic!("expected Menu with --site-url"),
    }
}

#[test]
fn cli_parse_menu_main_site() {
    match parse(&[
        "stage-switcher",
        "menu",
        "--site-url",
        "https://example.dev",
        "--main-site",
    ]) {
        CliCommand::Menu { request, .. } => {
            let req = request.to_request();
            assert!(req.is_multisite());
            assert!(req.is_main_site());
        }
        _ => panic!("expected Menu with --main-site"),
    }
}

#[test]
fn cli_main_site_requires_site_url() {
    assert!(Cli::try_parse_from(["stage-switcher", "menu", "--main-site"]).is_err());
}

#[test]
fn cli_parse_rewrite() {
    match parse(&[
        "stage-switcher",
        "rewrite",
        "--stage",
        "production",
        "--uri",
        "/about",
    ]) {
        CliCommand::Rewrite { stage, request } => {
            assert_eq!(stage, "production");
            assert_eq!(request.uri, "/about");
        }
        _ => panic!("expected Rewrite"),
    }
}

#[test]
fn cli_rewrite_requires_stage() {
    assert!(Cli::try_parse_from(["stage-switcher", "rewrite"]).is_err());
}
