//! Tests for add, rename, set-status and remove.

use super::parse;
use crate::cli::{Cli, CliCommand, StatusArg};
use clap::Parser;
use toolmark_core::catalog::Status;

#[test]
fn cli_parse_add_multi_word_name() {
    match parse(&["toolmark", "add", "GitHub", "Copilot"]) {
        CliCommand::Add { name, status } => {
            assert_eq!(name.join(" "), "GitHub Copilot");
            assert!(status.is_none());
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_with_status() {
    match parse(&["toolmark", "add", "Zed", "--status", "expert"]) {
        CliCommand::Add { name, status } => {
            assert_eq!(name, vec!["Zed"]);
            assert_eq!(status, Some(StatusArg::Expert));
        }
        _ => panic!("expected Add with --status"),
    }
}

#[test]
fn cli_parse_add_requires_name() {
    assert!(Cli::try_parse_from(["toolmark", "add"]).is_err());
}

#[test]
fn cli_parse_add_rejects_unknown_status() {
    assert!(Cli::try_parse_from(["toolmark", "add", "Zed", "--status", "guru"]).is_err());
}

#[test]
fn cli_parse_rename() {
    match parse(&["toolmark", "rename", "7", "Google", "Maps"]) {
        CliCommand::Rename { id, name } => {
            assert_eq!(id, 7);
            assert_eq!(name.join(" "), "Google Maps");
        }
        _ => panic!("expected Rename"),
    }
}

#[test]
fn cli_parse_set_status() {
    match parse(&["toolmark", "set-status", "3", "used"]) {
        CliCommand::SetStatus { id, status } => {
            assert_eq!(id, 3);
            assert_eq!(Status::from(status), Status::Used);
        }
        _ => panic!("expected SetStatus"),
    }
}

#[test]
fn cli_parse_remove() {
    match parse(&["toolmark", "remove", "99"]) {
        CliCommand::Remove { id } => assert_eq!(id, 99),
        _ => panic!("expected Remove"),
    }
}

#[test]
fn cli_parse_remove_rejects_non_numeric_id() {
    assert!(Cli::try_parse_from(["toolmark", "remove", "abc"]).is_err());
}
