//! Tests for infer, list, stats, completions and man.

use super::parse;
use crate::cli::{CliCommand, FilterArg};
use clap_complete::Shell;
use toolmark_core::catalog::{Status, StatusFilter};

#[test]
fn cli_parse_infer() {
    match parse(&["toolmark", "infer", "Supabase", "IO"]) {
        CliCommand::Infer { name, explain } => {
            assert_eq!(name.join(" "), "Supabase IO");
            assert!(!explain);
        }
        _ => panic!("expected Infer"),
    }
}

#[test]
fn cli_parse_infer_explain() {
    match parse(&["toolmark", "infer", "--explain", "JasperAI"]) {
        CliCommand::Infer { name, explain } => {
            assert_eq!(name, vec!["JasperAI"]);
            assert!(explain);
        }
        _ => panic!("expected Infer with --explain"),
    }
}

#[test]
fn cli_parse_list_defaults() {
    match parse(&["toolmark", "list"]) {
        CliCommand::List { filter, search } => {
            assert_eq!(filter, FilterArg::All);
            assert!(search.is_none());
            assert_eq!(StatusFilter::from(filter), StatusFilter::All);
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_filter_and_search() {
    match parse(&["toolmark", "list", "--filter", "heard", "--search", "google"]) {
        CliCommand::List { filter, search } => {
            assert_eq!(StatusFilter::from(filter), StatusFilter::Only(Status::Heard));
            assert_eq!(search.as_deref(), Some("google"));
        }
        _ => panic!("expected List with filter"),
    }
}

#[test]
fn cli_parse_stats() {
    match parse(&["toolmark", "stats"]) {
        CliCommand::Stats => {}
        _ => panic!("expected Stats"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["toolmark", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["toolmark", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
