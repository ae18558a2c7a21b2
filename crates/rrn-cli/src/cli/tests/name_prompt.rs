//! Tests for name and prompt subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_name_defaults() {
    match parse(&["rrn", "name", "capture.har"]) {
        CliCommand::Name { path, entry, jobs } => {
            assert_eq!(path, "capture.har");
            assert!(entry.is_none());
            assert_eq!(jobs, 5);
        }
        _ => panic!("expected Name"),
    }
}

#[test]
fn cli_parse_name_entry_and_jobs() {
    match parse(&["rrn", "name", "c.har", "--entry", "3", "--jobs", "2"]) {
        CliCommand::Name { path, entry, jobs } => {
            assert_eq!(path, "c.har");
            assert_eq!(entry, Some(3));
            assert_eq!(jobs, 2);
        }
        _ => panic!("expected Name with --entry/--jobs"),
    }
}

#[test]
fn cli_parse_name_requires_path() {
    assert!(Cli::try_parse_from(["rrn", "name"]).is_err());
}

#[test]
fn cli_parse_prompt() {
    match parse(&["rrn", "prompt", "c.har"]) {
        CliCommand::Prompt { path, entry } => {
            assert_eq!(path, "c.har");
            assert_eq!(entry, 0);
        }
        _ => panic!("expected Prompt"),
    }
    match parse(&["rrn", "prompt", "c.har", "--entry", "7"]) {
        CliCommand::Prompt { entry, .. } => assert_eq!(entry, 7),
        _ => panic!("expected Prompt with --entry"),
    }
}
