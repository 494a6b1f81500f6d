//! Tests for taxonomy, completions, man.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[test]
fn cli_parse_taxonomy() {
    match parse(&["pagelinks", "taxonomy"]) {
        CliCommand::Taxonomy => {}
        _ => panic!("expected Taxonomy"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["pagelinks", "completions", "zsh"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Zsh),
        _ => panic!("expected Completions"),
    }
    assert!(Cli::try_parse_from(["pagelinks", "completions", "cmd.exe"]).is_err());
}

#[test]
fn cli_parse_man() {
    match parse(&["pagelinks", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
