//! Parse-level tests for the `scaffold` front-end.
//!
//! The handlers only emit the parsed-argument record, so the contract under
//! test is the record produced for each invocation shape.

use clap::error::ErrorKind;
use clap::Parser;
use rstest::rstest;

use scaffold_cli::scaffold::args::{registered_commands, Cli, Commands};
use scaffold_cli::scaffold::commands::Record;
use scaffold_cli::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_init_with_positional_name_when_parsed_then_record_contains_name() {
    let cli = Cli::try_parse_from(["scaffold", "init", "foo"]).unwrap();
    let record = Record::from_cli(&cli);
    assert_eq!(record.command, "init");
    assert_eq!(record.name.as_deref(), Some("foo"));
    assert!(!record.debug);
    assert_eq!(record.registry, None);
}

#[test]
fn given_init_with_name_flag_when_parsed_then_flag_wins() {
    let cli = Cli::try_parse_from(["scaffold", "init", "foo", "-n", "bar"]).unwrap();
    let record = Record::from_cli(&cli);
    assert_eq!(record.name.as_deref(), Some("bar"));
}

#[test]
fn given_init_without_name_when_parsed_then_record_name_empty() {
    let cli = Cli::try_parse_from(["scaffold", "init"]).unwrap();
    let record = Record::from_cli(&cli);
    assert_eq!(record.name, None);
}

/// All list aliases must resolve to the same command variant.
#[rstest]
#[case("list")]
#[case("ll")]
#[case("la")]
#[case("ls")]
fn given_list_alias_when_parsed_then_same_command_matches(#[case] alias: &str) {
    let cli = Cli::try_parse_from(["scaffold", alias]).unwrap();
    assert!(matches!(cli.command, Commands::List));
    assert_eq!(Record::from_cli(&cli).command, "list");
}

#[test]
fn given_global_options_when_parsed_then_record_carries_them() {
    let cli = Cli::try_parse_from(["scaffold", "-d", "-r", "npm", "init", "demo"]).unwrap();
    let record = Record::from_cli(&cli);
    assert!(record.debug);
    assert_eq!(record.registry.as_deref(), Some("npm"));
    assert_eq!(record.name.as_deref(), Some("demo"));
}

#[test]
fn given_no_subcommand_when_parsed_then_missing_subcommand_error() {
    let err = Cli::try_parse_from(["scaffold"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingSubcommand);
}

#[test]
fn given_unrecognized_command_when_parsed_then_closest_match_suggested() {
    let err = Cli::try_parse_from(["scaffold", "lst"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    assert!(
        err.to_string().contains("similar"),
        "expected a closest-match suggestion, got: {}",
        err
    );
}

#[test]
fn registered_commands_lists_init_and_list() {
    assert_eq!(registered_commands(), vec!["init", "list"]);
}
