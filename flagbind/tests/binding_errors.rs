//! Error reporting while binding and parsing.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface binding mistakes"
)]

use clap::Command;
use flagbind::{BindError, BindFlags, BindOptions, FlagKind, FlagTable, ScalarKind, TagError};
use rstest::rstest;

#[derive(Debug, Default, BindFlags)]
struct BadBool {
    #[flag("debug;d;maybe;debug output")]
    debug: bool,
}

#[derive(Debug, Default, BindFlags)]
struct BadList {
    #[flag("ports;p;[1,2;ports")]
    ports: Vec<u16>,
}

#[derive(Debug, Default, BindFlags)]
struct Overflow {
    #[flag("level;l;300;level")]
    level: u8,
}

#[rstest]
#[case::bool(bind_error::<BadBool>(), "debug", FlagKind::Scalar(ScalarKind::Bool))]
#[case::list(bind_error::<BadList>(), "ports", FlagKind::List(ScalarKind::U16))]
#[case::overflow(bind_error::<Overflow>(), "level", FlagKind::Scalar(ScalarKind::U8))]
fn malformed_defaults_are_conversion_errors(
    #[case] err: BindError,
    #[case] expected_flag: &str,
    #[case] expected_kind: FlagKind,
) {
    let BindError::TypeConversion { flag, source } = err else {
        panic!("expected a conversion error, got {err:?}");
    };
    assert_eq!(flag, expected_flag);
    assert_eq!(source.kind, expected_kind);
}

fn bind_error<T: BindFlags + Default>() -> BindError {
    let mut table = FlagTable::new();
    flagbind::bind_pflags(&mut table, &mut T::default()).expect_err("binding should fail")
}

#[derive(Debug, Default, BindFlags)]
struct Unbalanced {
    #[flag("name;n;\"unfinished;usage")]
    name: String,
}

#[test]
fn unbalanced_quotes_name_the_missing_character() {
    let err = bind_error::<Unbalanced>();
    assert!(matches!(
        err,
        BindError::Tag { source: TagError::Syntax { quote: '"' }, .. }
    ));
    assert_eq!(
        err.to_string(),
        "invalid tag on field 'name': syntax error: closing character \" could not be found"
    );
}

#[derive(Debug, Default, BindFlags)]
struct Ports {
    #[flag("port;p;80;port")]
    port: u16,
}

#[test]
fn out_of_range_values_fail_parsing() {
    let err = flagbind::parse_from(
        Command::new("ports"),
        &mut Ports::default(),
        &BindOptions::default(),
        ["ports", "-p", "70000"],
    )
    .expect_err("out of range");
    assert!(matches!(err, BindError::Cli(_)));
    assert!(!err.is_display_request());
}

#[test]
fn unknown_flags_fail_parsing() {
    let err = flagbind::parse_from(
        Command::new("ports"),
        &mut Ports::default(),
        &BindOptions::default(),
        ["ports", "--nope"],
    )
    .expect_err("unknown flag");
    let BindError::Cli(clap_err) = err else {
        panic!("expected a clap error");
    };
    assert_eq!(clap_err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn version_request_is_a_display_request() {
    let err = flagbind::parse_from(
        Command::new("ports").version("1.0.0"),
        &mut Ports::default(),
        &BindOptions::default(),
        ["ports", "--version"],
    )
    .expect_err("version");
    assert!(err.is_display_request());
}
