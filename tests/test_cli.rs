//! Tests for CLI argument parsing

use ak2espanso::cli::Cli;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["ak2espanso", "/path/to/autokey"]);

    assert_eq!(cli.indent, 2, "Default indent should be 2 spaces");
    assert!(cli.preserve_case, "Default preserve_case should be true");
    assert_eq!(
        cli.autokey_cfg_directory,
        PathBuf::from("/path/to/autokey")
    );
}

#[test]
fn test_cli_custom_indent() {
    let cli = Cli::parse_from(["ak2espanso", "dir", "--indent", "4"]);

    assert_eq!(cli.indent, 4);
    assert_eq!(cli.indent_unit(), "    ");
}

#[test]
fn test_cli_indent_equals_syntax() {
    let cli = Cli::parse_from(["ak2espanso", "dir", "--indent=8"]);

    assert_eq!(cli.indent_unit().len(), 8);
}

#[test]
fn test_cli_preserve_case_false() {
    let cli = Cli::parse_from(["ak2espanso", "dir", "--preserve-case=false"]);

    assert!(!cli.preserve_case);
}

#[test]
fn test_cli_preserve_case_explicit_true() {
    let cli = Cli::parse_from(["ak2espanso", "dir", "--preserve-case", "true"]);

    assert!(cli.preserve_case);
}

#[test]
fn test_cli_directory_is_required() {
    let result = Cli::try_parse_from(["ak2espanso"]);

    assert!(result.is_err(), "Missing directory argument should fail");
}

#[test]
fn test_cli_rejects_non_numeric_indent() {
    let result = Cli::try_parse_from(["ak2espanso", "dir", "--indent", "two"]);

    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_non_bool_preserve_case() {
    let result = Cli::try_parse_from(["ak2espanso", "dir", "--preserve-case", "maybe"]);

    assert!(result.is_err());
}
