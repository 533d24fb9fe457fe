//! Tests for argument parsing and dispatch wiring.

use std::path::PathBuf;

use crate::cli::{ColorChoice, ModuleArgs, build_cli};

#[test]
fn command_tree_is_well_formed() {
    build_cli().debug_assert();
}

#[test]
fn parses_dump_invocation() {
    let matches = build_cli()
        .try_get_matches_from(["gantry", "dump", "mod.abi", "--json", "--color", "never"])
        .unwrap();
    let Some(("dump", m)) = matches.subcommand() else {
        panic!("expected the dump subcommand");
    };
    let args = ModuleArgs::from_matches(m);
    assert_eq!(args.path, PathBuf::from("mod.abi"));
    assert!(args.json);
    assert!(matches!(args.color, ColorChoice::Never));
}

#[test]
fn color_defaults_to_auto() {
    let matches = build_cli()
        .try_get_matches_from(["gantry", "info", "mod.abi"])
        .unwrap();
    let Some(("info", m)) = matches.subcommand() else {
        panic!("expected the info subcommand");
    };
    let args = ModuleArgs::from_matches(m);
    assert!(matches!(args.color, ColorChoice::Auto));
    assert!(!args.json);
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(build_cli().try_get_matches_from(["gantry"]).is_err());
}

#[test]
fn missing_module_path_is_rejected() {
    assert!(build_cli().try_get_matches_from(["gantry", "symbols"]).is_err());
}

#[test]
fn never_means_no_color() {
    assert!(!ColorChoice::Never.should_colorize());
    assert!(ColorChoice::Always.should_colorize());
}
