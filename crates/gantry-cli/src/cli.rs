//! Command tree and shared argument handling.
//!
//! Every subcommand takes the same module path plus output flags, so the
//! argument builders are shared and each command only differs in its help
//! text.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gantry")
        .about("Inspect gantry ABI modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(info_command())
        .subcommand(dump_command())
        .subcommand(symbols_command())
}

fn info_command() -> Command {
    Command::new("info")
        .about("Show header fields and section counts")
        .arg(module_path_arg())
        .arg(json_arg())
        .arg(color_arg())
}

fn dump_command() -> Command {
    Command::new("dump")
        .about("Render the whole decoded module")
        .arg(module_path_arg())
        .arg(json_arg())
        .arg(color_arg())
}

fn symbols_command() -> Command {
    Command::new("symbols")
        .about("List the symbol table")
        .arg(module_path_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// ABI module file (positional).
fn module_path_arg() -> Arg {
    Arg::new("module")
        .value_name("MODULE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("ABI module file")
}

/// Machine-readable output (--json).
fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Emit JSON instead of text")
}

/// Color output control (--color).
fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// Arguments shared by every subcommand.
pub struct ModuleArgs {
    pub path: PathBuf,
    pub json: bool,
    pub color: ColorChoice,
}

impl ModuleArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let path = matches
            .get_one::<PathBuf>("module")
            .expect("MODULE is required")
            .clone();
        let json = matches.get_flag("json");
        let color = match matches.get_one::<String>("color").map(String::as_str) {
            Some("always") => ColorChoice::Always,
            Some("never") => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };
        Self { path, json, color }
    }
}
