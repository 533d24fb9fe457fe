mod cli;
mod commands;

#[cfg(test)]
mod cli_tests;

use cli::{ModuleArgs, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("info", m)) => commands::info::run(&ModuleArgs::from_matches(m)),
        Some(("dump", m)) => commands::dump::run(&ModuleArgs::from_matches(m)),
        Some(("symbols", m)) => commands::symbols::run(&ModuleArgs::from_matches(m)),
        _ => unreachable!("clap should have caught this"),
    }
}
