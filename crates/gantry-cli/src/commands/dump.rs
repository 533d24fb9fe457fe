use gantry_abi::{Colors, dump};

use super::load_module;
use crate::cli::ModuleArgs;

pub fn run(args: &ModuleArgs) {
    let abi = load_module(&args.path);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&abi).expect("serialization should not fail")
        );
        return;
    }

    let colors = Colors::new(args.color.should_colorize());
    print!("{}", dump(&abi, colors));
}
