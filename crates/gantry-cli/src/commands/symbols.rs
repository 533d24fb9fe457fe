use super::load_module;
use crate::cli::ModuleArgs;

pub fn run(args: &ModuleArgs) {
    let abi = load_module(&args.path);

    if args.json {
        let names: Vec<String> = abi
            .symbols
            .symbols
            .iter()
            .map(|symbol| symbol.display().into_owned())
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&names).expect("serialization should not fail")
        );
        return;
    }

    // Printed 1-based, matching how the other sections reference them.
    for (i, symbol) in abi.symbols.symbols.iter().enumerate() {
        println!("S{} {:?}", i + 1, symbol.display());
    }
}
