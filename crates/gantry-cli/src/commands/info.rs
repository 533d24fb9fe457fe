use gantry_abi::Header;
use serde::Serialize;

use super::load_module;
use crate::cli::ModuleArgs;

#[derive(Serialize)]
struct Summary<'a> {
    header: &'a Header,
    symbols: usize,
    types: usize,
    declared_attrs: u32,
    functions: usize,
}

pub fn run(args: &ModuleArgs) {
    let abi = load_module(&args.path);

    if args.json {
        let summary = Summary {
            header: &abi.header,
            symbols: abi.symbols.count(),
            types: abi.types.count(),
            declared_attrs: abi.types.nb_attrs,
            functions: abi.functions.count(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).expect("serialization should not fail")
        );
        return;
    }

    println!("module    {}", args.path.display());
    println!("major     {}", abi.header.major);
    println!("magic     {:#06x}", abi.header.magic);
    println!("version   {}", abi.header.version);
    println!("crc       {:#018x}", abi.header.crc);
    println!("symbols   {}", abi.symbols.count());
    println!(
        "types     {} (declared attrs {})",
        abi.types.count(),
        abi.types.nb_attrs
    );
    println!("functions {}", abi.functions.count());
}
