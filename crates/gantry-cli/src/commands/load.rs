use std::path::Path;
use std::process::exit;

use gantry_abi::Abi;

/// Read a module file into memory and decode it, or exit with a one-line
/// error. Decoding needs the whole buffer resident; there is no streaming
/// path.
pub(crate) fn load_module(path: &Path) -> Abi {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("error: {}: {err}", path.display());
            exit(1);
        }
    };
    match Abi::decode(&bytes) {
        Ok(abi) => abi,
        Err(err) => {
            eprintln!("error: {}: {err}", path.display());
            exit(1);
        }
    }
}
