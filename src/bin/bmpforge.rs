//! Writes the full variant catalog to disk, one subdirectory per
//! conformance class (`g/`, `q/`, `b/`).

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use bmpforge::catalog::catalog;
use bmpforge::{TestCard, Unstoppable, encode_bmp};

fn main() -> ExitCode {
    let mut failed = false;

    for variant in catalog() {
        let dir = Path::new(variant.conformance.dir());
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("can't create {}: {e}", dir.display());
            return ExitCode::FAILURE;
        }

        let card = TestCard::for_spec(&variant.spec);
        let bytes = match encode_bmp(&variant.spec, &card, Unstoppable) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("{}: {e}", variant.name);
                failed = true;
                continue;
            }
        };

        // An encode result is never affected by a failed write; each file
        // is produced in memory first and written once.
        let path = dir.join(variant.name);
        eprintln!("Writing {}", path.display());
        if let Err(e) = fs::write(&path, &bytes) {
            eprintln!("can't write {}: {e}", path.display());
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
