#![forbid(unsafe_code)]

use std::path::Path;

use crate::pak::build::pack;
use crate::pak::error::PakResult;
use crate::pak::format::NameRule;

/// Packs `input` without writing anything and prints what would be embedded.
pub fn list(input: &Path, verbose: bool) -> PakResult<()> {
    let packed = pack(input, NameRule::Exact)?;
    for e in &packed.entries {
        if verbose {
            println!(
                "{}  len={} hash={}",
                e.name,
                e.content.len(),
                e.digest_hex()
            );
        } else {
            println!("{}", e.name);
        }
    }
    if verbose {
        println!(
            "{} entries, {} encoded bytes",
            packed.len(),
            packed.blob.len()
        );
    }
    Ok(())
}
