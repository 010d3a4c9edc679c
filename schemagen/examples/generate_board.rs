//! Generate all three documents for the built-in board into a directory.

use schemagen::prelude::*;
use schemagen::{parser, registry};
use std::path::Path;

fn main() -> Result<(), GeneratorError> {
    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "out".to_string());

    let options = GenerateOptions::new(Path::new(&out_dir), "master-board");
    let report = Generator::run(parser::builtin_netlist(), &registry::builtin(), &options)?;

    println!("Components: {}", report.component_count);
    println!("Nets:       {}", report.net_count);
    for diag in report.diagnostics.iter() {
        println!("  {diag}");
    }
    for path in &report.written {
        println!("Generated {}", path.display());
    }

    Ok(())
}
