//! Emit a schematic with injected sequential identifiers, so two runs
//! produce byte-identical documents that can be diffed.

use schemagen::emit::{schematic, DesignMeta};
use schemagen::{build_model, parser, registry, SequentialIdGenerator};

fn main() {
    let reg = registry::builtin();
    let (model, diags) = build_model(parser::builtin_netlist(), &reg);

    for diag in diags.iter() {
        eprintln!("{diag}");
    }

    let meta = DesignMeta::with_date("master-board", "2024-01-01 00:00:00");
    let mut ids = SequentialIdGenerator::new();
    let doc = schematic::emit(&model, &reg, &mut ids, 8);

    println!("{doc}");
    eprintln!("-- {} ({} bytes)", meta.name, doc.len());
}
