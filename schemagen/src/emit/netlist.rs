//! Structured netlist emitter.
//!
//! Emits the hierarchical, parenthesized netlist document (`.net`) read
//! by PCB tools: a design header, every registry component sorted by
//! designator, and every net sorted by name with a sequential net code
//! and one `node` entry per surviving pin. Nets whose pins were all
//! dropped are still emitted header-only, so the document always
//! accounts for every net in the source description.

use crate::emit::{quote, DesignMeta};
use crate::model::CircuitModel;
use crate::registry::ComponentRegistry;

/// Serialize the model as a structured s-expression netlist.
pub fn emit(model: &CircuitModel, registry: &ComponentRegistry, meta: &DesignMeta) -> String {
    let mut out = Vec::new();

    out.push("(export (version D)".to_string());
    out.push("  (design".to_string());
    out.push(format!("    (source {})", quote(&format!("{}.kicad_sch", meta.name))));
    out.push(format!("    (date {})", quote(&meta.date)));
    out.push(format!("    (tool {})", quote(&meta.tool)));
    out.push("  )".to_string());

    out.push("  (components".to_string());
    for comp in registry.sorted_by_designator() {
        out.push(format!("    (comp (ref {})", comp.designator));
        out.push(format!("      (value {})", quote(&comp.value)));
        out.push(format!("      (footprint {})", quote(&comp.footprint)));
        out.push("    )".to_string());
    }
    out.push("  )".to_string());

    // Downstream tools expect these sections even when empty.
    out.push("  (libparts".to_string());
    out.push("  )".to_string());
    out.push("  (libraries".to_string());
    out.push("  )".to_string());

    out.push("  (nets".to_string());
    for (idx, net) in model.nets_sorted_by_name().iter().enumerate() {
        out.push(format!(
            "    (net (code {}) (name {})",
            idx + 1,
            quote(&net.name)
        ));
        for pin in &net.pins {
            out.push(format!(
                "      (node (ref {}) (pin {}))",
                pin.designator, pin.pin
            ));
        }
        out.push("    )".to_string());
    }
    out.push("  )".to_string());

    out.push(")".to_string());

    out.join("\n")
}
