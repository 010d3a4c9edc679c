//! Flat interchange netlist emitter.
//!
//! Emits the simple line-oriented `.txt` netlist: a component list
//! followed by a `NET: ref.pin, ...` list. Unlike the structured
//! emitter, nets whose pins were all dropped are omitted here; the flat
//! format has no way to express a header-only net and downstream
//! consumers treat every line as a connection.

use crate::emit::DesignMeta;
use crate::model::CircuitModel;
use crate::registry::ComponentRegistry;

/// Serialize the model as a flat interchange netlist.
pub fn emit(model: &CircuitModel, registry: &ComponentRegistry, meta: &DesignMeta) -> String {
    let mut out = Vec::new();

    out.push(format!("* {} Netlist", meta.name));
    out.push(format!("* Generated: {}", meta.date));
    out.push("*".to_string());
    out.push(String::new());

    out.push("*COMP_LIST".to_string());
    for comp in registry.sorted_by_designator() {
        out.push(format!(
            "{} \"{}\" \"{}\"",
            comp.designator, comp.value, comp.footprint
        ));
    }
    out.push(String::new());

    out.push("*NET_LIST".to_string());
    for net in model.nets_sorted_by_name() {
        if net.is_empty() {
            continue;
        }
        let pins: Vec<String> = net.pins.iter().map(|p| p.to_string()).collect();
        out.push(format!("{}: {}", net.name, pins.join(", ")));
    }
    out.push(String::new());
    out.push("*END".to_string());

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CircuitModel;
    use crate::parser::parse_net_description;
    use crate::registry::{ComponentRecord, ComponentRegistry};

    fn registry() -> ComponentRegistry {
        [
            ComponentRecord::new("J1", "Screw_Terminal_2P", "TerminalBlock_5.08mm_2P", 2),
            ComponentRecord::new("R1", "33K", "0402", 2),
        ]
        .into_iter()
        .collect()
    }

    fn emit_for(text: &str) -> String {
        let (table, _) = parse_net_description(text);
        let (model, _) = CircuitModel::build(&table, &registry());
        emit(&model, &registry(), &DesignMeta::with_date("board", "2024-01-01 00:00:00"))
    }

    #[test]
    fn test_component_lines() {
        let doc = emit_for("GND: J1.2");
        assert!(doc.contains("*COMP_LIST"));
        assert!(doc.contains("J1 \"Screw_Terminal_2P\" \"TerminalBlock_5.08mm_2P\""));
        assert!(doc.contains("R1 \"33K\" \"0402\""));
    }

    #[test]
    fn test_surviving_pins_only() {
        let doc = emit_for("GND: J1.2, D9.K");
        assert!(doc.contains("GND: J1.2"));
        assert!(!doc.contains("D9"));
    }

    #[test]
    fn test_emptied_net_omitted() {
        let doc = emit_for("GND: J1.2\nCANH: X1.1\n");
        assert!(doc.contains("GND: J1.2"));
        assert!(!doc.contains("CANH"));
    }

    #[test]
    fn test_nets_sorted_and_terminated() {
        let doc = emit_for("ZZ: J1.1\nAA: R1.1\n");
        let aa = doc.find("AA: R1.1").unwrap();
        let zz = doc.find("ZZ: J1.1").unwrap();
        assert!(aa < zz);
        assert!(doc.ends_with("*END"));
    }

    #[test]
    fn test_header() {
        let doc = emit_for("GND: J1.2");
        assert!(doc.starts_with("* board Netlist\n* Generated: 2024-01-01 00:00:00\n*"));
    }
}
