//! Schematic document emitter.
//!
//! Emits a complete `.kicad_sch` document: a generated symbol library
//! (one symbol per component, built from [`SymbolGeometry`]), placed
//! component instances on the layout grid, and global labels for every
//! net. Identifier generation is injected through [`IdGenerator`] so
//! tests can produce byte-stable documents.

use crate::geometry::{SymbolGeometry, BODY_HALF_WIDTH, PIN_LENGTH};
use crate::layout::{grid_placement, label_placement, Placed};
use crate::model::CircuitModel;
use crate::registry::{ComponentRecord, ComponentRegistry};
use std::fmt::Write;

const SCHEMATIC_VERSION: &str = "20231120";
const FONT_EFFECTS: &str = "(effects (font (size 1.27 1.27)))";

/// Source of unique identifiers for schematic elements.
///
/// The production implementation hands out random v4 UUIDs; tests
/// inject [`SequentialIdGenerator`] for reproducible documents.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs, the normal case.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic UUID-shaped identifiers for tests and diffing.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("00000000-0000-4000-8000-{:012x}", self.counter)
    }
}

/// Serialize the model as a full schematic document.
pub fn emit(
    model: &CircuitModel,
    registry: &ComponentRegistry,
    ids: &mut dyn IdGenerator,
    columns: usize,
) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "(kicad_sch (version {SCHEMATIC_VERSION}) (generator \"schemagen\")"
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  (uuid {})", ids.next_id());
    let _ = writeln!(out);
    let _ = writeln!(out, "  (paper \"A3\")");
    let _ = writeln!(out);

    out.push_str("  (lib_symbols");
    for comp in registry.iter() {
        write_lib_symbol(&mut out, comp);
    }
    out.push_str("\n  )\n");

    // Component instances on the placement grid, registry order.
    for placed in grid_placement(registry.iter(), columns) {
        write_instance(&mut out, &placed, ids);
    }

    // Global labels, power nets first then signal nets.
    let (power, signal) = model.net_names_power_first();
    for placed in label_placement(power, signal) {
        write_global_label(&mut out, &placed, ids);
    }

    out.push_str("\n\n  (sheet_instances\n    (path \"/\" (page \"1\"))\n  )\n)\n");
    out
}

/// Library symbol name for a component: its value with characters KiCad
/// chokes on replaced, suffixed with the designator to keep it unique.
fn symbol_name(comp: &ComponentRecord) -> String {
    let safe: String = comp
        .value
        .chars()
        .map(|c| if c == '/' || c == ' ' { '_' } else { c })
        .collect();
    format!("{}_{}", safe, comp.designator)
}

fn write_lib_symbol(out: &mut String, comp: &ComponentRecord) {
    let name = symbol_name(comp);
    let geom = SymbolGeometry::for_pin_count(comp.pin_count);
    let half = geom.half_height();
    let prefix = comp.reference_prefix();

    let _ = write!(
        out,
        "\n    (symbol \"{name}\" (in_bom yes) (on_board yes)\
         \n      (property \"Reference\" \"{prefix}\" (at 0 {:.2} 0) {FONT_EFFECTS})\
         \n      (property \"Value\" \"{}\" (at 0 {:.2} 0) {FONT_EFFECTS})",
        half + 2.54,
        comp.value,
        -half - 2.54,
    );
    if let Some(vendor) = &comp.vendor_id {
        let _ = write!(
            out,
            "\n      (property \"LCSC\" \"{vendor}\" (at 0 {:.2} 0) (effects (font (size 1.27 1.27)) hide))",
            -half - 5.08,
        );
    }
    let _ = write!(
        out,
        "\n      (symbol \"{name}_0_1\"\
         \n        (rectangle (start {:.2} {half:.2}) (end {:.2} {:.2}) (stroke (width 0.254) (type default)) (fill (type background)))\
         \n      )\
         \n      (symbol \"{name}_1_1\"",
        -BODY_HALF_WIDTH,
        BODY_HALF_WIDTH,
        -half,
    );
    for pin in &geom.pins {
        let _ = write!(
            out,
            "\n        (pin passive line (at {:.2} {:.2} {}) (length {PIN_LENGTH}) (name \"{}\" {FONT_EFFECTS}) (number \"{}\" {FONT_EFFECTS}))",
            pin.x, pin.y, pin.orientation, pin.number, pin.number,
        );
    }
    out.push_str("\n      )\n    )");
}

fn write_instance(out: &mut String, placed: &Placed<&ComponentRecord>, ids: &mut dyn IdGenerator) {
    let comp = placed.item;
    let name = symbol_name(comp);
    let (x, y) = (placed.x, placed.y);

    let _ = write!(
        out,
        "\n  (symbol (lib_id \"{name}\") (at {x:.2} {y:.2} 0) (unit 1)\
         \n    (in_bom yes) (on_board yes) (dnp no)\
         \n    (uuid {})\
         \n    (property \"Reference\" \"{}\" (at {x:.2} {:.2} 0) {FONT_EFFECTS})\
         \n    (property \"Value\" \"{}\" (at {x:.2} {:.2} 0) {FONT_EFFECTS})",
        ids.next_id(),
        comp.designator,
        y + 5.08,
        comp.value,
        y - 5.08,
    );
    if let Some(vendor) = &comp.vendor_id {
        let _ = write!(
            out,
            "\n    (property \"LCSC\" \"{vendor}\" (at {x:.2} {:.2} 0) (effects (font (size 1.27 1.27)) hide))",
            y - 7.62,
        );
    }
    out.push_str("\n  )");
}

fn write_global_label(out: &mut String, placed: &Placed<&str>, ids: &mut dyn IdGenerator) {
    let _ = write!(
        out,
        "\n  (global_label \"{}\" (shape bidirectional) (at {:.2} {:.2} 0) (effects (font (size 1.27 1.27)) (justify left))\
         \n    (uuid {})\
         \n  )",
        placed.item,
        placed.x,
        placed.y,
        ids.next_id(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DEFAULT_COLUMNS;
    use crate::model::CircuitModel;
    use crate::parser::parse_net_description;
    use crate::registry::{ComponentRecord, ComponentRegistry};

    fn registry() -> ComponentRegistry {
        [
            ComponentRecord::new("U1", "LM358DR", "SOIC-8", 8).with_vendor_id("C7950"),
            ComponentRecord::new("R1", "10K", "0402", 2),
        ]
        .into_iter()
        .collect()
    }

    fn emit_for(text: &str) -> String {
        let (table, _) = parse_net_description(text);
        let (model, _) = CircuitModel::build(&table, &registry());
        let mut ids = SequentialIdGenerator::new();
        emit(&model, &registry(), &mut ids, DEFAULT_COLUMNS)
    }

    #[test]
    fn test_balanced_parens() {
        let doc = emit_for("GND: U1.4, R1.2\nSIG: U1.1, R1.1\n");
        let open = doc.chars().filter(|&c| c == '(').count();
        let close = doc.chars().filter(|&c| c == ')').count();
        assert_eq!(open, close);
    }

    #[test]
    fn test_one_symbol_and_instance_per_component() {
        let doc = emit_for("GND: U1.4");
        assert_eq!(doc.matches("(symbol \"LM358DR_U1\" ").count(), 1);
        assert_eq!(doc.matches("(lib_id \"LM358DR_U1\")").count(), 1);
        assert_eq!(doc.matches("(lib_id \"10K_R1\")").count(), 1);
    }

    #[test]
    fn test_pin_count_matches_geometry() {
        let doc = emit_for("GND: U1.4");
        // 8 pins for U1 plus 2 for R1.
        assert_eq!(doc.matches("(pin passive line ").count(), 10);
    }

    #[test]
    fn test_unique_ids() {
        let doc = emit_for("GND: U1.4\nSIG: R1.1\n");
        let mut ids: Vec<&str> = doc
            .lines()
            .filter_map(|l| l.trim().strip_prefix("(uuid "))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate uuid emitted");
        // Root uuid + 2 instances + 2 labels.
        assert_eq!(total, 5);
    }

    #[test]
    fn test_power_labels_before_signal_labels() {
        let doc = emit_for("SIG: U1.1\nGND: U1.4\n");
        let gnd = doc.find("(global_label \"GND\"").unwrap();
        let sig = doc.find("(global_label \"SIG\"").unwrap();
        assert!(gnd < sig);
    }

    #[test]
    fn test_deterministic_with_injected_ids() {
        let a = emit_for("GND: U1.4");
        let b = emit_for("GND: U1.4");
        assert_eq!(a, b);
    }

    #[test]
    fn test_value_with_slash_sanitized_in_symbol_name() {
        let reg: ComponentRegistry =
            [ComponentRecord::new("U7", "MCP23017-E/SO", "SOIC-28", 28)].into_iter().collect();
        let (table, _) = parse_net_description("GND: U7.10");
        let (model, _) = CircuitModel::build(&table, &reg);
        let mut ids = SequentialIdGenerator::new();
        let doc = emit(&model, &reg, &mut ids, DEFAULT_COLUMNS);
        assert!(doc.contains("(symbol \"MCP23017-E_SO_U7\" "));
    }

    #[test]
    fn test_sheet_instances_trailer() {
        let doc = emit_for("GND: U1.4");
        assert!(doc.trim_end().ends_with(")"));
        assert!(doc.contains("(sheet_instances\n    (path \"/\" (page \"1\"))\n  )"));
    }
}
