//! Component Registry
//!
//! Static mapping from a reference designator to its descriptive
//! attributes. The registry is populated once at construction and is
//! read-only afterwards; emitters and the layout engine only ever
//! borrow it.

use std::collections::HashMap;

/// A single component definition keyed by its reference designator.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    /// Reference designator, e.g. "U1", "R27". Unique within a registry.
    pub designator: String,
    /// Display value shown in schematics and netlists, e.g. "LM358DR" or "10K".
    pub value: String,
    /// Footprint identifier used by PCB layout tools.
    pub footprint: String,
    /// Number of physical pins (drives symbol geometry). Always >= 1.
    pub pin_count: u32,
    /// Optional vendor part id (LCSC order code).
    pub vendor_id: Option<String>,
}

impl ComponentRecord {
    pub fn new(
        designator: impl Into<String>,
        value: impl Into<String>,
        footprint: impl Into<String>,
        pin_count: u32,
    ) -> Self {
        Self {
            designator: designator.into(),
            value: value.into(),
            footprint: footprint.into(),
            pin_count: pin_count.max(1),
            vendor_id: None,
        }
    }

    pub fn with_vendor_id(mut self, id: impl Into<String>) -> Self {
        self.vendor_id = Some(id.into());
        self
    }

    /// Alphabetic prefix of the designator ("U7" -> "U", "SW1" -> "SW").
    pub fn reference_prefix(&self) -> String {
        self.designator.chars().filter(|c| c.is_alphabetic()).collect()
    }
}

/// Immutable component table with deterministic insertion-order iteration.
///
/// Insertion order matters: the placement grid enumerates components in
/// registry order, so two runs over the same registry place components
/// identically. Emitters that need designator order sort on their own.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    records: Vec<ComponentRecord>,
    index: HashMap<String, usize>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. A record with an already-known designator
    /// replaces the earlier one in place, keeping its position.
    pub fn insert(&mut self, record: ComponentRecord) {
        match self.index.get(&record.designator) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(record.designator.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn lookup(&self, designator: &str) -> Option<&ComponentRecord> {
        self.index.get(designator).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, designator: &str) -> bool {
        self.index.contains_key(designator)
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.records.iter()
    }

    /// Records sorted by designator, for emitters that need stable
    /// lexicographic output.
    pub fn sorted_by_designator(&self) -> Vec<&ComponentRecord> {
        let mut sorted: Vec<&ComponentRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.designator.cmp(&b.designator));
        sorted
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ComponentRecord> for ComponentRegistry {
    fn from_iter<I: IntoIterator<Item = ComponentRecord>>(iter: I) -> Self {
        let mut registry = Self::new();
        for record in iter {
            registry.insert(record);
        }
        registry
    }
}

/// Built-in registry for the ESP32-S3 master board this tool was written
/// for. Values and footprints mirror the board BOM; capacitors and
/// resistors are generated from their value tables.
pub fn builtin() -> ComponentRegistry {
    let mut reg = ComponentRegistry::new();

    let ics = [
        ("U1", "ESP32-S3-WROOM-1-N16R8", "ESP32-S3-WROOM-1", 44, "C2913202"),
        ("U2", "MP2359DJ-LF-Z", "SOT-23-6", 6, "C14259"),
        ("U3", "LM358DR", "SOIC-8", 8, "C7950"),
        ("U4", "USBLC6-2SC6", "SOT-23-6", 6, "C7519"),
        ("U5", "PC817C", "DIP-4", 4, "C66463"),
        ("U6", "LM1815M", "SOIC-8", 8, "C129587"),
        ("U7", "MCP23017-E/SO", "SOIC-28", 28, "C47023"),
        ("D1", "SS34", "SMA", 2, "C8678"),
        ("D2", "SMBJ15A", "SMB", 2, "C123769"),
        ("D3", "1N4148W", "SOD-123", 2, "C81598"),
        ("D4", "P6KE33CA", "SMB", 2, "C108380"),
        ("D5", "BZT52C3V3", "SOD-123", 2, "C173386"),
        ("L1", "10uH", "IND-SMD_4x4", 2, "C167134"),
        ("SW1", "Reset", "SW-SMD-6x6", 2, "C318884"),
        ("SW2", "Boot", "SW-SMD-6x6", 2, "C318884"),
    ];
    for (designator, value, footprint, pins, lcsc) in ics {
        reg.insert(ComponentRecord::new(designator, value, footprint, pins).with_vendor_id(lcsc));
    }

    let connectors = [
        ("J1", "Screw_Terminal_2P", "TerminalBlock_5.08mm_2P", 2, "C8463"),
        ("J2", "USB-C", "USB-C-SMD-16P", 16, "C2765186"),
        ("J3", "JST-XH_7P", "JST-XH-7A", 7, "C161872"),
        ("J4", "JST-GH_4P", "JST-GH-4P-SMD", 4, "C160404"),
        ("J6", "JST-PH_3P", "JST-PH-3A", 3, "C131337"),
        ("J7", "JST-GH_6P", "JST-GH-6P-SMD", 6, "C160408"),
        ("J8", "Micro_SD", "MICRO-SD-PUSH", 9, "C111196"),
        ("J9", "Header_2x7", "HDR-2x7-2.54", 14, "C492405"),
        ("J10", "ARM_Debug_2x5", "HDR-2x5-1.27", 10, "C2889983"),
        ("J11", "Header_1x6_RA", "HDR-1x6-2.54-RA", 6, "C2977595"),
        ("J12", "JST-PH_2P", "JST-PH-2A", 2, "C131338"),
        ("J13", "JST-PH_2P", "JST-PH-2A", 2, "C131338"),
        ("J14", "JST-XH_5P", "JST-XH-5A", 5, "C157991"),
        ("J15", "JST-XH_5P", "JST-XH-5A", 5, "C157991"),
        ("J16", "JST-XH_5P", "JST-XH-5A", 5, "C157991"),
        ("J17", "JST-XH_5P", "JST-XH-5A", 5, "C157991"),
        ("J18", "JST-XH_5P", "JST-XH-5A", 5, "C157991"),
        ("J19", "JST-PH_2P", "JST-PH-2A", 2, "C131338"),
    ];
    for (designator, value, footprint, pins, lcsc) in connectors {
        reg.insert(ComponentRecord::new(designator, value, footprint, pins).with_vendor_id(lcsc));
    }

    // Capacitors C1-C18. Bulk/filter caps are 0805, the rest 0402.
    for i in 1..=18u32 {
        let value = match i {
            1 | 2 => "22uF",
            7 | 8 | 11 => "10uF",
            10 => "1uF",
            15 => "1nF",
            _ => "100nF",
        };
        let footprint = match i {
            1 | 2 | 7 | 8 | 10 | 11 => "0805",
            _ => "0402",
        };
        reg.insert(
            ComponentRecord::new(format!("C{i}"), value, footprint, 2)
                .with_vendor_id(cap_vendor_id(value)),
        );
    }

    // Resistors. R17-R19 are unpopulated on this board and skipped.
    let resistor_values = [
        (1, "33K"), (2, "10K"), (3, "10K"), (4, "5.1K"), (5, "10K"),
        (6, "10K"), (7, "10K"), (8, "5.1K"), (9, "5.1K"), (10, "22R"),
        (11, "22R"), (12, "10K"), (13, "10K"), (14, "10K"), (15, "47K"),
        (16, "47K"), (20, "2.2K"), (21, "10K"), (22, "10K"), (23, "200K"),
        (24, "10K"), (25, "10K"), (26, "10K"), (27, "1K"), (28, "10K"),
        (29, "1K"),
    ];
    for (i, value) in resistor_values {
        reg.insert(
            ComponentRecord::new(format!("R{i}"), value, "0402", 2).with_vendor_id("C25744"),
        );
    }

    reg
}

fn cap_vendor_id(value: &str) -> &'static str {
    match value {
        "22uF" => "C45783",
        "10uF" => "C15850",
        "1uF" => "C28323",
        "1nF" => "C1523",
        _ => "C1525",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_contains() {
        let reg = builtin();
        assert!(reg.contains("U1"));
        assert!(!reg.contains("U99"));

        let u3 = reg.lookup("U3").unwrap();
        assert_eq!(u3.value, "LM358DR");
        assert_eq!(u3.pin_count, 8);
        assert_eq!(u3.vendor_id.as_deref(), Some("C7950"));
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut reg = ComponentRegistry::new();
        reg.insert(ComponentRecord::new("R2", "10K", "0402", 2));
        reg.insert(ComponentRecord::new("R1", "1K", "0402", 2));

        let order: Vec<&str> = reg.iter().map(|r| r.designator.as_str()).collect();
        assert_eq!(order, vec!["R2", "R1"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut reg = ComponentRegistry::new();
        reg.insert(ComponentRecord::new("C1", "100nF", "0402", 2));
        reg.insert(ComponentRecord::new("C2", "1uF", "0402", 2));
        reg.insert(ComponentRecord::new("C1", "22uF", "0805", 2));

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.lookup("C1").unwrap().value, "22uF");
        let order: Vec<&str> = reg.iter().map(|r| r.designator.as_str()).collect();
        assert_eq!(order, vec!["C1", "C2"]);
    }

    #[test]
    fn test_sorted_by_designator() {
        let reg = builtin();
        let sorted = reg.sorted_by_designator();
        for pair in sorted.windows(2) {
            assert!(pair[0].designator < pair[1].designator);
        }
    }

    #[test]
    fn test_pin_count_floor() {
        let record = ComponentRecord::new("X1", "weird", "NONE", 0);
        assert_eq!(record.pin_count, 1);
    }

    #[test]
    fn test_builtin_counts() {
        let reg = builtin();
        // 15 ICs/diodes/switches + 18 connectors + 18 caps + 26 resistors
        assert_eq!(reg.len(), 77);
        assert!(!reg.contains("J5"));
        assert!(!reg.contains("R17"));
    }

    #[test]
    fn test_reference_prefix() {
        let reg = builtin();
        assert_eq!(reg.lookup("SW1").unwrap().reference_prefix(), "SW");
        assert_eq!(reg.lookup("U7").unwrap().reference_prefix(), "U");
    }
}
