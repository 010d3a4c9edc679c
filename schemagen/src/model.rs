//! Circuit model and cross-referencer.
//!
//! Joins a parsed [`NetTable`] against a [`ComponentRegistry`] to
//! produce the model the emitters consume. Pins referencing unknown
//! components are dropped from their net rather than failing the build;
//! every drop is surfaced as a diagnostic so the caller can decide
//! whether that is acceptable.

use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
use crate::parser::NetTable;
use crate::registry::ComponentRegistry;
use serde::Serialize;
use std::fmt;

/// Net names treated as power rails by the schematic label layout.
pub const POWER_NETS: [&str; 5] = ["+12V", "+3V3", "+5V", "GND", "VBUS"];

/// One specific pin of one specific component instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PinRef {
    pub designator: String,
    pub pin: String,
}

impl PinRef {
    pub fn new(designator: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            designator: designator.into(),
            pin: pin.into(),
        }
    }
}

impl fmt::Display for PinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.designator, self.pin)
    }
}

/// A named electrical connection and the pins on it, in source order.
#[derive(Debug, Clone, Serialize)]
pub struct Net {
    pub name: String,
    pub pins: Vec<PinRef>,
}

impl Net {
    pub fn is_power(&self) -> bool {
        POWER_NETS.contains(&self.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

/// Cross-referenced circuit: every pin in every net refers to a
/// component present in the registry used to build it.
#[derive(Debug, Clone, Default)]
pub struct CircuitModel {
    nets: Vec<Net>,
}

impl CircuitModel {
    /// Build the model by filtering each net's pins against the
    /// registry. Nets left empty by the filter are retained so they
    /// still appear, header-only, in the structured output. Never
    /// fails; dropped pins become warnings in the diagnostics.
    pub fn build(table: &NetTable, registry: &ComponentRegistry) -> (Self, Diagnostics) {
        let mut nets = Vec::with_capacity(table.len());
        let mut diags = Diagnostics::new();

        for (name, pins) in table.iter() {
            let mut surviving = Vec::with_capacity(pins.len());
            for pin in pins {
                if registry.contains(&pin.designator) {
                    surviving.push(pin.clone());
                } else {
                    tracing::warn!(net = name, pinref = %pin, "dropping pin with unknown component");
                    diags.push(
                        Diagnostic::new(
                            DiagnosticKind::UnknownComponent,
                            Severity::Warning,
                            format!(
                                "net '{}': component '{}' not in registry, pin {} dropped",
                                name, pin.designator, pin
                            ),
                        )
                        .with_net(name)
                        .with_pinref(pin.to_string()),
                    );
                }
            }
            nets.push(Net {
                name: name.to_string(),
                pins: surviving,
            });
        }

        (Self { nets }, diags)
    }

    /// Nets in source order.
    pub fn nets(&self) -> &[Net] {
        &self.nets
    }

    /// Nets sorted by name, for emitters with lexicographic output.
    pub fn nets_sorted_by_name(&self) -> Vec<&Net> {
        let mut sorted: Vec<&Net> = self.nets.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Power net names followed by signal net names, each group in
    /// source order. This is the enumeration order for global labels.
    pub fn net_names_power_first(&self) -> (Vec<&str>, Vec<&str>) {
        let mut power = Vec::new();
        let mut signal = Vec::new();
        for net in &self.nets {
            if net.is_power() {
                power.push(net.name.as_str());
            } else {
                signal.push(net.name.as_str());
            }
        }
        (power, signal)
    }

    pub fn net_count(&self) -> usize {
        self.nets.len()
    }
}
