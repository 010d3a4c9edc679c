//! Net Description Parser
//!
//! Parses the line-oriented net description DSL:
//!
//! ```text
//! # comment
//! NET_NAME: REF.PIN, REF.PIN, ...
//! ```
//!
//! The parser is total: no input text can make it fail. Blank lines and
//! `#` comments are skipped, lines without a `:` are skipped (and
//! reported as diagnostics), and a pin reference without a `.` defaults
//! its pin to "1". These are deliberate leniencies for hand-edited
//! files, not error paths.

use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
use crate::model::PinRef;
use std::collections::HashMap;

/// The board's net description, embedded at compile time the same way
/// the component registry ships built in.
pub fn builtin_netlist() -> &'static str {
    include_str!("../data/master_board.nets")
}

/// Ordered mapping from net name to its pin references.
///
/// Order is file order of first appearance. A redefined net keeps its
/// original position but its pin list is replaced entirely
/// (last-write-wins, matching the hand-authored format's semantics).
#[derive(Debug, Clone, Default)]
pub struct NetTable {
    nets: Vec<(String, Vec<PinRef>)>,
    index: HashMap<String, usize>,
}

impl NetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or redefine a net. Redefinition replaces the pin list and
    /// returns true so the caller can report it.
    pub fn define(&mut self, name: impl Into<String>, pins: Vec<PinRef>) -> bool {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => {
                self.nets[pos].1 = pins;
                true
            }
            None => {
                self.index.insert(name.clone(), self.nets.len());
                self.nets.push((name, pins));
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[PinRef]> {
        self.index.get(name).map(|&pos| self.nets[pos].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PinRef])> {
        self.nets.iter().map(|(name, pins)| (name.as_str(), pins.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.nets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }
}

/// Parse a net description. Never fails; anything that cannot be
/// understood is skipped and noted in the returned diagnostics.
pub fn parse_net_description(text: &str) -> (NetTable, Diagnostics) {
    let mut table = NetTable::new();
    let mut diags = Diagnostics::new();

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, pin_list)) = line.split_once(':') else {
            tracing::debug!(line = line_no + 1, "skipping malformed net line");
            diags.push(Diagnostic::new(
                DiagnosticKind::MalformedLine,
                Severity::Info,
                format!("line {}: no ':' separator, line skipped", line_no + 1),
            ));
            continue;
        };

        let name = name.trim();
        let pins: Vec<PinRef> = pin_list
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_pinref)
            .collect();

        if table.define(name, pins) {
            diags.push(
                Diagnostic::new(
                    DiagnosticKind::DuplicateNet,
                    Severity::Warning,
                    format!(
                        "line {}: net '{}' redefined, earlier pin list replaced",
                        line_no + 1,
                        name
                    ),
                )
                .with_net(name),
            );
        }
    }

    (table, diags)
}

/// Split `REF.PIN` into its parts. Named pins like `J2.D+` or
/// `U1.GPIO20` split on the first `.` only; a bare `REF` gets pin "1".
fn parse_pinref(text: &str) -> PinRef {
    match text.split_once('.') {
        Some((designator, pin)) => PinRef::new(designator.trim(), pin.trim()),
        None => PinRef::new(text, "1"),
    }
}
