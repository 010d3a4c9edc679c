//! Structured diagnostics for parse and model-build steps.
//!
//! The parser and model builder are total: nothing in the input can make
//! them fail. What used to be silently swallowed (skipped lines, dropped
//! pin references, duplicate net overwrites) is collected here instead,
//! so callers can log it, report it, or choose to fail the build.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Warning,
    Info,
}

/// What happened, in machine-matchable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// A non-comment line did not match `NAME: pins` and was skipped.
    MalformedLine,
    /// A net name appeared more than once; the later definition replaced
    /// the earlier one entirely.
    DuplicateNet,
    /// A pin referenced a designator absent from the registry and was
    /// dropped from its net.
    UnknownComponent,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub message: String,
    /// Net the diagnostic concerns, when there is one.
    pub net: Option<String>,
    /// `REF.PIN` the diagnostic concerns, when there is one.
    pub pinref: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            net: None,
            pinref: None,
        }
    }

    pub fn with_net(mut self, net: impl Into<String>) -> Self {
        self.net = Some(net.into());
        self
    }

    pub fn with_pinref(mut self, pinref: impl Into<String>) -> Self {
        self.pinref = Some(pinref.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Warning => write!(f, "warning: {}", self.message),
            Severity::Info => write!(f, "info: {}", self.message),
        }
    }
}

/// Accumulated diagnostics for one generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    pub entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_kind() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::new(
            DiagnosticKind::UnknownComponent,
            Severity::Warning,
            "unknown component D9",
        ));
        diags.push(Diagnostic::new(
            DiagnosticKind::MalformedLine,
            Severity::Info,
            "skipped line 3",
        ));

        assert_eq!(diags.count_of(DiagnosticKind::UnknownComponent), 1);
        assert_eq!(diags.count_of(DiagnosticKind::DuplicateNet), 0);
        assert_eq!(diags.warning_count(), 1);
        assert!(diags.has_warnings());
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::new(
            DiagnosticKind::DuplicateNet,
            Severity::Warning,
            "net '+3V3' redefined",
        )
        .with_net("+3V3");
        assert_eq!(d.to_string(), "warning: net '+3V3' redefined");
    }
}
