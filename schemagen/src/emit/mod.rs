//! Format Emitters
//!
//! Three independent, pure transformations from the circuit model to
//! output text. Each emitter borrows the model and registry and returns
//! the full document as a `String`; file writing stays in the
//! generation layer so a failed write never leaves an emitter in a
//! half-finished state.

pub mod interchange;
pub mod netlist;
pub mod schematic;

/// Header metadata stamped into generated documents.
#[derive(Debug, Clone)]
pub struct DesignMeta {
    /// Project name; also the stem of the generated file names.
    pub name: String,
    /// Timestamp string, `%Y-%m-%d %H:%M:%S`.
    pub date: String,
    /// Tool identification written into document headers.
    pub tool: String,
}

impl DesignMeta {
    /// Metadata stamped with the current local time.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_date(
            name,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        )
    }

    /// Metadata with an explicit timestamp, for reproducible output in
    /// tests.
    pub fn with_date(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            tool: concat!("schemagen ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Escape a string for embedding in a double-quoted s-expression atom.
pub(crate) fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_meta_fixed_date() {
        let meta = DesignMeta::with_date("board", "2024-01-01 00:00:00");
        assert_eq!(meta.date, "2024-01-01 00:00:00");
        assert!(meta.tool.starts_with("schemagen "));
    }
}
