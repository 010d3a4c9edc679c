//! SchemaGen - netlist and KiCad schematic generation library
//!
//! This library turns a hand-authored, line-oriented net description into
//! an in-memory circuit model, cross-references it against a component
//! registry, and emits the model in multiple formats understood by
//! downstream EDA tools.
//!
//! # Quick Start
//!
//! ```no_run
//! use schemagen::{Generator, GenerateOptions, registry};
//! use std::path::Path;
//!
//! let options = GenerateOptions::new(Path::new("out"), "my-board");
//! let report = Generator::run(
//!     schemagen::parser::builtin_netlist(),
//!     &registry::builtin(),
//!     &options,
//! ).unwrap();
//!
//! println!("{} components, {} nets", report.component_count, report.net_count);
//! ```
//!
//! # Features
//!
//! - **Net description DSL**: tolerant line parser, never fails on input
//! - **Structured netlist**: s-expression `.net` export
//! - **Interchange netlist**: flat `.txt` export
//! - **Schematic export**: `.kicad_sch` with generated symbols and placement

pub mod core;
pub mod diagnostics;
pub mod emit;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod parser;
pub mod registry;

// Re-export main types
pub use crate::core::{
    GenerateOptions, GenerationReport, Generator, GeneratorError, OutputFormat,
};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use emit::schematic::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use model::{CircuitModel, Net, PinRef};
pub use parser::NetTable;
pub use registry::{ComponentRecord, ComponentRegistry};

/// Parse a net description and cross-reference it against a registry
/// (convenience wrapper).
pub fn build_model(text: &str, registry: &ComponentRegistry) -> (CircuitModel, Diagnostics) {
    let (table, mut diags) = parser::parse_net_description(text);
    let (model, build_diags) = CircuitModel::build(&table, registry);
    diags.extend(build_diags);
    (model, diags)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CircuitModel, ComponentRecord, ComponentRegistry, Diagnostics, GenerateOptions,
        GenerationReport, Generator, GeneratorError, OutputFormat, Severity,
    };
}
