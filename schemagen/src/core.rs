//! Generation orchestration shared by library users and the CLI.
//!
//! One run is a straight pipeline: parse the net description, build and
//! cross-reference the model, serialize the selected formats, write the
//! files. Parsing and model building never fail; only I/O errors are
//! fatal, and a failed write leaves whatever was written so far in
//! place (no rollback).

use std::path::{Path, PathBuf};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::emit::schematic::{IdGenerator, UuidGenerator};
use crate::emit::{interchange, netlist, schematic, DesignMeta};
use crate::layout::DEFAULT_COLUMNS;
use crate::model::CircuitModel;
use crate::parser;
use crate::registry::ComponentRegistry;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output documents a run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Structured s-expression netlist (`.net`).
    Netlist,
    /// Flat interchange netlist (`.txt`).
    Interchange,
    /// Full schematic document (`.kicad_sch`).
    Schematic,
}

impl OutputFormat {
    pub fn all() -> Vec<OutputFormat> {
        vec![Self::Netlist, Self::Interchange, Self::Schematic]
    }

    /// File name for this format under a given project name.
    pub fn file_name(&self, project: &str) -> String {
        match self {
            Self::Netlist => format!("{project}.net"),
            Self::Interchange => format!("{project}_netlist.txt"),
            Self::Schematic => format!("{project}.kicad_sch"),
        }
    }
}

/// Options for a generation run. Replaces the hardcoded output paths of
/// earlier generator scripts: the caller decides where files go.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the output files are written into.
    pub out_dir: PathBuf,
    /// Project name; becomes the output file stem and document source name.
    pub name: String,
    /// Which documents to produce.
    pub formats: Vec<OutputFormat>,
    /// Placement grid width for the schematic.
    pub grid_columns: usize,
}

impl GenerateOptions {
    pub fn new(out_dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            name: name.into(),
            formats: OutputFormat::all(),
            grid_columns: DEFAULT_COLUMNS,
        }
    }

    pub fn with_formats(mut self, formats: Vec<OutputFormat>) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_grid_columns(mut self, columns: usize) -> Self {
        self.grid_columns = columns;
        self
    }
}

/// What a run produced, for summaries and CI gates.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub component_count: usize,
    pub net_count: usize,
    pub dropped_pin_count: usize,
    pub diagnostics: Diagnostics,
    pub written: Vec<PathBuf>,
}

/// Entry point for generation runs.
pub struct Generator;

impl Generator {
    /// Run the full pipeline with random identifiers and the current
    /// time stamped into document headers.
    pub fn run(
        text: &str,
        registry: &ComponentRegistry,
        options: &GenerateOptions,
    ) -> Result<GenerationReport, GeneratorError> {
        let meta = DesignMeta::new(&options.name);
        Self::run_with(text, registry, options, &meta, &mut UuidGenerator)
    }

    /// Run the pipeline with caller-supplied metadata and identifier
    /// generation. Tests use this for byte-stable output.
    pub fn run_with(
        text: &str,
        registry: &ComponentRegistry,
        options: &GenerateOptions,
        meta: &DesignMeta,
        ids: &mut dyn IdGenerator,
    ) -> Result<GenerationReport, GeneratorError> {
        let (table, mut diagnostics) = parser::parse_net_description(text);
        let (model, build_diags) = CircuitModel::build(&table, registry);
        diagnostics.extend(build_diags);

        std::fs::create_dir_all(&options.out_dir)?;

        let mut written = Vec::new();
        for format in &options.formats {
            let document = match format {
                OutputFormat::Netlist => netlist::emit(&model, registry, meta),
                OutputFormat::Interchange => interchange::emit(&model, registry, meta),
                OutputFormat::Schematic => {
                    schematic::emit(&model, registry, ids, options.grid_columns)
                }
            };
            let path = options.out_dir.join(format.file_name(&options.name));
            write_document(&path, &document)?;
            written.push(path);
        }

        Ok(GenerationReport {
            component_count: registry.len(),
            net_count: model.net_count(),
            dropped_pin_count: diagnostics.count_of(DiagnosticKind::UnknownComponent),
            diagnostics,
            written,
        })
    }
}

fn write_document(path: &Path, document: &str) -> Result<(), GeneratorError> {
    std::fs::write(path, document)?;
    tracing::info!(path = %path.display(), bytes = document.len(), "wrote document");
    Ok(())
}
