//! SchemaGen CLI - netlist and schematic generation from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use schemagen::{
    build_model, parser, registry, GenerateOptions, GenerationReport, Generator, OutputFormat,
    Severity,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "schemagen")]
#[command(about = "Netlist and KiCad schematic generation tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate netlist and schematic documents from a net description
    Generate {
        /// Path to a net description file (defaults to the built-in board)
        #[arg(value_name = "NETLIST_FILE")]
        file: Option<PathBuf>,

        /// Directory to write generated files into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Project name used for output file stems
        #[arg(short, long, default_value = "master-board")]
        name: String,

        /// Which document to generate
        #[arg(short, long, value_enum, default_value = "all")]
        format: FormatArg,

        /// Placement grid columns in the schematic
        #[arg(long, default_value_t = 8)]
        grid_columns: usize,

        /// Output style for the run summary
        #[arg(long, value_enum, default_value = "human")]
        output: OutputStyle,

        /// Exit with an error if any warnings were reported
        #[arg(long)]
        fail_on_warnings: bool,
    },

    /// Parse and cross-reference a net description without writing files
    Check {
        /// Path to a net description file (defaults to the built-in board)
        #[arg(value_name = "NETLIST_FILE")]
        file: Option<PathBuf>,

        /// Output style for diagnostics
        #[arg(long, value_enum, default_value = "human")]
        output: OutputStyle,

        /// Exit with an error if any warnings were reported
        #[arg(long)]
        fail_on_warnings: bool,
    },

    /// List the built-in component registry
    Components,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Structured s-expression netlist (.net)
    Netlist,
    /// Flat interchange netlist (.txt)
    Interchange,
    /// Schematic document (.kicad_sch)
    Schematic,
    /// All three documents
    All,
}

impl FormatArg {
    fn to_formats(self) -> Vec<OutputFormat> {
        match self {
            FormatArg::Netlist => vec![OutputFormat::Netlist],
            FormatArg::Interchange => vec![OutputFormat::Interchange],
            FormatArg::Schematic => vec![OutputFormat::Schematic],
            FormatArg::All => OutputFormat::all(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputStyle {
    /// Human-readable output
    Human,
    /// JSON output for CI/CD
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Generate {
            file,
            out_dir,
            name,
            format,
            grid_columns,
            output,
            fail_on_warnings,
        } => handle_generate(
            file.as_deref(),
            out_dir,
            name,
            format,
            grid_columns,
            output,
            fail_on_warnings,
        ),
        Commands::Check {
            file,
            output,
            fail_on_warnings,
        } => handle_check(file.as_deref(), output, fail_on_warnings),
        Commands::Components => {
            handle_components();
            0
        }
    };

    process::exit(exit_code);
}

/// Read the net description from a file, or fall back to the embedded
/// board description.
fn load_net_description(file: Option<&std::path::Path>) -> Result<String, String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e)),
        None => Ok(parser::builtin_netlist().to_string()),
    }
}

fn handle_generate(
    file: Option<&std::path::Path>,
    out_dir: PathBuf,
    name: String,
    format: FormatArg,
    grid_columns: usize,
    output: OutputStyle,
    fail_on_warnings: bool,
) -> i32 {
    let text = match load_net_description(file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let options = GenerateOptions::new(out_dir, name)
        .with_formats(format.to_formats())
        .with_grid_columns(grid_columns);

    match Generator::run(&text, &registry::builtin(), &options) {
        Ok(report) => {
            match output {
                OutputStyle::Human => print_report_human(&report),
                OutputStyle::Json => print_report_json(&report),
            }
            if fail_on_warnings && report.diagnostics.has_warnings() {
                return 1;
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn handle_check(
    file: Option<&std::path::Path>,
    output: OutputStyle,
    fail_on_warnings: bool,
) -> i32 {
    let text = match load_net_description(file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let reg = registry::builtin();
    let (model, diags) = build_model(&text, &reg);

    match output {
        OutputStyle::Human => {
            println!("Nets:       {}", model.net_count());
            println!("Components: {}", reg.len());
            if diags.is_empty() {
                println!("No issues found");
            } else {
                println!();
                for diag in diags.iter() {
                    println!("  {diag}");
                }
                println!("\n  Warnings: {}", diags.warning_count());
            }
        }
        OutputStyle::Json => {
            let out = serde_json::json!({
                "nets": model.net_count(),
                "components": reg.len(),
                "diagnostics": diags,
            });
            println!("{}", serde_json::to_string_pretty(&out).unwrap());
        }
    }

    if fail_on_warnings && diags.has_warnings() {
        return 1;
    }
    0
}

fn print_report_human(report: &GenerationReport) {
    println!("Components: {}", report.component_count);
    println!("Nets:       {}", report.net_count);

    for diag in report
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
    {
        println!("  {diag}");
    }
    if report.dropped_pin_count > 0 {
        println!("  Dropped pin references: {}", report.dropped_pin_count);
    }

    for path in &report.written {
        println!("Generated {}", path.display());
    }
}

fn print_report_json(report: &GenerationReport) {
    let out = serde_json::json!({
        "components": report.component_count,
        "nets": report.net_count,
        "dropped_pins": report.dropped_pin_count,
        "diagnostics": report.diagnostics,
        "written": report
            .written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&out).unwrap());
}

fn handle_components() {
    let reg = registry::builtin();
    println!("Built-in component registry ({} parts):\n", reg.len());
    for comp in reg.sorted_by_designator() {
        let vendor = comp.vendor_id.as_deref().unwrap_or("-");
        println!(
            "  {:6} {:28} {:24} {:3} pins  {}",
            comp.designator, comp.value, comp.footprint, comp.pin_count, vendor
        );
    }
}
