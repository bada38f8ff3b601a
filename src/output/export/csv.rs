//! CSV export of a concentration field
//!
//! The file holds one row per grid point. The first column is the position
//! `x`, followed by one column per selected time column, headed with its
//! [`snapshot_label`](crate::output::snapshot_label). The layout opens
//! directly in pandas, spreadsheets or gnuplot.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,no_run
//! use diffusion_rs::output::export::export_field_csv;
//! use diffusion_rs::solver::solve;
//!
//! let field = solve(0.1, 0.1, 0.01)?;
//! export_field_csv(&field, 10, "diffusion.csv", None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! **Output** (`diffusion.csv`):
//! ```text
//! x,t=0.0,t=1.0,t=2.0,...
//! 0.000000,0.000000,1.000000,1.000000,...
//! 0.010000,0.000000,0.647606,0.749259,...
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,no_run
//! use diffusion_rs::output::export::{export_field_csv, CsvConfig, CsvMetadata};
//! use diffusion_rs::solver::{ExplicitStencilSolver, Scenario, Solver, SolverConfiguration};
//!
//! let solver = ExplicitStencilSolver::new();
//! let scenario = Scenario::with_default_boundaries(0.1);
//! let discretisation = SolverConfiguration::new(0.1, 0.01);
//! let field = solver.solve(&scenario, &discretisation)?;
//!
//! let metadata = CsvMetadata::from_run(solver.name(), &scenario, &discretisation);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_field_csv(&field, 10, "diffusion.csv", Some(&config))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! **Output** (`diffusion.csv`):
//! ```text
//! # Diffusion Simulation Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Solver: Explicit Stencil
//! # D: 0.1
//! # dt: 0.1
//! # dx: 0.01
//! # Left boundary: 1
//! # Right boundary: 0
//! # Grid points: 100
//! # Time points: 100
//! #
//! x,t=0.0,t=1.0,...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use log::debug;
use thiserror::Error;

use crate::output::snapshot_label;
use crate::physics::ConcentrationField;
use crate::solver::{Scenario, SolverConfiguration};

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while writing a CSV file
#[derive(Debug, Error)]
pub enum CsvError {
    /// File creation or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `every == 0`
    #[error("snapshot interval must be at least 1")]
    InvalidInterval,

    /// The column delimiter would be ambiguous with the decimal separator
    #[error("delimiter '{0}' is also the decimal separator")]
    SeparatorConflict(char),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `decimal_separator`: Decimal point character (default: '.')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add header comments with simulation info
/// - `metadata`: Simulation metadata to include
/// - `position_header`: Header of the first column (default: "x")
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: '\t',
///     precision: 10,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the position column (default: "x")
    pub position_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            position_header: "x".to_string(),
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::output::export::CsvConfig;
    ///
    /// let config = CsvConfig::european();
    /// assert_eq!((config.delimiter, config.decimal_separator), (';', ','));
    /// ```
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    /// Reject a delimiter equal to the decimal separator
    pub fn validate(&self) -> Result<(), CsvError> {
        if self.delimiter == self.decimal_separator {
            return Err(CsvError::SeparatorConflict(self.delimiter));
        }
        Ok(())
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Solver name (e.g. "Explicit Stencil")
    pub solver_name: Option<String>,

    /// Diffusion coefficient `D`
    pub diffusion: Option<f64>,

    /// Time step `dt`
    pub time_step: Option<f64>,

    /// Grid spacing `dx`
    pub space_step: Option<f64>,

    /// Value held at the left edge
    pub left_boundary: Option<f64>,

    /// Value held at the right edge
    pub right_boundary: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata describing one solver run
    pub fn from_run(solver: &str, scenario: &Scenario, config: &SolverConfiguration) -> Self {
        Self {
            solver_name: Some(solver.to_string()),
            diffusion: Some(scenario.diffusion),
            time_step: Some(config.time_step),
            space_step: Some(config.space_step),
            left_boundary: Some(scenario.boundaries.left),
            right_boundary: Some(scenario.boundaries.right),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(
    out: &mut W,
    metadata: &CsvMetadata,
    field: &ConcentrationField,
) -> Result<(), CsvError> {
    writeln!(out, "# Diffusion Simulation Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }

    let parameters = [
        ("D", metadata.diffusion),
        ("dt", metadata.time_step),
        ("dx", metadata.space_step),
        ("Left boundary", metadata.left_boundary),
        ("Right boundary", metadata.right_boundary),
    ];
    for (name, value) in parameters {
        if let Some(value) = value {
            writeln!(out, "# {}: {}", name, value)?;
        }
    }

    writeln!(out, "# Grid points: {}", field.nx())?;
    writeln!(out, "# Time points: {}", field.nt())?;

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Write every `every`-th time column of `field` as CSV into `out`
///
/// Values are written as computed, non-finite ones included.
pub fn write_field_csv<W: Write>(
    out: &mut W,
    field: &ConcentrationField,
    every: usize,
    configuration: &CsvConfig,
) -> Result<(), CsvError> {

    // ============================= Validation =============================

    if every == 0 {
        return Err(CsvError::InvalidInterval);
    }
    configuration.validate()?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(out, metadata, field)?;
        }
    }

    // ============================= Write Header ===========================

    let columns: Vec<_> = field.snapshots(every).collect();

    write!(out, "{}", configuration.position_header)?;
    for snapshot in &columns {
        write!(out, "{}{}", configuration.delimiter, snapshot_label(snapshot.time))?;
    }
    writeln!(out)?;

    // ============================= Write Data =============================

    for (i, x) in field.grid().iter().enumerate() {
        write!(out, "{}", format_number(x, configuration))?;

        for snapshot in &columns {
            write!(
                out,
                "{}{}",
                configuration.delimiter,
                format_number(snapshot.profile[i], configuration)
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Export every `every`-th time column of `field` to a CSV file
///
/// # Arguments
///
/// * `field` - Solver output
/// * `every` - Column stride
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - `every == 0` (no file is created)
/// - delimiter equal to the decimal separator (no file is created)
/// - file creation or write errors
pub fn export_field_csv(
    field: &ConcentrationField,
    every: usize,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    if every == 0 {
        return Err(CsvError::InvalidInterval);
    }
    configuration.validate()?;

    let mut out = BufWriter::new(File::create(output_path)?);
    write_field_csv(&mut out, field, every, configuration)?;
    out.flush()?;

    debug!("field {} exported to {}", field, output_path);

    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`](super::Exporter)
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl super::Exporter for CsvExporter {
    type Error = CsvError;

    fn export(
        &self,
        field: &ConcentrationField,
        every: usize,
        path: &str,
    ) -> Result<(), Self::Error> {
        export_field_csv(field, every, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
