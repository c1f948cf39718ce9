//! # SV Stat Library
//!
//! Genotype and length statistics for structural variant (SV) calls stored
//! in single-sample VCF files.
//!
//! ## Features
//!
//! - Load plain or gzip-compressed VCF files into an in-memory record table
//! - Scan `##` header lines lazily and parse ##INFO definitions
//! - Filter records with a small expression language over the raw columns
//! - Tally genotypes per SV type, find SV length extremes, count breakends
//! - Export the SV length distribution as tab-separated CSV
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use sv_stat::{VcfTable, stats, table};
//!
//! let vcf = "chr1\t100\tsv1\tN\t<DEL>\t60\tPASS\tPRECISE;SVTYPE=DEL;SVLEN=-320\tGT\t0|1\n\
//!            chr1\t900\tsv2\tN\t<INS>\t5\tLowQual\tPRECISE;SVTYPE=INS;SVLEN=40\tGT\t0/1\n";
//! let records = VcfTable::from_reader(Cursor::new(vcf)).unwrap();
//!
//! let pass = table::filter_pass(&records).unwrap();
//! assert_eq!(pass.len(), 1);
//! assert_eq!(stats::max_sv_length(&pass).unwrap(), Some(320));
//! ```
//!
//! ## Filter Expression Syntax
//!
//! ### Operators
//! - `==` / `!=` Equality
//! - `contains` Substring test
//! - `startswith` Prefix test
//! - `&&`, `||`, `!` Logic
//!
//! ### Columns
//! `CHROM`, `POS`, `ID`, `REF`, `ALT`, `QUAL`, `FILTER`, `INFO`, `FORMAT`,
//! `SAMPLE`, each compared as text.

/// Embedded README.md documentation
const README: &str = include_str!("../README.md");

/// Returns the embedded README.md documentation.
pub fn docs() -> &'static str {
    README
}

pub mod cli;
pub mod distribution;
pub mod error;
pub mod eval;
pub mod filter;
pub mod header;
pub mod reader;
pub mod report;
pub mod row;
pub mod stats;
pub mod table;
pub mod value;

pub use error::{Result, SvStatError};
pub use filter::{BinaryOp, Expr, Preset, UnaryOp};
pub use header::{InfoField, InfoNumber, InfoType};
pub use reader::VcfFile;
pub use row::{Column, VcfRecord};
pub use table::VcfTable;
pub use value::Value;

use crate::eval::evaluate;
use crate::filter::parse_filter;

/// A compiled record filter.
///
/// Create one with `RecordFilter::new(expression)` or
/// `RecordFilter::preset(preset)` and test records with `matches`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFilter {
    expr: Expr,
}

impl RecordFilter {
    /// Compile a filter expression.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sv_stat::RecordFilter;
    ///
    /// let no_bnd = RecordFilter::new(r#"!(INFO contains "BND")"#).unwrap();
    /// assert!(matches!(no_bnd.expr(), sv_stat::Expr::Unary(..)));
    ///
    /// // Only the ten fixed columns are addressable
    /// assert!(RecordFilter::new(r#"GT == "0/1""#).is_err());
    /// ```
    pub fn new(expression: &str) -> Result<Self> {
        let expr = parse_filter(expression).map_err(|errs| {
            SvStatError::FilterParseError(
                errs.into_iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        })?;
        Ok(Self { expr })
    }

    /// Compile one of the named pipeline filters.
    pub fn preset(preset: Preset) -> Result<Self> {
        Self::new(preset.expression())
    }

    /// Whether `record` passes the filter.
    pub fn matches(&self, record: &VcfRecord) -> Result<bool> {
        Ok(evaluate(&self.expr, record)?.truthy())
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}
