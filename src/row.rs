//! VCF record parser.
//!
//! Splits a tab-separated data line into the ten fixed text columns and
//! extracts the positional sub-values of INFO, FORMAT and SAMPLE used by
//! the statistics.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SvStatError};

/// Number of fixed columns in a single-sample VCF data line.
pub const COLUMN_COUNT: usize = 10;

/// INFO token holding the SV type (`SVTYPE=<value>`).
pub const SVTYPE_TOKEN: usize = 1;

/// INFO token holding the SV length (`SVLEN=<int>`).
pub const SVLEN_TOKEN: usize = 2;

/// The fixed columns of a VCF data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Chrom,
    Pos,
    Id,
    Ref,
    Alt,
    Qual,
    Filter,
    Info,
    Format,
    Sample,
}

impl Column {
    /// All columns in file order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Chrom,
        Column::Pos,
        Column::Id,
        Column::Ref,
        Column::Alt,
        Column::Qual,
        Column::Filter,
        Column::Info,
        Column::Format,
        Column::Sample,
    ];

    /// The header name of the column.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Chrom => "CHROM",
            Column::Pos => "POS",
            Column::Id => "ID",
            Column::Ref => "REF",
            Column::Alt => "ALT",
            Column::Qual => "QUAL",
            Column::Filter => "FILTER",
            Column::Info => "INFO",
            Column::Format => "FORMAT",
            Column::Sample => "SAMPLE",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Column::ALL
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| format!("unknown column `{}`", s))
    }
}

/// A single VCF data line. Every column is kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcfRecord {
    pub chrom: String,
    pub pos: String,
    pub id: String,
    pub ref_allele: String,
    pub alt: String,
    pub qual: String,
    pub filter: String,
    pub info: String,
    pub format: String,
    pub sample: String,
}

impl VcfRecord {
    /// Get a column by name.
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Chrom => &self.chrom,
            Column::Pos => &self.pos,
            Column::Id => &self.id,
            Column::Ref => &self.ref_allele,
            Column::Alt => &self.alt,
            Column::Qual => &self.qual,
            Column::Filter => &self.filter,
            Column::Info => &self.info,
            Column::Format => &self.format,
            Column::Sample => &self.sample,
        }
    }

    /// The genotype string, i.e. the first `:` token of SAMPLE.
    pub fn genotype(&self) -> &str {
        first_token(&self.sample, ':')
    }

    /// The label a genotype is tallied under.
    ///
    /// Records whose INFO has no `=` at all (SNV-style records) are labelled
    /// by the first FORMAT key. Everything else is labelled by the value of
    /// the SVTYPE token.
    pub fn genotype_label(&self) -> Result<&str> {
        if !self.info.contains('=') {
            return Ok(first_token(&self.format, ':'));
        }
        info_value(&self.info, SVTYPE_TOKEN)
    }

    /// Absolute SV length parsed from the SVLEN token.
    pub fn sv_length(&self) -> Result<u64> {
        let raw = info_value(&self.info, SVLEN_TOKEN)?.trim();
        raw.parse::<i64>()
            .map(i64::unsigned_abs)
            .map_err(|_| SvStatError::InvalidSvLength {
                value: raw.to_string(),
            })
    }
}

fn first_token(field: &str, sep: char) -> &str {
    field.split(sep).next().unwrap_or(field)
}

/// Value of the `index`-th `;` token of an INFO string.
///
/// The value is the text between the first and the second `=` of the token.
pub fn info_value(info: &str, index: usize) -> Result<&str> {
    info.split(';')
        .nth(index)
        .and_then(|token| token.split('=').nth(1))
        .ok_or_else(|| SvStatError::MissingInfoToken {
            index,
            info: info.to_string(),
        })
}

/// Parse a single VCF data line.
///
/// # Arguments
///
/// * `line` - A data line (tab-separated), without its line terminator
/// * `line_number` - 1-based position of the line in the file, for errors
///
/// # Returns
///
/// A parsed `VcfRecord`. Columns past the tenth are ignored.
pub fn parse_record(line: &str, line_number: usize) -> Result<VcfRecord> {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < COLUMN_COUNT {
        return Err(SvStatError::RowParseError {
            line: line_number,
            message: format!(
                "Expected {} columns, got {}",
                COLUMN_COUNT,
                fields.len()
            ),
        });
    }

    Ok(VcfRecord {
        chrom: fields[0].to_string(),
        pos: fields[1].to_string(),
        id: fields[2].to_string(),
        ref_allele: fields[3].to_string(),
        alt: fields[4].to_string(),
        qual: fields[5].to_string(),
        filter: fields[6].to_string(),
        info: fields[7].to_string(),
        format: fields[8].to_string(),
        sample: fields[9].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEL_ROW: &str = "chr1\t10000\tSniffles2.DEL.1\tN\t<DEL>\t60\tPASS\tPRECISE;SVTYPE=DEL;SVLEN=-320;END=10320;RE=12\tGT:GQ:DR:DV\t0|1:60:10:12";

    #[test]
    fn test_parse_simple_row() {
        let record = parse_record(DEL_ROW, 1).unwrap();

        assert_eq!(record.chrom, "chr1");
        assert_eq!(record.pos, "10000");
        assert_eq!(record.id, "Sniffles2.DEL.1");
        assert_eq!(record.ref_allele, "N");
        assert_eq!(record.alt, "<DEL>");
        assert_eq!(record.qual, "60");
        assert_eq!(record.filter, "PASS");
        assert_eq!(record.format, "GT:GQ:DR:DV");
        assert_eq!(record.sample, "0|1:60:10:12");
    }

    #[test]
    fn test_too_few_columns() {
        let err = parse_record("chr1\t100\t.\tA\tG\t50\tPASS\tDP=30", 7).unwrap_err();
        match err {
            SvStatError::RowParseError { line, message } => {
                assert_eq!(line, 7);
                assert_eq!(message, "Expected 10 columns, got 8");
            }
            other => panic!("Expected RowParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_columns_ignored() {
        let row = format!("{}\t0/0:1:1:0", DEL_ROW);
        let record = parse_record(&row, 1).unwrap();
        assert_eq!(record.sample, "0|1:60:10:12");
    }

    #[test]
    fn test_genotype_and_label() {
        let record = parse_record(DEL_ROW, 1).unwrap();
        assert_eq!(record.genotype(), "0|1");
        assert_eq!(record.genotype_label().unwrap(), "DEL");
    }

    #[test]
    fn test_label_from_format_without_info_values() {
        let row = "chr2\t500\t.\tA\tT\t30\tPASS\tPRECISE\tGT:DP\t0/1:20";
        let record = parse_record(row, 1).unwrap();
        assert_eq!(record.genotype_label().unwrap(), "GT");
    }

    #[test]
    fn test_label_missing_token() {
        let row = "chr2\t500\t.\tA\tT\t30\tPASS\tSVTYPE=INS\tGT\t0/1";
        let record = parse_record(row, 1).unwrap();
        assert!(matches!(
            record.genotype_label(),
            Err(SvStatError::MissingInfoToken { index: 1, .. })
        ));
    }

    #[test]
    fn test_sv_length_is_absolute() {
        let record = parse_record(DEL_ROW, 1).unwrap();
        assert_eq!(record.sv_length().unwrap(), 320);
    }

    #[test]
    fn test_sv_length_is_positional() {
        // The third token is read whatever its key is.
        let row = "chr1\t1\t.\tN\t<INS>\t.\tPASS\tPRECISE;SVTYPE=INS;END=900;SVLEN=55\tGT\t1|1";
        let record = parse_record(row, 1).unwrap();
        assert_eq!(record.sv_length().unwrap(), 900);
    }

    #[test]
    fn test_sv_length_trims_whitespace() {
        let row = "chr1\t1\t.\tN\t<INS>\t.\tPASS\tA;SVTYPE=INS;SVLEN= 42 \tGT\t1|1";
        let record = parse_record(row, 1).unwrap();
        assert_eq!(record.sv_length().unwrap(), 42);
    }

    #[test]
    fn test_sv_length_not_numeric() {
        let row = "chr1\t1\t.\tN\t<INS>\t.\tPASS\tA;SVTYPE=INS;SVLEN=long\tGT\t1|1";
        let record = parse_record(row, 1).unwrap();
        match record.sv_length() {
            Err(SvStatError::InvalidSvLength { value }) => assert_eq!(value, "long"),
            other => panic!("Expected InvalidSvLength, got {:?}", other),
        }
    }

    #[test]
    fn test_info_value_second_piece_only() {
        assert_eq!(info_value("A;B;K=1=2", 2).unwrap(), "1");
        assert!(info_value("A;B;FLAG", 2).is_err());
    }

    #[test]
    fn test_column_names_round_trip() {
        for column in Column::ALL {
            assert_eq!(column.name().parse::<Column>().unwrap(), column);
        }
        assert!("GT".parse::<Column>().is_err());
    }
}
