//! SV length distribution table and its CSV export.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::table::VcfTable;

const DISTRIBUTION_SUFFIX: &str = "_len_destribution.csv";

/// One row of the length distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthEntry {
    pub chrom: String,
    pub svlen: u64,
}

/// Per-record chromosome and absolute SV length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthDistribution {
    entries: Vec<LengthEntry>,
}

impl LengthDistribution {
    pub fn from_table(table: &VcfTable) -> Result<Self> {
        let entries = table
            .iter()
            .map(|record| -> Result<LengthEntry> {
                Ok(LengthEntry {
                    chrom: record.chrom.trim().to_string(),
                    svlen: record.sv_length()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LengthEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the table as tab-separated text with a `CHR SVLEN` header,
    /// replacing any existing file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(path)?;
        writer.write_record(["CHR", "SVLEN"])?;
        for entry in &self.entries {
            writer.write_record([entry.chrom.as_str(), entry.svlen.to_string().as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Output path for the distribution of `input`: its last extension is
/// replaced by `_len_destribution.csv`.
pub fn distribution_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.with_extension(""));
    name.push(DISTRIBUTION_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use tempfile::tempdir;

    const VCF: &str = "chr1 \t100\tsv1\tN\t<DEL>\t60\tPASS\tPRECISE;SVTYPE=DEL;SVLEN=-100\tGT\t0|1\n\
chr2\t300\tsv2\tN\t<INS>\t60\tPASS\tPRECISE;SVTYPE=INS;SVLEN=35\tGT\t1|1\n";

    #[test]
    fn test_from_table() {
        let table = VcfTable::from_reader(Cursor::new(VCF)).unwrap();
        let dist = LengthDistribution::from_table(&table).unwrap();
        assert_eq!(
            dist.entries(),
            &[
                LengthEntry {
                    chrom: "chr1".to_string(),
                    svlen: 100
                },
                LengthEntry {
                    chrom: "chr2".to_string(),
                    svlen: 35
                },
            ]
        );
    }

    #[test]
    fn test_distribution_path() {
        assert_eq!(
            distribution_path(Path::new("/data/calls.vcf")),
            PathBuf::from("/data/calls_len_destribution.csv")
        );
        assert_eq!(
            distribution_path(Path::new("calls.vcf.gz")),
            PathBuf::from("calls.vcf_len_destribution.csv")
        );
        assert_eq!(
            distribution_path(Path::new("calls")),
            PathBuf::from("calls_len_destribution.csv")
        );
    }

    #[test]
    fn test_write_csv_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale content that is longer than the table\n".repeat(10)).unwrap();

        let table = VcfTable::from_reader(Cursor::new(VCF)).unwrap();
        LengthDistribution::from_table(&table)
            .unwrap()
            .write_csv(&path)
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "CHR\tSVLEN\nchr1\t100\nchr2\t35\n"
        );
    }
}
