//! In-memory VCF record table and the named record filters.

use std::io::BufRead;

use crate::RecordFilter;
use crate::error::Result;
use crate::filter::Preset;
use crate::row::{VcfRecord, parse_record};

/// An ordered table of VCF records.
///
/// Filtering produces a new table and leaves the source untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VcfTable {
    records: Vec<VcfRecord>,
}

impl VcfTable {
    pub fn new(records: Vec<VcfRecord>) -> Self {
        Self { records }
    }

    /// Parse the data lines of a VCF stream.
    ///
    /// Comment lines (starting with `#`) and blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            records.push(parse_record(&line, idx + 1)?);
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[VcfRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VcfRecord> {
        self.records.iter()
    }

    /// Records matching `filter`, in their original order.
    pub fn filter(&self, filter: &RecordFilter) -> Result<VcfTable> {
        let mut kept = Vec::new();
        for record in &self.records {
            if filter.matches(record)? {
                kept.push(record.clone());
            }
        }
        Ok(VcfTable::new(kept))
    }

    /// Records matching a named preset.
    pub fn filter_preset(&self, preset: Preset) -> Result<VcfTable> {
        self.filter(&RecordFilter::preset(preset)?)
    }
}

impl<'a> IntoIterator for &'a VcfTable {
    type Item = &'a VcfRecord;
    type IntoIter = std::slice::Iter<'a, VcfRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Keep records whose FILTER starts with PASS.
pub fn filter_pass(table: &VcfTable) -> Result<VcfTable> {
    table.filter_preset(Preset::PassOnly)
}

/// Drop records whose INFO contains `RE=1`.
pub fn filter_re(table: &VcfTable) -> Result<VcfTable> {
    table.filter_preset(Preset::RemoveRe)
}

/// Drop records whose INFO mentions BND.
pub fn filter_bnd(table: &VcfTable) -> Result<VcfTable> {
    table.filter_preset(Preset::RemoveBnd)
}

/// Drop records with a `./.` genotype.
pub fn filter_unphased(table: &VcfTable) -> Result<VcfTable> {
    table.filter_preset(Preset::RemoveUnphased)
}

/// Drop records with a `./.` or `1|1` genotype.
pub fn filter_keep_haploid_only(table: &VcfTable) -> Result<VcfTable> {
    table.filter_preset(Preset::KeepHaploidOnly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const VCF: &str = "##fileformat=VCFv4.2\n\
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE\n\
chr1\t100\tsv1\tN\t<DEL>\t60\tPASS\tPRECISE;SVTYPE=DEL;SVLEN=-100;RE=8\tGT\t0|1\n\
chr1\t200\tsv2\tN\t<INS>\t10\tLowQual\tPRECISE;SVTYPE=INS;SVLEN=40;RE=2\tGT\t0/1\n\
\n\
chr2\t300\tsv3.BND\tN\tN]chr4:10]\t60\tPASS\tIMPRECISE;SVTYPE=BND;SVLEN=0;RE=1\tGT\t0|1\n\
chr2\t400\tsv4\tN\t<DUP>\t60\tPASS;GT\tPRECISE;SVTYPE=DUP;SVLEN=900;RE=5\tGT\t./.\n\
chr3\t500\tsv5\tN\t<INV>\t60\tPASS\tPRECISE;SVTYPE=INV;SVLEN=70;RE=9\tGT:DR\t1|1:0\n\
chrX\t600\tsv6\tN\t<DEL>\t60\tPASS\tPRECISE;SVTYPE=DEL;SVLEN=-15;RE=3\tGT\t0/1\n";

    fn table() -> VcfTable {
        VcfTable::from_reader(Cursor::new(VCF)).unwrap()
    }

    fn ids(table: &VcfTable) -> Vec<&str> {
        table.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_from_reader_skips_comments_and_blanks() {
        assert_eq!(table().len(), 6);
    }

    #[test]
    fn test_row_parse_error_reports_line() {
        let vcf = "#CHROM\n\nchr1\t1\t.\n";
        let err = VcfTable::from_reader(Cursor::new(vcf)).unwrap_err();
        assert!(matches!(
            err,
            crate::SvStatError::RowParseError { line: 3, .. }
        ));
    }

    #[test]
    fn test_filter_pass() {
        let source = table();
        let pass = filter_pass(&source).unwrap();

        assert_eq!(ids(&pass), vec!["sv1", "sv3.BND", "sv4", "sv5", "sv6"]);
        assert!(pass.iter().all(|r| r.filter.starts_with("PASS")));
        // Source is untouched
        assert_eq!(source.len(), 6);
    }

    #[test]
    fn test_filter_re() {
        assert_eq!(
            ids(&filter_re(&table()).unwrap()),
            vec!["sv1", "sv2", "sv4", "sv5", "sv6"]
        );
    }

    #[test]
    fn test_filter_bnd() {
        let kept = filter_bnd(&table()).unwrap();
        assert_eq!(ids(&kept), vec!["sv1", "sv2", "sv4", "sv5", "sv6"]);
        assert!(kept.iter().all(|r| !r.info.contains("BND")));
    }

    #[test]
    fn test_filter_unphased() {
        assert_eq!(
            ids(&filter_unphased(&table()).unwrap()),
            vec!["sv1", "sv2", "sv3.BND", "sv5", "sv6"]
        );
    }

    #[test]
    fn test_keep_haploid_only_is_subset_of_unphased() {
        let source = table();
        let haploid = filter_keep_haploid_only(&source).unwrap();
        let unphased = filter_unphased(&source).unwrap();

        assert_eq!(ids(&haploid), vec!["sv1", "sv2", "sv3.BND", "sv6"]);
        assert!(haploid.iter().all(|r| unphased.records().contains(r)));
    }

    #[test]
    fn test_chained_filters_preserve_order() {
        let kept = filter_unphased(&filter_bnd(&filter_pass(&table()).unwrap()).unwrap()).unwrap();
        assert_eq!(ids(&kept), vec!["sv1", "sv5", "sv6"]);
    }

    #[test]
    fn test_custom_filter() {
        let filter = RecordFilter::new(r#"CHROM == "chr1" || ID contains "BND""#).unwrap();
        assert_eq!(ids(&table().filter(&filter).unwrap()), vec!["sv1", "sv2", "sv3.BND"]);
    }
}
