//! Aggregate statistics over a record table.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::table::VcfTable;

/// Genotype counts keyed by `(label, genotype)`, in lexicographic order.
///
/// Keys sort as pairs rather than as the joined `"label genotype"` string;
/// the two only differ for labels holding characters below a space.
pub type GenotypeTally = BTreeMap<(String, String), usize>;

/// Smallest and largest absolute SV length of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    pub min: u64,
    pub max: u64,
}

/// Number of records in a table.
pub fn show_svnum(table: &VcfTable) -> usize {
    table.len()
}

/// Count records per (SV type label, genotype) pair.
pub fn genotype_tally(table: &VcfTable) -> Result<GenotypeTally> {
    let mut tally = GenotypeTally::new();
    for record in table {
        let key = (
            record.genotype_label()?.to_string(),
            record.genotype().to_string(),
        );
        *tally.entry(key).or_insert(0) += 1;
    }
    Ok(tally)
}

/// Min and max absolute SV length, or `None` for an empty table.
pub fn sv_length_range(table: &VcfTable) -> Result<Option<LengthRange>> {
    let mut range: Option<LengthRange> = None;
    for record in table {
        let len = record.sv_length()?;
        range = Some(match range {
            Some(r) => LengthRange {
                min: r.min.min(len),
                max: r.max.max(len),
            },
            None => LengthRange { min: len, max: len },
        });
    }
    Ok(range)
}

pub fn max_sv_length(table: &VcfTable) -> Result<Option<u64>> {
    Ok(sv_length_range(table)?.map(|r| r.max))
}

pub fn min_sv_length(table: &VcfTable) -> Result<Option<u64>> {
    Ok(sv_length_range(table)?.map(|r| r.min))
}

/// Records whose genotype is exactly the unphased heterozygote `0/1`.
pub fn unphased_het_count(table: &VcfTable) -> usize {
    table.iter().filter(|r| r.genotype() == "0/1").count()
}

/// Records whose ID mentions BND.
pub fn bnd_count(table: &VcfTable) -> usize {
    table.iter().filter(|r| r.id.contains("BND")).count()
}
