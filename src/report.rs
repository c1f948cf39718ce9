//! The statistics report: filtering stages, summaries and CSV export.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::distribution::{LengthDistribution, distribution_path};
use crate::error::{Result, SvStatError};
use crate::header::parse_info_fields;
use crate::reader::VcfFile;
use crate::stats::{self, LengthRange};
use crate::table::{self, VcfTable};

const SEPARATOR: &str = "--------------------------------------------------------";

/// INFO keys the positional INFO parsing expects to find.
const POSITIONAL_INFO_KEYS: [&str; 2] = ["SVTYPE", "SVLEN"];

/// Every number printed by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub pass_count: usize,
    pub filtered_count: usize,
    pub bnd_count: usize,
    pub unphased_count: usize,
    pub deleted_count: usize,
    pub length_range: LengthRange,
    pub csv_path: PathBuf,
}

/// Print the input banner.
pub fn print_banner<W: Write>(out: &mut W, vcf_path: &Path) -> Result<()> {
    writeln!(out, "#   Input VCF File  #")?;
    writeln!(out, "{}", vcf_path.display())?;
    Ok(())
}

fn print_tally<W: Write>(out: &mut W, table: &VcfTable) -> Result<()> {
    for ((label, genotype), count) in stats::genotype_tally(table)? {
        writeln!(out, "{} {} {}", label, genotype, count)?;
    }
    Ok(())
}

fn log_header_summary(vcf: &VcfFile) -> Result<()> {
    let lines = vcf.leading_head()?;
    let fields = parse_info_fields(&lines[..]);
    log::debug!(
        "{} header lines, INFO keys: {}",
        lines.len(),
        fields
            .iter()
            .map(|f| f.id.as_str())
            .collect::<Vec<_>>()
            .join(",")
    );
    for key in POSITIONAL_INFO_KEYS {
        if !fields.iter().any(|f| f.id == key) {
            log::warn!(
                "INFO key {} is not declared in the header; SV type and length are read by position",
                key
            );
        }
    }
    Ok(())
}

/// Run the full statistics pipeline on `vcf_path`, printing to `out`.
///
/// PASS records are summarised first, then the PASS records left after
/// dropping breakends and missing genotypes. The length distribution of the
/// latter is written next to the input.
///
/// Fails with [`SvStatError::EmptyTable`] before the length lines are printed
/// when no record survives filtering; no CSV is written in that case.
pub fn run<W: Write>(vcf_path: &Path, out: &mut W) -> Result<RunSummary> {
    let vcf = VcfFile::new(vcf_path);
    log_header_summary(&vcf)?;

    let records = vcf.load()?;
    log::info!("Loaded {} records", records.len());

    let filtered_pass = table::filter_pass(&records)?;
    let pass_count = stats::show_svnum(&filtered_pass);
    writeln!(out, "[INFO] The PASS SV:   {}", pass_count)?;
    print_tally(out, &filtered_pass)?;
    writeln!(out, "{}", SEPARATOR)?;

    let filtered_bnd = table::filter_bnd(&filtered_pass)?;
    let filtered_hp = table::filter_unphased(&filtered_bnd)?;
    let filtered_count = stats::show_svnum(&filtered_hp);
    log::debug!(
        "PASS: {}, without BND: {}, without missing genotypes: {}",
        pass_count,
        filtered_bnd.len(),
        filtered_count
    );
    writeln!(out, "[INFO] The filtered SV:   {}", filtered_count)?;
    print_tally(out, &filtered_hp)?;

    let bnd_count = stats::bnd_count(&filtered_pass);
    let unphased_count = stats::unphased_het_count(&filtered_bnd);
    writeln!(
        out,
        "[INFO][SV count] The total deleted number of 'BND' ： {}",
        bnd_count
    )?;
    writeln!(
        out,
        "[INFO][SV count] The total deleted number of 'Unphasing' ： {}",
        unphased_count
    )?;
    writeln!(out, "{}", SEPARATOR)?;

    let deleted_count = pass_count - filtered_count;
    writeln!(
        out,
        "[INFO][SV count] The total number of SV  (after filtering) ： {}",
        filtered_count
    )?;
    writeln!(
        out,
        "[INFO][SV count] The total number of deleted SV (after filtering) ： {}",
        deleted_count
    )?;
    writeln!(out, "{}", SEPARATOR)?;

    let length_range = stats::sv_length_range(&filtered_hp)?.ok_or(SvStatError::EmptyTable)?;
    writeln!(out, "[INFO] The longest SV ： {}", length_range.max)?;
    writeln!(out, "[INFO] The shortest SV ： {}", length_range.min)?;

    let distribution = LengthDistribution::from_table(&filtered_hp)?;
    writeln!(out, "##### Save SV length distribution #####")?;
    let csv_path = distribution_path(vcf_path);
    distribution.write_csv(&csv_path)?;
    log::info!(
        "Wrote {} length entries to {}",
        distribution.len(),
        csv_path.display()
    );
    writeln!(out, "##### Output SV length distribution CSV#####")?;

    Ok(RunSummary {
        pass_count,
        filtered_count,
        bnd_count,
        unphased_count,
        deleted_count,
        length_range,
        csv_path,
    })
}
