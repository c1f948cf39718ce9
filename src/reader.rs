//! Access to a VCF file on disk, plain or gzip-compressed.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::error::{Result, SvStatError};
use crate::header::HeaderLines;
use crate::table::VcfTable;

/// Whether a path is treated as gzip-compressed.
pub fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".gz")
}

/// Open a buffered reader over a VCF file, decompressing `.gz` inputs.
pub fn open_vcf_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(SvStatError::InvalidGzipHeader {
                path: path.to_path_buf(),
            })
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

/// A VCF file of structural variant calls.
#[derive(Debug, Clone)]
pub struct VcfFile {
    path: PathBuf,
}

impl VcfFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every data line of the file into a table.
    pub fn load(&self) -> Result<VcfTable> {
        let reader = open_vcf_reader(&self.path)?;
        let table = VcfTable::from_reader(reader)?;
        log::debug!(
            "Loaded {} records from {}",
            table.len(),
            self.path.display()
        );
        Ok(table)
    }

    /// Lazily scan the file for `##` meta-information lines.
    pub fn header_lines(&self) -> Result<HeaderLines<BufReader<Box<dyn Read>>>> {
        Ok(HeaderLines::new(open_vcf_reader(&self.path)?))
    }

    /// Collect all `##` lines of the file.
    pub fn head(&self) -> Result<Vec<String>> {
        self.header_lines()?.collect()
    }

    /// Collect the `##` lines in front of the first record, without reading
    /// the records themselves.
    pub fn leading_head(&self) -> Result<Vec<String>> {
        HeaderLines::leading(open_vcf_reader(&self.path)?).collect()
    }

    /// Write all `##` lines of the file, one per line.
    pub fn show_head<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.header_lines()? {
            writeln!(out, "{}", line?)?;
        }
        Ok(())
    }
}
