//! VCF header scanner.
//!
//! Yields the `##` meta-information lines of a VCF stream lazily and parses
//! the ##INFO definitions among them.

use std::collections::HashMap;
use std::io::BufRead;

use crate::error::Result;

/// The number of values an INFO field can have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoNumber {
    /// A fixed number of values.
    Count(usize),
    /// One value per alternate allele (A).
    PerAltAllele,
    /// One value per possible genotype (G).
    PerGenotype,
    /// One value per allele including reference (R).
    PerAllele,
    /// Variable number of values (.).
    Variable,
    /// Flag type (0 values, presence indicates true).
    Flag,
}

/// The data type of an INFO field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoType {
    Integer,
    Float,
    Flag,
    Character,
    String,
}

/// Metadata for a single INFO field declared in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoField {
    /// The field identifier (e.g., "SVTYPE", "SVLEN").
    pub id: String,
    pub number: InfoNumber,
    pub field_type: InfoType,
    pub description: String,
}

/// Lazy iterator over the `##` lines of a VCF stream.
///
/// Only meta-information lines are yielded, with surrounding whitespace
/// removed. [`HeaderLines::new`] reads the whole stream, so `##` lines after
/// the first record are yielded too; [`HeaderLines::leading`] stops at the
/// first record.
pub struct HeaderLines<R> {
    reader: R,
    buf: String,
    stop_at_data: bool,
}

impl<R: BufRead> HeaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            stop_at_data: false,
        }
    }

    /// Scan only the header block in front of the first record.
    pub fn leading(reader: R) -> Self {
        Self {
            stop_at_data: true,
            ..Self::new(reader)
        }
    }
}

impl<R: BufRead> Iterator for HeaderLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) if self.buf.starts_with("##") => {
                    return Some(Ok(self.buf.trim().to_string()));
                }
                Ok(_)
                    if self.stop_at_data
                        && !self.buf.starts_with('#')
                        && !self.buf.trim().is_empty() =>
                {
                    return None;
                }
                Ok(_) => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Parse the Number attribute from an INFO line.
fn parse_number(s: &str) -> InfoNumber {
    match s {
        "A" => InfoNumber::PerAltAllele,
        "G" => InfoNumber::PerGenotype,
        "R" => InfoNumber::PerAllele,
        "." => InfoNumber::Variable,
        "0" => InfoNumber::Flag,
        _ => InfoNumber::Count(s.parse().unwrap_or(1)),
    }
}

/// Parse the Type attribute from an INFO line.
fn parse_type(s: &str) -> InfoType {
    match s {
        "Integer" => InfoType::Integer,
        "Float" => InfoType::Float,
        "Flag" => InfoType::Flag,
        "Character" => InfoType::Character,
        _ => InfoType::String,
    }
}

/// Parse the key=value pairs from inside the INFO angle brackets.
fn parse_info_attrs(content: &str) -> HashMap<&str, &str> {
    let mut attrs = HashMap::new();
    let mut remaining = content;

    while let Some(eq_pos) = remaining.find('=') {
        let key = remaining[..eq_pos].trim();
        remaining = &remaining[eq_pos + 1..];

        let value = if let Some(quoted) = remaining.strip_prefix('"') {
            let end_quote = quoted.find('"').unwrap_or(quoted.len());
            let val = &quoted[..end_quote];
            remaining = quoted[(end_quote + 1).min(quoted.len())..].trim_start_matches(',');
            val
        } else {
            let (val, rest) = remaining.split_once(',').unwrap_or((remaining, ""));
            remaining = rest;
            val
        };

        attrs.insert(key, value);
    }

    attrs
}

/// Parse a single ##INFO line.
fn parse_info_line(line: &str) -> Option<InfoField> {
    let line = line.strip_prefix("##INFO=<")?.strip_suffix('>')?;
    let attrs = parse_info_attrs(line);

    Some(InfoField {
        id: attrs.get("ID")?.to_string(),
        number: parse_number(attrs.get("Number")?),
        field_type: parse_type(attrs.get("Type")?),
        description: attrs.get("Description").copied().unwrap_or_default().to_string(),
    })
}

/// Parse every ##INFO definition among the given header lines.
///
/// Lines that are not well-formed INFO definitions are skipped. Declaration
/// order is kept.
pub fn parse_info_fields<S: AsRef<str>>(lines: &[S]) -> Vec<InfoField> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| line.starts_with("##INFO=<"))
        .filter_map(parse_info_line)
        .collect()
}
