use clap::Parser;
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use std::{io::Write, path::PathBuf};

/// Exit status when the input VCF is missing.
pub const MISSING_INPUT_EXIT_CODE: i32 = -1;

#[derive(Parser, Debug)]
#[command(
    name = "sv-stat",
    version,
    about = "1. Statistical genotypes information of structural variants from VCF file; \
             2. Generate the SV length distribution",
    long_about = None
)]
pub struct Cli {
    /// Input VCF file (structural variants)
    #[arg(short = 'v', long = "vcf-file", value_name = "VCF", required = true)]
    pub vcf_file: PathBuf,
}

impl Cli {
    /// Whether the input path names an existing regular file.
    pub fn input_exists(&self) -> bool {
        self.vcf_file.is_file()
    }
}

/// Initializes logging to standard error.
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match level {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.module_path().unwrap_or("unknown_module"),
                record.args()
            )
        })
        .init();
}
