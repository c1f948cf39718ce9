use clap::Parser;
use std::{io, process, time};
use sv_stat::{
    Result,
    cli::{Cli, MISSING_INPUT_EXIT_CODE, init_logger},
    report,
};

fn runner(cli: &Cli) -> Result<()> {
    let start_timer = time::Instant::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run(&cli.vcf_file, &mut out)?;
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger();
    log::trace!("CLI options set: {:?}", cli);

    let mut out = io::stdout();
    if report::print_banner(&mut out, &cli.vcf_file).is_err() {
        process::exit(1);
    }
    if !cli.input_exists() {
        println!("ERROR: VCF file does not exist!");
        process::exit(MISSING_INPUT_EXIT_CODE);
    }

    if let Err(e) = runner(&cli) {
        log::error!("{}", e);
        process::exit(1);
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
}
