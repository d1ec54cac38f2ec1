extern crate clap;
extern crate ppc_bin_diff;

use clap::{App, Arg, ArgMatches};
use ppc_bin_diff::{parse_int, Config, OutputFormat, Result, DEFAULT_OUTFILE};
use std::path::PathBuf;

fn config_from(matches: &ArgMatches) -> Result<Config> {
    // FILE arguments are required, so clap guarantees they are present
    let clean = PathBuf::from(matches.value_of("CLEAN").unwrap_or_default());
    let patched = PathBuf::from(matches.value_of("PATCHED").unwrap_or_default());
    let mut config = Config::new(clean, patched);

    if let Some(base) = matches.value_of("base") {
        config.base = parse_int(base)?;
    }
    if let Some(mode) = matches.value_of("mode") {
        config.mode.width = mode.parse()?;
    }
    if let Some(endian) = matches.value_of("endian") {
        config.mode.endian = endian.parse()?;
    }
    if let Some(outfile) = matches.value_of("outfile") {
        config.outfile = PathBuf::from(outfile);
    }
    if matches.is_present("makepatch") {
        config.output_format = OutputFormat::PatchScript;
    }
    Ok(config)
}

fn main() {
    env_logger::init();

    let matches = App::new("PowerPC binary diff tool")
        .version("1.0")
        .about("Compare two PowerPC images and dump instruction-level differences")
        .arg(
            Arg::with_name("CLEAN")
                .help("Path to original/clean binary")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("PATCHED")
                .help("Path to patched/modified binary")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("base")
                .long("base")
                .help("Base address (hex or int)")
                .takes_value(true)
                .default_value("0x0"),
        )
        .arg(
            Arg::with_name("mode")
                .long("mode")
                .help("PPC mode")
                .takes_value(true)
                .possible_values(&["32", "64"])
                .default_value("64"),
        )
        .arg(
            Arg::with_name("endian")
                .long("endian")
                .help("Endianness")
                .takes_value(true)
                .possible_values(&["big", "little"])
                .default_value("big"),
        )
        .arg(
            Arg::with_name("outfile")
                .long("outfile")
                .help("Output file")
                .takes_value(true)
                .default_value(DEFAULT_OUTFILE),
        )
        .arg(
            Arg::with_name("makepatch")
                .long("makepatch")
                .help("Emit only patched instructions in MAKEPATCH format")
                .takes_value(false),
        )
        .get_matches();

    let result = config_from(&matches).and_then(|config| {
        let report = ppc_bin_diff::run(&config)?;
        println!(
            "Wrote {} with {} {} block(s).",
            config.outfile.display(),
            report.blocks,
            config.output_format.block_kind()
        );
        Ok(())
    });

    if let Err(why) = result {
        eprintln!("ERROR: {}", why);
        std::process::exit(1);
    }
}
