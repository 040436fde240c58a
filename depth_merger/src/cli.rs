use std::path::PathBuf;

use clap::{crate_description, crate_name, crate_version, value_parser, Arg, Command};

use utils::{init_log, log_args};

use crate::config::Config;

/// Set up definition of command options for clap
fn cli_model() -> Command {
    let cmd = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!());

    log_args(cmd)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(value_parser!(PathBuf))
                .value_name("PATH")
                .default_value("./combined.dep")
                .help("Output combined depth file"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_parser(value_parser!(PathBuf))
                .value_name("PATH")
                .num_args(1..)
                .required(true)
                .help("Input depth files in tab-delimited cols: target pos count"),
        )
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = cli_model().get_matches();

    // Setup logging
    init_log(&m)?;

    debug!("Processing command line options");

    let input_files: Vec<PathBuf> = m
        .get_many::<PathBuf>("input")
        .ok_or_else(|| anyhow!("No input files specified"))?
        .cloned()
        .collect();

    let output = m
        .get_one::<PathBuf>("output")
        .expect("Missing default output file")
        .clone();

    debug!("Number of input files: {}", input_files.len());

    Ok(Config::new(input_files, output))
}
