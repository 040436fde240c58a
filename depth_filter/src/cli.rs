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
            Arg::new("input")
                .short('i')
                .long("input")
                .value_parser(value_parser!(PathBuf))
                .value_name("PATH")
                .required(true)
                .help("Path to input depth file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(value_parser!(PathBuf))
                .value_name("PATH")
                .required(true)
                .help("Path to output filtered file"),
        )
        .arg(
            Arg::new("seq")
                .long("seq")
                .value_parser(value_parser!(String))
                .value_name("NAME")
                .required(true)
                .help("Sequence name to filter by"),
        )
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    let m = cli_model().get_matches();

    init_log(&m)?;

    debug!("Processing command line options");

    let input = m
        .get_one::<PathBuf>("input")
        .expect("Missing required input")
        .clone();
    let output = m
        .get_one::<PathBuf>("output")
        .expect("Missing required output")
        .clone();
    let seq = m
        .get_one::<String>("seq")
        .expect("Missing required sequence name")
        .clone();

    Ok(Config::new(input, output, seq))
}
