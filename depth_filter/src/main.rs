mod cli;
mod config;
mod process;

#[macro_use]
extern crate log;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let cfg = cli::handle_cli().with_context(|| "Error processing command line arguments")?;
    process::filter_depth_file(&cfg).map(|_| ())
}
