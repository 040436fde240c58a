use crate::{config::Config, depth::merge_tables, io};

/// Strategy
///
/// Read in all depth files, then check that they agree on sequence
/// and positions before summing.  The output file is only created
/// once every check has passed.
pub fn merge_depth_files(cfg: &Config) -> anyhow::Result<()> {
    debug!("Starting processing");

    let mut tables = Vec::with_capacity(cfg.input_files().len());
    for p in cfg.input_files() {
        debug!("Reading depth data from {}", p.display());
        let t = io::read_depth_file(p)?;
        tables.push((p.as_path(), t));
    }

    debug!("Combining {} depth files", tables.len());
    let combined = merge_tables(&tables)?;

    io::write_depth_table(cfg.output(), &combined)?;
    info!(
        "Combined {} depth files for {} ({} positions) into {}",
        tables.len(),
        combined.seq().unwrap_or("no sequence"),
        combined.len(),
        cfg.output().display()
    );
    Ok(())
}
