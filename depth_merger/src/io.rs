use std::{
    fs,
    io::{BufRead, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use compress_io::compress::CompressIo;
use utils::get_next_line;

use crate::{depth::DepthTable, error::MergeError};

/// Read a depth file (tab separated: sequence position count)
///
/// Every record must be for the same sequence.  If a position is
/// repeated the later count replaces the earlier one.  A file with no
/// records gives an empty table with no sequence name.
pub fn read_depth_file(p: &Path) -> anyhow::Result<DepthTable> {
    trace!("Opening depth file {} for reading", p.display());
    let mut rdr = CompressIo::new()
        .path(p)
        .bufreader()
        .with_context(|| format!("Could not open depth file {}", p.display()))?;
    trace!("Reading from {}", p.display());
    read_depth_data(&mut rdr, p)
}

fn read_depth_data<R: BufRead>(rdr: &mut R, p: &Path) -> anyhow::Result<DepthTable> {
    let mut buf = String::new();
    let mut line = 0;
    let mut table = DepthTable::default();

    while let Some(fields) = get_next_line(rdr, &mut buf)
        .with_context(|| format!("Error after reading {} lines from {}", line, p.display()))?
    {
        line += 1;
        // Skip blank lines
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(MergeError::MalformedLine {
                path: p.to_owned(),
                line,
                fields: fields.len(),
            }
            .into());
        }

        // First record sets the sequence for the file
        if table.seq().is_none() {
            table = DepthTable::new(fields[0].to_owned());
        }
        if let Some(s) = table.seq().filter(|s| *s != fields[0]) {
            return Err(MergeError::InconsistentSequence {
                path: p.to_owned(),
                line,
                expected: s.to_owned(),
                found: fields[0].to_owned(),
            }
            .into());
        }

        let x = fields[1]
            .parse::<u64>()
            .with_context(|| format!("{}:{} Error reading position", p.display(), line))?;
        let z = fields[2]
            .parse::<u64>()
            .with_context(|| format!("{}:{} Error reading count", p.display(), line))?;
        if let Some(old) = table.insert(x, z) {
            debug!(
                "{}:{} Position {} repeated; count {} replaced by {}",
                p.display(),
                line,
                x,
                old,
                z
            );
        }
    }

    match table.seq() {
        Some(s) => debug!(
            "Read {} lines from {}: sequence {}, {} positions",
            line,
            p.display(),
            s,
            table.len()
        ),
        None => warn!("No depth records found in {}", p.display()),
    }
    Ok(table)
}

/// Write depth table in ascending position order.
/// On failure any partially written file is removed.
pub fn write_depth_table(p: &Path, table: &DepthTable) -> anyhow::Result<()> {
    trace!("Opening {} for output", p.display());
    let mut wrt = BufWriter::new(
        fs::File::create(p)
            .with_context(|| format!("Could not open output file {}", p.display()))?,
    );

    if let Err(e) = write_depth_data(&mut wrt, table) {
        drop(wrt);
        warn!("Removing incomplete output file {}", p.display());
        if let Err(e) = fs::remove_file(p) {
            warn!("Could not remove {}: {}", p.display(), e)
        }
        return Err(e.context(format!("Error writing combined depth to {}", p.display())));
    }
    debug!("Wrote {} positions to {}", table.len(), p.display());
    Ok(())
}

fn write_depth_data<W: Write>(wrt: &mut W, table: &DepthTable) -> anyhow::Result<()> {
    let seq = table.seq().unwrap_or_default();
    for (x, z) in table.iter() {
        writeln!(wrt, "{}\t{}\t{}", seq, x, z)?
    }
    wrt.flush()?;
    Ok(())
}
