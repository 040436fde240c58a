use std::{
    fs,
    io::{BufRead, BufWriter, Write},
};

use anyhow::Context;
use compress_io::compress::CompressIo;

use crate::config::Config;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub lines: usize,
    pub kept: usize,
}

/// Copy lines whose first field matches the requested sequence.
/// Matching lines are written out unchanged and in their original order.
pub fn filter_depth_file(cfg: &Config) -> anyhow::Result<FilterStats> {
    let (ip, op) = (cfg.input(), cfg.output());
    trace!(
        "Opening {} for reading; lines for {} will be written to {}",
        ip.display(),
        cfg.seq(),
        op.display()
    );
    let mut rdr = CompressIo::new()
        .path(ip)
        .bufreader()
        .with_context(|| format!("Could not open input file {}", ip.display()))?;
    let mut wrt = BufWriter::new(
        fs::File::create(op)
            .with_context(|| format!("Could not open output file {}", op.display()))?,
    );

    let stats = match filter_lines(&mut rdr, &mut wrt, cfg.seq()) {
        Ok(s) => s,
        Err(e) => {
            drop(wrt);
            warn!("Removing incomplete output file {}", op.display());
            if let Err(e) = fs::remove_file(op) {
                warn!("Could not remove {}: {}", op.display(), e)
            }
            return Err(e.context(format!(
                "Error filtering {} into {}",
                ip.display(),
                op.display()
            )));
        }
    };

    info!(
        "Read {} lines from {}; {} lines for {} written to {}",
        stats.lines,
        ip.display(),
        stats.kept,
        cfg.seq(),
        op.display()
    );
    Ok(stats)
}

fn filter_lines<R: BufRead, W: Write>(
    rdr: &mut R,
    wrt: &mut W,
    seq: &str,
) -> anyhow::Result<FilterStats> {
    let mut buf = Vec::new();
    let mut stats = FilterStats::default();
    loop {
        buf.clear();
        if rdr
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Error after reading {} lines", stats.lines))?
            == 0
        {
            break;
        }
        stats.lines += 1;
        if first_field(&buf) == Some(seq.as_bytes()) {
            wrt.write_all(&buf)?;
            stats.kept += 1;
        }
    }
    wrt.flush()?;
    Ok(stats)
}

/// First whitespace delimited field of a line, if any
fn first_field(line: &[u8]) -> Option<&[u8]> {
    line.split(|c| c.is_ascii_whitespace()).find(|s| !s.is_empty())
}
