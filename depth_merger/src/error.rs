use std::path::PathBuf;

use thiserror::Error;

/// Validation failures that stop a merge before any output is written
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Non-standard depth file {}: line {line} has {fields} tab separated fields (expected 3)", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        fields: usize,
    },

    #[error("Multiple targets in {}: line {line} has {found}, expected {expected}", .path.display())]
    InconsistentSequence {
        path: PathBuf,
        line: usize,
        expected: String,
        found: String,
    },

    #[error("Target mismatch: {} has {found}, expected {expected}", .path.display())]
    SequenceMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("Depth files have different number of positions: {}", join_sizes(.sizes))]
    PositionCountMismatch { sizes: Vec<usize> },

    #[error("Position mismatch between depth files: position {position} from {} not found in {}", .reference.display(), .path.display())]
    PositionSetMismatch {
        reference: PathBuf,
        path: PathBuf,
        position: u64,
    },

    #[error("Combined count overflows at position {position}")]
    CountOverflow { position: u64 },

    #[error("No depth files to merge")]
    NoInput,
}

fn join_sizes(sizes: &[usize]) -> String {
    sizes
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
