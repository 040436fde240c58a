use std::path::{Path, PathBuf};

/// Config
///
/// Configuration info for the program
/// This is generated from the command line arguments
/// Once set it is read only
///
/// input_files - depth files to be combined (at least one)
/// output - path of combined depth file
///
pub struct Config {
    input_files: Vec<PathBuf>,
    output: PathBuf,
}

impl Config {
    pub fn new(input_files: Vec<PathBuf>, output: PathBuf) -> Self {
        Self {
            input_files,
            output,
        }
    }

    pub fn input_files(&self) -> &[PathBuf] {
        &self.input_files
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}
