use std::path::{Path, PathBuf};

pub struct Config {
    input: PathBuf,
    output: PathBuf,
    seq: String,
}

impl Config {
    pub fn new(input: PathBuf, output: PathBuf, seq: String) -> Self {
        Self { input, output, seq }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn seq(&self) -> &str {
        &self.seq
    }
}
