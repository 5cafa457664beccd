//! Run summary

use std::path::PathBuf;

/// What one generator run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Packages that were searched for interfaces
    pub packages_scanned: usize,

    /// Packages without a matching interface
    pub empty_packages: Vec<String>,

    /// Output paths, in the order they were handed to the sink
    pub written: Vec<PathBuf>,
}

impl RunReport {
    pub fn files_written(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}
