//! Output sink abstraction.

use crate::ResultsResult;
use std::fs;
use std::path::PathBuf;

/// Destination for named text artifacts (CSV, SVG, JSON).
pub trait OutputSink {
    fn write_text(&mut self, name: &str, contents: &str) -> ResultsResult<()>;
}

/// Sink writing artifacts into a directory on disk.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: PathBuf) -> ResultsResult<Self> {
        if !root.exists() {
            fs::create_dir_all(&root)?;
        }
        Ok(Self { root })
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl OutputSink for DirectorySink {
    fn write_text(&mut self, name: &str, contents: &str) -> ResultsResult<()> {
        fs::write(self.root.join(name), contents)?;
        Ok(())
    }
}

/// In-memory sink for tests.
#[derive(Default)]
pub struct MemorySink {
    pub files: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
    }
}

impl OutputSink for MemorySink {
    fn write_text(&mut self, name: &str, contents: &str) -> ResultsResult<()> {
        self.files.retain(|(n, _)| n != name);
        self.files.push((name.to_string(), contents.to_string()));
        Ok(())
    }
}
