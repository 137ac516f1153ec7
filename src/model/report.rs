use std::path::PathBuf;

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnError {
    /// Stop the batch at the first failure and return its error.
    #[default]
    Abort,
    /// Record the failure and carry on with the next icon.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub name: String,
    pub path: PathBuf,
    pub digest: String,
}

#[derive(Debug)]
pub struct Failed {
    pub name: String,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct Report {
    pub rendered: Vec<Rendered>,
    pub failed: Vec<Failed>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn rendered(&self, name: &str) -> Option<&Rendered> {
        self.rendered.iter().find(|r| r.name == name)
    }
}
