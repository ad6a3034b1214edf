use std::fmt;
use std::path::{Path, PathBuf};

use tracing::warn;

/// A non-fatal loading problem: the affected content is skipped or left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file or folder concerned.
    pub path: PathBuf,
    /// What went wrong and what was skipped.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}: {}", self.path.display(), self.message)
    }
}

/// Collects warnings while a pack loads, logging each one as it arrives.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn warn(&mut self, path: &Path, message: impl Into<String>) {
        let message = message.into();
        warn!(path = %path.display(), "{message}");
        self.items.push(Diagnostic {
            path: path.to_path_buf(),
            message,
        });
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
