//! Clean options

/// Options for the clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Report what would be deleted without deleting it
    pub dry_run: bool,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
