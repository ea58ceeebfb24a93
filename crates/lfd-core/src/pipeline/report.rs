//! Per-function outcomes of one run.

use std::path::PathBuf;

/// What happened to one listed function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionOutcome {
    pub name: String,
    pub dest: PathBuf,
    pub result: Result<u64, String>,
}

impl FunctionOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<FunctionOutcome>,
    /// Requested names (`--only`) that were not in the listing.
    pub unmatched: Vec<String>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// No failed function and no unmatched requested name.
    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0 && self.unmatched.is_empty()
    }

    /// Total bytes written across successful downloads.
    pub fn bytes_written(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }
}
