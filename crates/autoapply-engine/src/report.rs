//! Run report: the ordered outcomes of every job attempted.

use autoapply_core::model::ApplicationOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub outcomes: Vec<ApplicationOutcome>,
}

impl RunReport {
    pub fn new(outcomes: Vec<ApplicationOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn submitted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_submitted()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.submitted_count()
    }

    /// One line per job, in the order the jobs were attempted.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.outcomes.iter().map(|o| o.to_string())
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        write!(
            f,
            "{} submitted, {} failed",
            self.submitted_count(),
            self.failed_count()
        )
    }
}
