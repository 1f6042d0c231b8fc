use crate::driver::ElementHandle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scraped job posting. Immutable once produced by the searcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
}

impl fmt::Display for JobListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} ({}) - {}",
            self.title, self.company, self.location, self.url
        )
    }
}

/// Consolidated contact and project information for the applicant.
///
/// Built once per run; read-only afterward. User-supplied contact fields
/// always win over values inferred from the resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub projects: Vec<String>,
}

impl ApplicantProfile {
    /// Context string handed to the generative collaborator, in the shape
    /// `Name: .., Address: .., Phone: .., Email: .., Projects: ..`.
    pub fn context_string(&self) -> String {
        format!(
            "Name: {}, Address: {}, Phone: {}, Email: {}, Projects: {}",
            self.name,
            self.address,
            self.phone,
            self.email,
            self.projects.join(", ")
        )
    }
}

/// A single form input, scoped to one job's apply flow.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Question label as presented by the site; may be empty.
    pub label: String,
    pub element: ElementHandle,
}

/// How an answer was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Rule,
    Generated,
}

/// A resolved answer for one form field.
#[derive(Debug, Clone)]
pub struct AnswerResolution {
    pub field: FormField,
    pub answer: String,
    pub source: AnswerSource,
}

/// Stages of the per-job apply flow, in order. A failure while reaching a
/// stage is reported against that stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyStage {
    Navigated,
    ActionLocated,
    FieldsExtracted,
    Filled,
    Submitted,
}

impl fmt::Display for ApplyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApplyStage::Navigated => "navigated",
            ApplyStage::ActionLocated => "action_located",
            ApplyStage::FieldsExtracted => "fields_extracted",
            ApplyStage::Filled => "filled",
            ApplyStage::Submitted => "submitted",
        };
        f.write_str(name)
    }
}

/// Failure of one job's apply flow at a specific stage.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed at stage {stage}: {detail}")]
pub struct StageFailure {
    pub stage: ApplyStage,
    pub detail: String,
}

impl StageFailure {
    pub fn new(stage: ApplyStage, detail: impl Into<String>) -> Self {
        Self {
            stage,
            detail: detail.into(),
        }
    }
}

/// Terminal result for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    Failed { stage: ApplyStage },
}

/// One entry of the run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationOutcome {
    pub listing: JobListing,
    #[serde(flatten)]
    pub status: ApplicationStatus,
    pub detail: String,
}

impl ApplicationOutcome {
    pub fn submitted(listing: JobListing) -> Self {
        Self {
            listing,
            status: ApplicationStatus::Submitted,
            detail: String::new(),
        }
    }

    pub fn failed(listing: JobListing, failure: StageFailure) -> Self {
        Self {
            listing,
            status: ApplicationStatus::Failed {
                stage: failure.stage,
            },
            detail: failure.detail,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, ApplicationStatus::Submitted)
    }
}

impl fmt::Display for ApplicationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            ApplicationStatus::Submitted => {
                write!(f, "submitted  {} at {}", self.listing.title, self.listing.company)
            }
            ApplicationStatus::Failed { stage } => write!(
                f,
                "failed({})  {} at {}: {}",
                stage, self.listing.title, self.listing.company, self.detail
            ),
        }
    }
}
