//! External collaborator seams: resume text extraction, entity
//! recognition, and free-text generation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported resume format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from {path}: {detail}")]
    Extraction { path: String, detail: String },
}

/// Pulls plain text out of a resume document.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Location,
    Organization,
    Email,
    Phone,
}

/// A named entity found in the resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
}

/// NLP capability over the extracted resume text.
pub trait EntityRecognizer: Send + Sync {
    fn entities(&self, text: &str) -> Vec<Entity>;

    /// Split text into sentences, preserving order.
    fn sentences(&self, text: &str) -> Vec<String>;
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Completion request failed: {0}")]
    Request(String),

    #[error("Malformed completion response: {0}")]
    Malformed(String),
}

/// Free-text completion collaborator; one completion per call.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}
