// src/models/guide.rs

use serde::{Deserialize, Serialize};
use url::Url;

/// Closed set of identity document types known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Aadhaar,
    Pan,
    Voter,
    Passport,
    Driving,
}

impl DocumentType {
    /// Maps a raw key onto the closed document-type set.
    /// Unknown keys (including the empty string) are a regular `None`,
    /// not an error.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "aadhaar" => Some(Self::Aadhaar),
            "pan" => Some(Self::Pan),
            "voter" => Some(Self::Voter),
            "passport" => Some(Self::Passport),
            "driving" => Some(Self::Driving),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::Voter => "voter",
            Self::Passport => "passport",
            Self::Driving => "driving",
        }
    }
}

/// Effort rating shared by checklist items and guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Static step-by-step instructions for acquiring one document type.
#[derive(Debug, Clone, Serialize)]
pub struct GuideRecord {
    pub document_type: DocumentType,
    pub title: String,
    pub description: String,

    /// Why the document matters.
    pub importance: Vec<String>,

    /// What to bring or upload.
    pub requirements: Vec<String>,

    /// Ordered application steps.
    pub steps: Vec<String>,

    /// Official government portal for this document.
    pub official_link: Url,

    pub estimated_time: String,
    pub difficulty: Difficulty,
}
