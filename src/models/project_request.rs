use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::inbox::UnifiedStatus;
use super::profile::ContactProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    New,
    Contacted,
    Quoted,
    Accepted,
    Declined,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Quoted => "quoted",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(Self::New),
            "contacted" => Some(Self::Contacted),
            "quoted" => Some(Self::Quoted),
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }

    pub fn unified(self) -> UnifiedStatus {
        match self {
            Self::New => UnifiedStatus::New,
            Self::Contacted | Self::Quoted => UnifiedStatus::InProgress,
            Self::Accepted => UnifiedStatus::Converted,
            Self::Declined => UnifiedStatus::Closed,
        }
    }
}

/// A project intake request: a prospect describing the build they want.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub business_name: Option<String>,
    pub website: Option<String>,
    pub project_types: Vec<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub status: ProjectStatus,
    pub profile: ContactProfile,
    pub created_at: DateTime<Utc>,
}

impl ProjectRequest {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            business_name: None,
            website: None,
            project_types: Vec::new(),
            budget: None,
            timeline: None,
            status: ProjectStatus::default(),
            profile: ContactProfile::default(),
            created_at: Utc::now(),
        }
    }
}
