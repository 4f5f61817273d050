use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::inbox::UnifiedStatus;
use super::profile::ContactProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(Self::New),
            "read" => Some(Self::Read),
            "replied" => Some(Self::Replied),
            _ => None,
        }
    }

    pub fn unified(self) -> UnifiedStatus {
        match self {
            Self::New => UnifiedStatus::New,
            Self::Read => UnifiedStatus::InProgress,
            Self::Replied => UnifiedStatus::Closed,
        }
    }
}

/// A message sent through the site's contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub service: Option<String>,
    pub message: String,
    pub status: ContactStatus,
    pub profile: ContactProfile,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            service: None,
            message,
            status: ContactStatus::default(),
            profile: ContactProfile::default(),
            created_at: Utc::now(),
        }
    }
}
