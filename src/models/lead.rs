use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::inbox::UnifiedStatus;
use super::profile::ContactProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Converted => "converted",
            Self::Lost => "lost",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(Self::New),
            "contacted" => Some(Self::Contacted),
            "qualified" => Some(Self::Qualified),
            "converted" => Some(Self::Converted),
            "lost" => Some(Self::Lost),
            _ => None,
        }
    }

    pub fn unified(self) -> UnifiedStatus {
        match self {
            Self::New => UnifiedStatus::New,
            Self::Contacted | Self::Qualified => UnifiedStatus::InProgress,
            Self::Converted => UnifiedStatus::Converted,
            Self::Lost => UnifiedStatus::Closed,
        }
    }
}

/// A lead entered by staff rather than captured by a public form.
/// `source` records how the prospect found the agency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub source: Option<String>,
    pub status: LeadStatus,
    pub last_contacted_at: Option<DateTime<Utc>>,
    pub profile: ContactProfile,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            company: None,
            website: None,
            source: None,
            status: LeadStatus::default(),
            last_contacted_at: None,
            profile: ContactProfile::default(),
            created_at: Utc::now(),
        }
    }
}
