use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::inbox::UnifiedStatus;
use super::profile::ContactProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    New,
    Contacted,
    Quoted,
    Closed,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Quoted => "quoted",
            Self::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(Self::New),
            "contacted" => Some(Self::Contacted),
            "quoted" => Some(Self::Quoted),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn unified(self) -> UnifiedStatus {
        match self {
            Self::New => UnifiedStatus::New,
            Self::Contacted | Self::Quoted => UnifiedStatus::InProgress,
            Self::Closed => UnifiedStatus::Closed,
        }
    }
}

/// A quick quote request. The quote form is the loosest of the four:
/// email is optional, phone is often the only way to reach the prospect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub issue_type: Option<String>,
    pub property_type: Option<String>,
    pub zip_code: Option<String>,
    pub status: QuoteStatus,
    pub profile: ContactProfile,
    pub created_at: DateTime<Utc>,
}

impl QuoteRequest {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email: None,
            phone: None,
            service_type: None,
            issue_type: None,
            property_type: None,
            zip_code: None,
            status: QuoteStatus::default(),
            profile: ContactProfile::default(),
            created_at: Utc::now(),
        }
    }
}
