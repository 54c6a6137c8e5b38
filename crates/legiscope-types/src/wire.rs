//! Response envelopes as emitted by the backend.
//!
//! The backend wraps most payloads in a `{success, ...}` object and has
//! renamed collection keys across versions (`commissions` → `items`), so the
//! envelopes here accept both spellings and default everything that can be
//! absent.

use serde::{Deserialize, Serialize};

use crate::{ActivityItem, Commission, CommissionSessions, KomProfile, NewsItem, Politician};

fn success_default() -> bool {
    true
}

/// `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(default)]
    pub gemini_configured: bool,
}

/// `GET /api/commissions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommissionList {
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(default, alias = "commissions")]
    pub items: Vec<Commission>,
    #[serde(default)]
    pub total: usize,
}

/// `GET /api/commissions/{group}/{name}/sessions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsEnvelope {
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(default)]
    pub commission: CommissionSessions,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/commissions/{group}/{name}/sessions/{sid}/transcript`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEnvelope {
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/politicians`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoliticianList {
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(default, alias = "items")]
    pub politicians: Vec<Politician>,
    #[serde(default)]
    pub total: usize,
}

/// `GET /api/kom/{chamber}/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(default = "success_default")]
    pub exists: bool,
    #[serde(default)]
    pub profile: KomProfile,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/kom/{chamber}/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub success: bool,
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/activity`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityFeed {
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(default)]
    pub items: Vec<ActivityItem>,
    #[serde(default)]
    pub total: usize,
}

/// `GET /api/news`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsFeed {
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(default)]
    pub items: Vec<NewsItem>,
    #[serde(default)]
    pub total: usize,
}

/// `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub success: bool,
    #[serde(default)]
    pub saved_as: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
