//! Mapping entity: a short code pointing at a Discord invite.

use chrono::{DateTime, Utc};

/// A registered short code.
///
/// `short_code` is always stored lowercase. Mappings are never edited; the
/// only mutation is deletion by the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub short_code: String,
    pub discord_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub owner_id: String,
}

/// Input data for creating a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub short_code: String,
    pub discord_url: String,
    pub owner_id: String,
    pub expires_at: Option<DateTime<Utc>>,
}
