use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One yearly summary as returned by `spotify/wrapped-history/`. The backend
/// sends more fields than the game reads; everything unknown is ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WrappedEntry {
    #[serde(default)]
    pub artists: Vec<WrappedArtist>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WrappedArtist {
    #[serde(default)]
    pub name: String,
}
