//! Domain types shared by the stores, the adapters and the API client.

use serde::{Deserialize, Serialize};

/// A flea market row as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Market {
    pub id: String,
    pub external_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    pub category: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stall_count: Option<u32>,
    #[serde(default)]
    pub has_food: bool,
    #[serde(default)]
    pub has_parking: bool,
    #[serde(default)]
    pub has_toilets: bool,
    #[serde(default)]
    pub has_wifi: bool,
    #[serde(default)]
    pub is_indoor: bool,
    #[serde(default)]
    pub is_outdoor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_features: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub scraped_at: String,
    pub created_at: String,
    pub updated_at: String,
    /// Kilometres from the user, filled in client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// UI language. Danish unless the user picked English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Da,
}

/// Authenticated user as returned by Supabase auth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
    pub token_type: String,
    pub user: User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Facebook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CameraFacing {
    Front,
    #[default]
    Back,
}

/// What a rating is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RatingType {
    #[default]
    Stall,
    Market,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DatabaseHealth {
    pub connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApiHealth {
    pub connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallHealth {
    Healthy,
    Degraded,
    Offline,
}

/// Result of the startup connectivity probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityStatus {
    pub database: DatabaseHealth,
    pub api: ApiHealth,
    pub overall: OverallHealth,
}

impl ConnectivityStatus {
    /// Both reachable is healthy, one is degraded, none is offline.
    pub fn from_parts(database: DatabaseHealth, api: ApiHealth) -> Self {
        let overall = match (database.connected, api.connected) {
            (true, true) => OverallHealth::Healthy,
            (false, false) => OverallHealth::Offline,
            _ => OverallHealth::Degraded,
        };
        Self {
            database,
            api,
            overall,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub ratings_count: u64,
    pub markets_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RatingData {
    pub average_rating: f64,
    pub ratings_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapingResult {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUploadProgress {
    pub is_uploading: bool,
    pub is_processing: bool,
    /// Percent, nominally 0–100.
    pub progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Rating rows are passed through untouched.
pub type StallRating = serde_json::Value;
