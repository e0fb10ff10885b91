//! Wire-format models for the NGSIv2 API.
//!
//! Field names follow the broker's camelCase JSON. Every record is a
//! plain value object: deserialized from a response (or a local YAML
//! definition for creates), never mutated afterwards. `None` fields are
//! skipped on serialization so create payloads stay minimal -- the
//! broker rejects server-assigned fields like `id` in request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Shared pieces ────────────────────────────────────────────────────

/// Entity matcher used by both subscription subjects and registration
/// data-provided blocks: exactly one of `id` / `id_pattern` plus a type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityMatcher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(
        rename = "idPattern",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id_pattern: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

// ── Subscription ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subscription {
    /// Server-assigned identifier; absent in create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub subject: Subject,

    #[serde(default)]
    pub notification: Notification,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttling: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntityMatcher>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expression {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<NotificationHttp>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,

    #[serde(
        rename = "attrsFormat",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attrs_format: Option<String>,

    #[serde(
        rename = "onlyChangedAttrs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub only_changed_attrs: Option<bool>,

    // Server-maintained delivery counters; absent in create payloads
    // parsed from local files, so they serialize away naturally.
    #[serde(rename = "lastFailure", default, skip_serializing_if = "Option::is_none")]
    pub last_failure: Option<DateTime<Utc>>,

    #[serde(rename = "lastFailureReason", default, skip_serializing_if = "Option::is_none")]
    pub last_failure_reason: Option<String>,

    #[serde(rename = "lastNotification", default, skip_serializing_if = "Option::is_none")]
    pub last_notification: Option<DateTime<Utc>>,

    #[serde(rename = "lastSuccess", default, skip_serializing_if = "Option::is_none")]
    pub last_success: Option<DateTime<Utc>>,

    #[serde(rename = "lastSuccessCode", default, skip_serializing_if = "Option::is_none")]
    pub last_success_code: Option<i64>,

    #[serde(rename = "timesSent", default, skip_serializing_if = "Option::is_none")]
    pub times_sent: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationHttp {
    pub url: String,
}

// ── Registration ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registration {
    /// Server-assigned identifier; absent in create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "dataProvided", default)]
    pub data_provided: DataProvided,

    #[serde(default)]
    pub provider: Provider,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataProvided {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntityMatcher>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<ProviderHttp>,

    #[serde(
        rename = "legacyForwarding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub legacy_forwarding: Option<bool>,

    #[serde(
        rename = "supportedForwardingMode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub supported_forwarding_mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderHttp {
    pub url: String,
}

// ── Version ──────────────────────────────────────────────────────────

/// `GET /version` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub orion: OrionVersion,
}

/// Broker build metadata. The broker already uses snake_case here,
/// unlike the rest of the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrionVersion {
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub uptime: String,

    #[serde(default)]
    pub git_hash: String,

    #[serde(default)]
    pub compile_time: String,

    #[serde(default)]
    pub compiled_by: String,

    #[serde(default)]
    pub compiled_in: String,

    #[serde(default)]
    pub release_date: String,

    #[serde(default)]
    pub machine: String,

    #[serde(default)]
    pub doc: String,
}
