pub mod client;

pub use client::TopicsClient;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tip {
    pub tip_id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default = "default_display_order")]
    pub display_order: i64,
    pub topic_id: i64,
    #[serde(deserialize_with = "api_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "api_timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Topic {
    pub topic_id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub media: Option<Media>,
    /// Server order; the list endpoint may leave this out.
    #[serde(default)]
    pub tips: Vec<Tip>,
    #[serde(default = "default_display_order")]
    pub display_order: i64,
    #[serde(default, rename = "isNew")]
    pub is_new: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub icon: String,
    #[serde(default, rename = "tipCount")]
    pub tip_count: u32,
    #[serde(deserialize_with = "api_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "api_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    /// Number of tips, preferring the embedded list when the server sent one.
    pub fn tip_total(&self) -> usize {
        if self.tips.is_empty() {
            self.tip_count as usize
        } else {
            self.tips.len()
        }
    }
}

/// Body of `POST /api/topics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTopic {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
}

/// Error payload the API sends with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Validation failures carry a list in `detail`; only plain strings are shown.
    pub(crate) fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(detail)) => Some(detail),
            _ => None,
        }
    }
}

fn default_display_order() -> i64 {
    1
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn api_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Accepts RFC 3339 and the offset-less form the API emits, read as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Ok(ts.with_timezone(&Utc)),
        Err(_) => raw.parse::<NaiveDateTime>().map(|ts| ts.and_utc()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn topic_decodes_server_payload() {
        let payload = json!({
            "topic_id": 1001,
            "title": "Project Management",
            "description": null,
            "display_order": 2,
            "isNew": true,
            "icon": "https://api.iconify.design/material-symbols:lightbulb-outline.svg",
            "created_at": "2024-03-15T10:30:00",
            "updated_at": "2024-03-15T10:30:00.123456",
            "tipCount": 3
        });

        let topic: Topic = serde_json::from_value(payload).unwrap();
        assert_eq!(topic.topic_id, 1001);
        assert_eq!(topic.description, "");
        assert!(topic.is_new);
        assert!(topic.tips.is_empty());
        assert_eq!(topic.tip_total(), 3);
        assert_eq!(topic.created_at.to_rfc3339(), "2024-03-15T10:30:00+00:00");
    }

    #[test]
    fn topic_keeps_tip_order_as_received() {
        let payload = json!({
            "topic_id": 42,
            "title": "Onboarding",
            "description": "First steps",
            "media": { "type": "image", "url": "http://x/y.png" },
            "tips": [
                {
                    "tip_id": 7, "title": "Second", "description": "b",
                    "display_order": 2, "topic_id": 42,
                    "created_at": "2024-03-15T10:30:00Z",
                    "updated_at": "2024-03-15T10:30:00Z"
                },
                {
                    "tip_id": 3, "title": "First", "description": "a",
                    "display_order": 1, "topic_id": 42,
                    "media": { "type": "video", "url": "http://x/v.mp4", "alt_text": "demo" },
                    "created_at": "2024-03-15T10:30:00+02:00",
                    "updated_at": "2024-03-15T10:30:00+02:00"
                }
            ],
            "created_at": "2024-03-15T10:30:00",
            "updated_at": "2024-03-15T10:30:00"
        });

        let topic: Topic = serde_json::from_value(payload).unwrap();
        let ids: Vec<i64> = topic.tips.iter().map(|t| t.tip_id).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(topic.tip_total(), 2);
        assert_eq!(topic.media.unwrap().alt_text, None);
        assert_eq!(topic.tips[1].media.as_ref().unwrap().alt_text.as_deref(), Some("demo"));
        assert_eq!(topic.tips[1].created_at.to_rfc3339(), "2024-03-15T08:30:00+00:00");
    }

    #[test]
    fn new_topic_omits_absent_media() {
        let body = NewTopic {
            title: "A".to_string(),
            description: "B".to_string(),
            media: None,
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"title": "A", "description": "B"}));
    }

    #[test]
    fn error_body_only_surfaces_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Topic not found"}"#).unwrap();
        assert_eq!(body.into_detail().as_deref(), Some("Topic not found"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","title"],"msg":"field required"}]}"#).unwrap();
        assert_eq!(body.into_detail(), None);

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_detail(), None);
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
