use std::collections::HashMap;
use std::ops::Range;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::ObjectBody;

/// Content headers and user metadata stored alongside an object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_control: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_language: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// Request to store an object
#[derive(Debug, Clone, PartialEq)]
pub struct PutObjectInput {
    pub bucket: String,
    pub key: String,
    pub body: Bytes,
    pub attributes: ObjectAttributes,
}

impl PutObjectInput {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            body: body.into(),
            attributes: ObjectAttributes::default(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.attributes.content_type = Some(content_type.into());
        self
    }

    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.metadata.insert(name.into(), value.into());
        self
    }
}

/// Result of storing an object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutObjectOutput {
    #[serde(rename = "ETag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

/// Request to fetch an object's content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetObjectInput {
    pub bucket: String,
    pub key: String,
    /// Byte range to fetch, end exclusive
    pub range: Option<Range<u64>>,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<DateTime<Utc>>,
    pub if_unmodified_since: Option<DateTime<Utc>>,
    pub version_id: Option<String>,
}

impl GetObjectInput {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_range(mut self, range: Range<u64>) -> Self {
        self.range = Some(range);
        self
    }
}

/// Fetched object: metadata plus a streaming body
///
/// The body is never serialized, so the value can be logged safely.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetObjectOutput {
    #[serde(skip)]
    pub body: ObjectBody,
    pub content_length: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_range: Option<String>,
    #[serde(rename = "ETag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    pub last_modified: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(flatten)]
    pub attributes: ObjectAttributes,
}

/// Request to delete an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteObjectInput {
    pub bucket: String,
    pub key: String,
}

impl DeleteObjectInput {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// Result of deleting an object. The service reports nothing beyond success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteObjectOutput {}

/// Request for object metadata without the body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadObjectInput {
    pub bucket: String,
    pub key: String,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    pub version_id: Option<String>,
}

impl HeadObjectInput {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }
}

/// Object metadata returned by a head request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeadObjectOutput {
    pub content_length: u64,
    #[serde(rename = "ETag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    pub last_modified: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(flatten)]
    pub attributes: ObjectAttributes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_input_builder() {
        let input = PutObjectInput::new("b1", "f.txt", "hi")
            .with_content_type("text/markdown")
            .with_metadata("x-request-id", "abc");

        assert_eq!(input.body, Bytes::from_static(b"hi"));
        assert_eq!(input.attributes.content_type.as_deref(), Some("text/markdown"));
        assert_eq!(
            input.attributes.metadata.get("x-request-id").map(String::as_str),
            Some("abc")
        );
    }

    #[test]
    fn test_get_output_serializes_without_body() {
        let output = GetObjectOutput {
            body: ObjectBody::from("secret payload"),
            content_length: 14,
            content_range: None,
            e_tag: Some("\"abc\"".to_string()),
            last_modified: DateTime::<Utc>::UNIX_EPOCH,
            version_id: None,
            attributes: ObjectAttributes {
                content_type: Some("text/plain".to_string()),
                ..Default::default()
            },
        };

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["ContentLength"], json!(14));
        assert_eq!(value["ETag"], json!("\"abc\""));
        assert_eq!(value["ContentType"], json!("text/plain"));
        assert!(!value.to_string().contains("secret payload"));
    }
}
