use std::time::Duration;

use http::Method;
use serde::{Deserialize, Serialize};

/// Expiry applied when the caller does not choose one
pub const DEFAULT_SIGNED_URL_EXPIRY: Duration = Duration::from_secs(900);

/// Which request a signed URL authorizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignedUrlOperation {
    #[serde(rename = "getObject")]
    Get,
    #[serde(rename = "putObject")]
    Put,
}

impl SignedUrlOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignedUrlOperation::Get => "getObject",
            SignedUrlOperation::Put => "putObject",
        }
    }
}

impl std::fmt::Display for SignedUrlOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for generating a signed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrlOptions {
    pub operation: SignedUrlOperation,
    pub bucket: String,
    pub key: String,
    pub expires_in: Option<Duration>,
}

impl SignedUrlOptions {
    pub fn new(
        operation: SignedUrlOperation,
        bucket: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            bucket: bucket.into(),
            key: key.into(),
            expires_in: None,
        }
    }

    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = Some(expires_in);
        self
    }

    /// Split into the request template and the arguments passed to the signer
    pub fn into_parts(self) -> (PresignRequest, PresigningArguments) {
        let request = match self.operation {
            SignedUrlOperation::Get => PresignRequest::get_object(self.bucket, self.key),
            SignedUrlOperation::Put => PresignRequest::put_object(self.bucket, self.key),
        };
        let arguments = PresigningArguments {
            expires_in: self.expires_in.unwrap_or(DEFAULT_SIGNED_URL_EXPIRY),
        };
        (request, arguments)
    }
}

/// Request template handed to the signer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignRequest {
    pub method: Method,
    pub bucket: String,
    pub key: String,
}

impl PresignRequest {
    pub fn get_object(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    pub fn put_object(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            method: Method::PUT,
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// Arguments forwarded to the signer as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresigningArguments {
    pub expires_in: Duration,
}

impl Default for PresigningArguments {
    fn default() -> Self {
        Self {
            expires_in: DEFAULT_SIGNED_URL_EXPIRY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_options_select_get_template() {
        let (request, arguments) =
            SignedUrlOptions::new(SignedUrlOperation::Get, "b", "k").into_parts();

        assert_eq!(request, PresignRequest::get_object("b", "k"));
        assert_eq!(request.method, Method::GET);
        assert_eq!(arguments.expires_in, DEFAULT_SIGNED_URL_EXPIRY);
    }

    #[test]
    fn test_write_options_select_put_template() {
        let (request, arguments) = SignedUrlOptions::new(SignedUrlOperation::Put, "b", "k")
            .with_expires_in(Duration::from_secs(3600))
            .into_parts();

        assert_eq!(request.method, Method::PUT);
        assert_eq!(arguments.expires_in, Duration::from_secs(3600));
    }

    #[test]
    fn test_operation_serializes_as_tag() {
        assert_eq!(
            serde_json::to_value(SignedUrlOperation::Get).unwrap(),
            serde_json::json!("getObject")
        );
        assert_eq!(SignedUrlOperation::Put.to_string(), "putObject");
    }
}
