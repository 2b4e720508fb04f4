use serde::{Deserialize, Serialize};

/// Configuration handed to the client factory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend")]
pub enum StorageConfig {
    /// One `object_store::memory::InMemory` store per bucket, for development and tests
    #[default]
    #[serde(rename = "memory")]
    InMemory,
    #[serde(rename = "s3")]
    S3(S3Config),
}

impl StorageConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("STORAGE_BACKEND").as_deref() {
            None | Some("memory") => Ok(StorageConfig::InMemory),
            Some("s3") => Ok(StorageConfig::S3(S3Config::from_lookup(lookup)?)),
            Some(other) => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Settings for S3 and S3-compatible services
///
/// Unset credentials fall back to the storage library's own resolution
/// (`AWS_*` environment variables, instance metadata).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Config {
    pub region: String,
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    /// Permit plain `http://` endpoints, e.g. a local MinIO
    pub allow_http: bool,
    /// Address buckets as `https://{bucket}.{endpoint}`. With a custom
    /// endpoint the endpoint must already include the bucket.
    pub virtual_hosted_style: bool,
}

pub const DEFAULT_REGION: &str = "us-east-1";

impl Default for S3Config {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            session_token: None,
            allow_http: false,
            virtual_hosted_style: false,
        }
    }
}

impl S3Config {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Default::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    pub fn with_allow_http(mut self, allow_http: bool) -> Self {
        self.allow_http = allow_http;
        self
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region = lookup("AWS_REGION")
            .or_else(|| lookup("S3_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Self {
            region,
            endpoint: lookup("S3_ENDPOINT"),
            access_key_id: lookup("S3_ACCESS_KEY"),
            secret_access_key: lookup("S3_SECRET_KEY"),
            session_token: lookup("S3_SESSION_TOKEN"),
            allow_http: flag(&lookup, "S3_ALLOW_HTTP")?,
            virtual_hosted_style: flag(&lookup, "S3_VIRTUAL_HOSTED_STYLE")?,
        })
    }
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Config")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .field("allow_http", &self.allow_http)
            .field("virtual_hosted_style", &self.virtual_hosted_style)
            .finish()
    }
}

fn flag<F>(lookup: &F, name: &str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(false),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "" | "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                name: name.to_string(),
                value,
            }),
        },
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown storage backend: {0} (expected 'memory' or 's3')")]
    UnknownBackend(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_to_memory() {
        let config = StorageConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorageConfig::InMemory);
    }

    #[test]
    fn test_s3_from_variables() {
        let config = StorageConfig::from_lookup(lookup(&[
            ("STORAGE_BACKEND", "s3"),
            ("AWS_REGION", "eu-west-1"),
            ("S3_ENDPOINT", "http://localhost:9000"),
            ("S3_ACCESS_KEY", "minioadmin"),
            ("S3_SECRET_KEY", "minioadmin"),
            ("S3_ALLOW_HTTP", "true"),
        ]))
        .unwrap();

        let expected = S3Config::new("eu-west-1")
            .with_endpoint("http://localhost:9000")
            .with_credentials("minioadmin", "minioadmin")
            .with_allow_http(true);
        assert_eq!(config, StorageConfig::S3(expected));
    }

    #[test]
    fn test_s3_region_falls_back_to_default() {
        let config = StorageConfig::from_lookup(lookup(&[("STORAGE_BACKEND", "s3")])).unwrap();
        match config {
            StorageConfig::S3(s3) => assert_eq!(s3.region, DEFAULT_REGION),
            other => panic!("Expected S3 config, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_backend_and_bad_flag() {
        assert!(matches!(
            StorageConfig::from_lookup(lookup(&[("STORAGE_BACKEND", "gcs")])),
            Err(ConfigError::UnknownBackend(name)) if name == "gcs"
        ));
        assert!(matches!(
            StorageConfig::from_lookup(lookup(&[
                ("STORAGE_BACKEND", "s3"),
                ("S3_ALLOW_HTTP", "maybe"),
            ])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = S3Config::default().with_credentials("AKIA", "very-secret");
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("AKIA"));
        assert!(!rendered.contains("very-secret"));
    }

    #[test]
    fn test_deserializes_tagged_config() {
        let config: StorageConfig = serde_json::from_value(serde_json::json!({
            "backend": "s3",
            "region": "us-west-2",
            "allow_http": true
        }))
        .unwrap();

        assert_eq!(
            config,
            StorageConfig::S3(S3Config::new("us-west-2").with_allow_http(true))
        );
    }
}
