//! S3 store construction using the object_store crate

use object_store::aws::{AmazonS3, AmazonS3Builder};

use crate::{config::S3Config, domain::value_objects::BucketName};

/// Build an S3 store for a single bucket.
///
/// Starts from the `AWS_*` environment so credential resolution stays with
/// object_store; explicit configuration values take precedence. No request
/// is sent until the store is used.
pub fn build_s3_store(
    config: &S3Config,
    bucket: &BucketName,
) -> Result<AmazonS3, object_store::Error> {
    let mut builder = AmazonS3Builder::from_env()
        .with_bucket_name(bucket.as_str())
        .with_region(&config.region)
        .with_allow_http(config.allow_http)
        .with_virtual_hosted_style_request(config.virtual_hosted_style);

    if let Some(endpoint) = &config.endpoint {
        builder = builder.with_endpoint(endpoint);
    }

    if let Some(access_key) = &config.access_key_id {
        builder = builder.with_access_key_id(access_key);
    }

    if let Some(secret_key) = &config.secret_access_key {
        builder = builder.with_secret_access_key(secret_key);
    }

    if let Some(token) = &config.session_token {
        builder = builder.with_token(token);
    }

    builder.build()
}
