use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use object_store::{
    memory::InMemory, path::Path as ObjectPath, signer::Signer, Attribute, Attributes,
    GetOptions, GetRange, GetResult, ObjectStore as ObjectStoreBackend, PutOptions, PutPayload,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    adapters::outbound::storage::{listing, s3::build_s3_store},
    config::StorageConfig,
    domain::{
        errors::{StorageError, StorageResult},
        models::{
            DeleteObjectInput, DeleteObjectOutput, GetObjectInput, GetObjectOutput,
            HeadObjectInput, HeadObjectOutput, ListObjectsInput, ListObjectsOutput,
            ObjectAttributes, ObjectBody, PresignRequest, PresigningArguments, PutObjectInput,
            PutObjectOutput,
        },
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::StorageClient,
};

#[derive(Clone)]
struct BucketStore {
    store: Arc<dyn ObjectStoreBackend>,
    signer: Option<Arc<dyn Signer>>,
}

/// Client handle backed by the object_store crate
///
/// object_store binds a store to one bucket, so the handle keeps one store
/// per bucket, built on first use and reused afterwards.
pub struct ObjectStoreClient {
    config: StorageConfig,
    stores: RwLock<HashMap<String, BucketStore>>,
}

impl ObjectStoreClient {
    /// Create a client. Nothing is validated or contacted until the first request.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            stores: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// The underlying store for a bucket, for operations the adapter does not wrap
    pub async fn store(&self, bucket: &str) -> StorageResult<Arc<dyn ObjectStoreBackend>> {
        Ok(self.bucket(bucket).await?.store)
    }

    /// Store for a bucket, built and cached on first use
    async fn bucket(&self, bucket: &str) -> StorageResult<BucketStore> {
        if let Some(store) = self.stores.read().await.get(bucket) {
            return Ok(store.clone());
        }

        let built = self.build_store(&bucket_name(bucket)?)?;

        let mut stores = self.stores.write().await;
        Ok(stores.entry(bucket.to_string()).or_insert(built).clone())
    }

    /// Store for a request that never writes.
    ///
    /// An in-memory bucket that was never written to is empty, so it is
    /// served from a throwaway store instead of being cached.
    async fn readable_bucket(&self, bucket: &str) -> StorageResult<BucketStore> {
        if let Some(store) = self.stores.read().await.get(bucket) {
            return Ok(store.clone());
        }

        match self.config {
            StorageConfig::InMemory => {
                bucket_name(bucket)?;
                Ok(BucketStore {
                    store: Arc::new(InMemory::new()),
                    signer: None,
                })
            }
            StorageConfig::S3(_) => self.bucket(bucket).await,
        }
    }

    fn build_store(&self, bucket: &BucketName) -> StorageResult<BucketStore> {
        match &self.config {
            StorageConfig::InMemory => {
                debug!(bucket = %bucket, "creating in-memory store");
                Ok(BucketStore {
                    store: Arc::new(InMemory::new()),
                    signer: None,
                })
            }
            StorageConfig::S3(config) => {
                debug!(bucket = %bucket, region = %config.region, "creating S3 store");
                let store = Arc::new(build_s3_store(config, bucket).map_err(|source| {
                    StorageError::Configuration {
                        bucket: bucket.to_string(),
                        source,
                    }
                })?);
                Ok(BucketStore {
                    store: store.clone(),
                    signer: Some(store),
                })
            }
        }
    }
}

fn bucket_name(bucket: &str) -> StorageResult<BucketName> {
    BucketName::new(bucket.to_string()).map_err(|reason| StorageError::InvalidBucketName {
        bucket: bucket.to_string(),
        reason,
    })
}

fn object_path(key: &str) -> StorageResult<ObjectPath> {
    let key = ObjectKey::new(key.to_string()).map_err(|reason| StorageError::InvalidObjectKey {
        key: key.to_string(),
        reason,
    })?;
    Ok(ObjectPath::parse(key.as_str()).map_err(object_store::Error::from)?)
}

fn to_attributes(attributes: ObjectAttributes) -> Attributes {
    let mut out = Attributes::new();

    let headers = [
        (Attribute::ContentType, attributes.content_type),
        (Attribute::CacheControl, attributes.cache_control),
        (Attribute::ContentDisposition, attributes.content_disposition),
        (Attribute::ContentEncoding, attributes.content_encoding),
        (Attribute::ContentLanguage, attributes.content_language),
    ];
    for (attribute, value) in headers {
        if let Some(value) = value {
            out.insert(attribute, value.into());
        }
    }

    for (name, value) in attributes.metadata {
        out.insert(Attribute::Metadata(name.into()), value.into());
    }

    out
}

fn from_attributes(attributes: &Attributes) -> ObjectAttributes {
    let mut out = ObjectAttributes::default();

    for (attribute, value) in attributes.iter() {
        let value = value.to_string();
        match attribute {
            Attribute::ContentType => out.content_type = Some(value),
            Attribute::CacheControl => out.cache_control = Some(value),
            Attribute::ContentDisposition => out.content_disposition = Some(value),
            Attribute::ContentEncoding => out.content_encoding = Some(value),
            Attribute::ContentLanguage => out.content_language = Some(value),
            Attribute::Metadata(name) => {
                out.metadata.insert(name.to_string(), value);
            }
            _ => {}
        }
    }

    out
}

#[async_trait]
impl StorageClient for ObjectStoreClient {
    type Error = StorageError;

    async fn put_object(&self, input: PutObjectInput) -> StorageResult<PutObjectOutput> {
        let store = self.bucket(&input.bucket).await?.store;
        let path = object_path(&input.key)?;

        let mut options = PutOptions::default();
        options.attributes = to_attributes(input.attributes);

        let result = store
            .put_opts(&path, PutPayload::from(input.body), options)
            .await?;

        Ok(PutObjectOutput {
            e_tag: result.e_tag,
            version_id: result.version,
        })
    }

    async fn get_object(&self, input: GetObjectInput) -> StorageResult<GetObjectOutput> {
        let store = self.readable_bucket(&input.bucket).await?.store;
        let path = object_path(&input.key)?;
        let ranged = input.range.is_some();

        let mut options = GetOptions::default();
        options.range = input.range.map(GetRange::Bounded);
        options.if_match = input.if_match;
        options.if_none_match = input.if_none_match;
        options.if_modified_since = input.if_modified_since;
        options.if_unmodified_since = input.if_unmodified_since;
        options.version = input.version_id;

        let result = store.get_opts(&path, options).await?;
        let meta = result.meta.clone();
        let range = result.range.clone();
        let attributes = from_attributes(&result.attributes);

        let content_range = ranged.then(|| {
            format!(
                "bytes {}-{}/{}",
                range.start,
                range.end.saturating_sub(1),
                meta.size
            )
        });
        let body = ObjectBody::from_stream(result.into_stream().map_err(io::Error::other));

        Ok(GetObjectOutput {
            body,
            content_length: range.end - range.start,
            content_range,
            e_tag: meta.e_tag,
            last_modified: meta.last_modified,
            version_id: meta.version,
            attributes,
        })
    }

    async fn delete_object(&self, input: DeleteObjectInput) -> StorageResult<DeleteObjectOutput> {
        let store = self.readable_bucket(&input.bucket).await?.store;
        let path = object_path(&input.key)?;

        store.delete(&path).await?;

        Ok(DeleteObjectOutput {})
    }

    async fn list_objects(&self, input: ListObjectsInput) -> StorageResult<ListObjectsOutput> {
        let store = self.readable_bucket(&input.bucket).await?.store;
        listing::list_page(store.as_ref(), input).await
    }

    async fn head_object(&self, input: HeadObjectInput) -> StorageResult<HeadObjectOutput> {
        let store = self.readable_bucket(&input.bucket).await?.store;
        let path = object_path(&input.key)?;

        let mut options = GetOptions::default();
        options.head = true;
        options.if_match = input.if_match;
        options.if_none_match = input.if_none_match;
        options.version = input.version_id;

        let GetResult {
            meta, attributes, ..
        } = store.get_opts(&path, options).await?;

        Ok(HeadObjectOutput {
            content_length: meta.size,
            e_tag: meta.e_tag,
            last_modified: meta.last_modified,
            version_id: meta.version,
            attributes: from_attributes(&attributes),
        })
    }

    async fn presign(
        &self,
        request: PresignRequest,
        arguments: PresigningArguments,
    ) -> StorageResult<String> {
        let bucket = self.readable_bucket(&request.bucket).await?;
        let path = object_path(&request.key)?;

        let signer = bucket
            .signer
            .ok_or_else(|| StorageError::UnsupportedOperation {
                operation: "presign".to_string(),
                reason: "in-memory stores cannot sign URLs".to_string(),
            })?;

        let url = signer
            .signed_url(request.method, &path, arguments.expires_in)
            .await?;

        Ok(url.to_string())
    }
}
