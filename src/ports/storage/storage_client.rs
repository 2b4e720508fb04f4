use async_trait::async_trait;

use crate::domain::models::{
    DeleteObjectInput, DeleteObjectOutput, GetObjectInput, GetObjectOutput, HeadObjectInput,
    HeadObjectOutput, ListObjectsInput, ListObjectsOutput, PresignRequest, PresigningArguments,
    PutObjectInput, PutObjectOutput,
};

/// Port for the remote object-storage client handle
///
/// Each method submits exactly one request. Implementations own connection
/// reuse, signing and retry policy; callers only see the result or the
/// implementation's own error.
#[async_trait]
pub trait StorageClient: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn put_object(&self, input: PutObjectInput) -> Result<PutObjectOutput, Self::Error>;

    async fn get_object(&self, input: GetObjectInput) -> Result<GetObjectOutput, Self::Error>;

    async fn delete_object(
        &self,
        input: DeleteObjectInput,
    ) -> Result<DeleteObjectOutput, Self::Error>;

    /// Fetch a single page of keys
    async fn list_objects(&self, input: ListObjectsInput)
        -> Result<ListObjectsOutput, Self::Error>;

    async fn head_object(&self, input: HeadObjectInput) -> Result<HeadObjectOutput, Self::Error>;

    /// Produce a pre-signed URL for the given request template
    async fn presign(
        &self,
        request: PresignRequest,
        arguments: PresigningArguments,
    ) -> Result<String, Self::Error>;
}
