#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use object_store_adapter::{
    DeleteObjectInput, DeleteObjectOutput, GetObjectInput, GetObjectOutput, HeadObjectInput,
    HeadObjectOutput, ListObjectsInput, ListObjectsOutput, MemoryLogger, ObjectAttributes,
    ObjectBody, PresignRequest, PresigningArguments, PutObjectInput, PutObjectOutput,
    StorageAdapter, StorageClient,
};

/// Failures the mock can be told to raise
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockError {
    #[error("AccessDenied: {0}")]
    AccessDenied(String),

    #[error("NoSuchKey: {0}")]
    NoSuchKey(String),
}

/// A request as the mock received it
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Put(PutObjectInput),
    Get(GetObjectInput),
    Delete(DeleteObjectInput),
    List(ListObjectsInput),
    Head(HeadObjectInput),
    Presign(PresignRequest, PresigningArguments),
}

/// Client that records every request and answers with canned results
#[derive(Default)]
pub struct MockClient {
    requests: Mutex<Vec<Recorded>>,
    failure: Mutex<Option<MockError>>,
    list_result: Mutex<ListObjectsOutput>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent request fail with `error`
    pub fn failing_with(error: MockError) -> Self {
        let client = Self::default();
        *client.failure.lock().unwrap() = Some(error);
        client
    }

    pub fn with_list_result(self, output: ListObjectsOutput) -> Self {
        *self.list_result.lock().unwrap() = output;
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: Recorded) -> Result<(), MockError> {
        self.requests.lock().unwrap().push(request);
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

pub fn put_result() -> PutObjectOutput {
    PutObjectOutput {
        e_tag: Some("\"e1\"".to_string()),
        version_id: None,
    }
}

pub fn head_result() -> HeadObjectOutput {
    HeadObjectOutput {
        content_length: 2,
        e_tag: Some("\"e1\"".to_string()),
        last_modified: epoch(),
        version_id: None,
        attributes: ObjectAttributes {
            content_type: Some("text/plain".to_string()),
            ..Default::default()
        },
    }
}

pub fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(0, 0).unwrap()
}

#[async_trait]
impl StorageClient for MockClient {
    type Error = MockError;

    async fn put_object(&self, input: PutObjectInput) -> Result<PutObjectOutput, MockError> {
        self.record(Recorded::Put(input))?;
        Ok(put_result())
    }

    async fn get_object(&self, input: GetObjectInput) -> Result<GetObjectOutput, MockError> {
        self.record(Recorded::Get(input))?;
        let head = head_result();
        Ok(GetObjectOutput {
            body: ObjectBody::from(Bytes::from_static(b"hi")),
            content_length: head.content_length,
            content_range: None,
            e_tag: head.e_tag,
            last_modified: head.last_modified,
            version_id: None,
            attributes: head.attributes,
        })
    }

    async fn delete_object(
        &self,
        input: DeleteObjectInput,
    ) -> Result<DeleteObjectOutput, MockError> {
        self.record(Recorded::Delete(input))?;
        Ok(DeleteObjectOutput {})
    }

    async fn list_objects(&self, input: ListObjectsInput) -> Result<ListObjectsOutput, MockError> {
        self.record(Recorded::List(input))?;
        Ok(self.list_result.lock().unwrap().clone())
    }

    async fn head_object(&self, input: HeadObjectInput) -> Result<HeadObjectOutput, MockError> {
        self.record(Recorded::Head(input))?;
        Ok(head_result())
    }

    async fn presign(
        &self,
        request: PresignRequest,
        arguments: PresigningArguments,
    ) -> Result<String, MockError> {
        self.record(Recorded::Presign(request.clone(), arguments))?;
        Ok(format!(
            "https://signer.test/{}/{}?method={}&expires={}",
            request.bucket,
            request.key,
            request.method,
            arguments.expires_in.as_secs()
        ))
    }
}

/// Facade over a mock client, with a recording logger
pub fn mock_adapter(client: MockClient) -> (StorageAdapter<MockClient>, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    let adapter = StorageAdapter::with_client(client, Some(logger.clone()));
    (adapter, logger)
}
