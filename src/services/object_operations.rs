use futures::future::BoxFuture;
use serde_json::{json, Value};

use crate::{
    domain::models::{
        DeleteObjectInput, DeleteObjectOutput, GetObjectInput, GetObjectOutput, HeadObjectInput,
        HeadObjectOutput, PutObjectInput, PutObjectOutput,
    },
    ports::{Operation, StorageClient},
};

fn bucket_and_key(bucket: &str, key: &str) -> Value {
    json!({ "Bucket": bucket, "Key": key })
}

/// Store an object
pub struct PutObject;

impl Operation for PutObject {
    const NAME: &'static str = "putObject";

    type Input = PutObjectInput;
    type Output = PutObjectOutput;

    fn start_data(input: &PutObjectInput) -> Value {
        bucket_and_key(&input.bucket, &input.key)
    }

    fn success_data(output: &PutObjectOutput) -> Option<Value> {
        serde_json::to_value(output).ok()
    }

    fn send<C: StorageClient>(
        client: &C,
        input: PutObjectInput,
    ) -> BoxFuture<'_, Result<PutObjectOutput, C::Error>> {
        client.put_object(input)
    }
}

/// Fetch an object's content and metadata
pub struct GetObject;

impl Operation for GetObject {
    const NAME: &'static str = "getObject";

    type Input = GetObjectInput;
    type Output = GetObjectOutput;

    fn start_data(input: &GetObjectInput) -> Value {
        bucket_and_key(&input.bucket, &input.key)
    }

    // The body stream is skipped by the serializer
    fn success_data(output: &GetObjectOutput) -> Option<Value> {
        serde_json::to_value(output).ok()
    }

    fn send<C: StorageClient>(
        client: &C,
        input: GetObjectInput,
    ) -> BoxFuture<'_, Result<GetObjectOutput, C::Error>> {
        client.get_object(input)
    }
}

/// Delete an object
pub struct DeleteObject;

impl Operation for DeleteObject {
    const NAME: &'static str = "deleteObject";

    type Input = DeleteObjectInput;
    type Output = DeleteObjectOutput;

    fn start_data(input: &DeleteObjectInput) -> Value {
        bucket_and_key(&input.bucket, &input.key)
    }

    fn success_data(output: &DeleteObjectOutput) -> Option<Value> {
        serde_json::to_value(output).ok()
    }

    fn send<C: StorageClient>(
        client: &C,
        input: DeleteObjectInput,
    ) -> BoxFuture<'_, Result<DeleteObjectOutput, C::Error>> {
        client.delete_object(input)
    }
}

/// Fetch object metadata without the body
pub struct HeadObject;

impl Operation for HeadObject {
    const NAME: &'static str = "headObject";

    type Input = HeadObjectInput;
    type Output = HeadObjectOutput;

    fn start_data(input: &HeadObjectInput) -> Value {
        bucket_and_key(&input.bucket, &input.key)
    }

    fn success_data(output: &HeadObjectOutput) -> Option<Value> {
        serde_json::to_value(output).ok()
    }

    fn send<C: StorageClient>(
        client: &C,
        input: HeadObjectInput,
    ) -> BoxFuture<'_, Result<HeadObjectOutput, C::Error>> {
        client.head_object(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_start_data_omits_body() {
        let input = PutObjectInput::new("b1", "f.txt", "hi").with_metadata("x-request-id", "r1");
        assert_eq!(
            PutObject::start_data(&input),
            json!({ "Bucket": "b1", "Key": "f.txt" })
        );
    }

    #[test]
    fn test_put_success_data_is_full_result() {
        let output = PutObjectOutput {
            e_tag: Some("\"e1\"".to_string()),
            version_id: None,
        };
        assert_eq!(
            PutObject::success_data(&output),
            Some(json!({ "ETag": "\"e1\"" }))
        );
    }

    #[test]
    fn test_delete_success_data_is_empty_object() {
        assert_eq!(
            DeleteObject::success_data(&DeleteObjectOutput::default()),
            Some(json!({}))
        );
    }
}
