use futures::future::BoxFuture;
use serde_json::{json, Value};

use crate::{
    domain::models::{ListObjectsInput, ListObjectsOutput},
    ports::{Operation, StorageClient},
};

/// List one page of keys in a bucket
///
/// Following `next_continuation_token` across pages is left to the caller.
pub struct ListObjects;

impl Operation for ListObjects {
    const NAME: &'static str = "listObjects";

    type Input = ListObjectsInput;
    type Output = ListObjectsOutput;

    fn start_data(input: &ListObjectsInput) -> Value {
        json!({ "Bucket": input.bucket, "Prefix": input.prefix })
    }

    // Only the count; a page can hold a thousand entries
    fn success_data(output: &ListObjectsOutput) -> Option<Value> {
        Some(json!({ "KeyCount": output.key_count }))
    }

    fn send<C: StorageClient>(
        client: &C,
        input: ListObjectsInput,
    ) -> BoxFuture<'_, Result<ListObjectsOutput, C::Error>> {
        client.list_objects(input)
    }
}
