use futures::future::BoxFuture;
use serde_json::{json, Value};

use crate::{
    domain::models::SignedUrlOptions,
    ports::{Operation, StorageClient},
};

/// Generate a pre-signed URL for reading or writing one object
pub struct GetSignedUrl;

impl Operation for GetSignedUrl {
    const NAME: &'static str = "getSignedUrl";

    type Input = SignedUrlOptions;
    type Output = String;

    fn start_data(input: &SignedUrlOptions) -> Value {
        json!({
            "operation": input.operation,
            "bucket": input.bucket,
            "key": input.key,
        })
    }

    fn success_data(_url: &String) -> Option<Value> {
        None
    }

    fn send<C: StorageClient>(
        client: &C,
        input: SignedUrlOptions,
    ) -> BoxFuture<'_, Result<String, C::Error>> {
        let (request, arguments) = input.into_parts();
        client.presign(request, arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SignedUrlOperation;

    #[test]
    fn test_start_data_names_operation() {
        let options = SignedUrlOptions::new(SignedUrlOperation::Put, "b", "k");
        assert_eq!(
            GetSignedUrl::start_data(&options),
            json!({ "operation": "putObject", "bucket": "b", "key": "k" })
        );
        assert_eq!(GetSignedUrl::success_data(&"https://x".to_string()), None);
    }
}
