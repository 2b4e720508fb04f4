use futures::future::BoxFuture;
use serde_json::Value;

use crate::ports::storage::StorageClient;

/// Port for one wrapped storage operation
///
/// Every wrapper shares the same lifecycle (start event, one client call,
/// success or error event); an `Operation` only supplies what differs: its
/// tag, what to log, and which client method to call.
pub trait Operation: Send + Sync + 'static {
    /// Tag prefix for log events, e.g. `putObject`
    const NAME: &'static str;

    type Input: Send + 'static;
    type Output: Send + 'static;

    /// Payload for the `:start` event. Must never include object bodies.
    fn start_data(input: &Self::Input) -> Value;

    /// Payload for the `:success` event, `None` for no payload
    fn success_data(output: &Self::Output) -> Option<Value>;

    /// Submit the single request this operation makes
    fn send<C: StorageClient>(
        client: &C,
        input: Self::Input,
    ) -> BoxFuture<'_, Result<Self::Output, C::Error>>;
}
