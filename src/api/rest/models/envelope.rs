use serde::Deserialize;

/// The `{"status": …, "result": …}` wrapper the API puts around read
/// responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    result: T,
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> T {
        self.result
    }
}
