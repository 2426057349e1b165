use std::future::Future;
use std::time::Duration;
use vakfinder_core::{Error, Result};

/// Run one store call under `timeout`.
///
/// Any failure of the call, including expiry, is reported as
/// `StoreUnavailable` so callers can tell an outage from an empty result.
pub(crate) async fn bounded<T, F>(timeout: Duration, what: &str, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e @ Error::StoreUnavailable(_))) => Err(e),
        Ok(Err(e)) => Err(Error::StoreUnavailable(format!("{what}: {e}"))),
        Err(_) => {
            tracing::warn!(?timeout, "{what} timed out");
            Err(Error::StoreUnavailable(format!("{what} timed out after {timeout:?}")))
        }
    }
}
