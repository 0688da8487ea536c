//! Per-call timeout and cancellation.
//!
//! The client itself never retries and holds no call state. Callers that
//! need to bound or abort a single request wrap the call future with
//! [`guarded`]. Dropping the inner future aborts the in-flight request.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::ports::{RecipeApiError, RecipeApiResult};

/// Limits applied to a single call.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Give up after this long
    pub timeout: Option<Duration>,
    /// Abort when this token is cancelled
    pub cancel: Option<CancellationToken>,
}

impl CallOptions {
    /// No timeout, no cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Run `call` under the limits in `options`.
///
/// Cancellation wins over completion when both are ready.
pub async fn guarded<T, F>(options: &CallOptions, call: F) -> RecipeApiResult<T>
where
    F: Future<Output = RecipeApiResult<T>>,
{
    let bounded = async {
        match options.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                debug!(?limit, "call exceeded its time limit");
                RecipeApiError::TimedOut
            })?,
            None => call.await,
        }
    };

    match &options.cancel {
        Some(token) => {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!("call cancelled");
                    Err(RecipeApiError::Cancelled)
                }
                result = bounded => result,
            }
        }
        None => bounded.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passes_result_through() {
        let result = guarded(&CallOptions::new(), async { Ok::<_, RecipeApiError>(7) }).await;
        assert_eq!(result, Ok(7));

        let result: RecipeApiResult<()> = guarded(&CallOptions::new(), async {
            Err(RecipeApiError::NotFound {
                resource: "x".to_string(),
            })
        })
        .await;
        assert!(matches!(result, Err(RecipeApiError::NotFound { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out() {
        let options = CallOptions::new().with_timeout(Duration::from_secs(5));
        let result: RecipeApiResult<()> = guarded(&options, std::future::pending()).await;
        assert_eq!(result, Err(RecipeApiError::TimedOut));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_call_beats_timeout() {
        let options = CallOptions::new().with_timeout(Duration::from_secs(5));
        let result = guarded(&options, async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok::<_, RecipeApiError>("done")
        })
        .await;
        assert_eq!(result, Ok("done"));
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let options = CallOptions::new().with_cancellation(token);

        let result = guarded(&options, async { Ok::<_, RecipeApiError>(1) }).await;
        assert_eq!(result, Err(RecipeApiError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancelled_while_pending() {
        let token = CancellationToken::new();
        let options = CallOptions::new().with_cancellation(token.clone());

        let canceller = tokio::spawn(async move {
            tokio::task::yield_now().await;
            token.cancel();
        });

        let result: RecipeApiResult<()> = guarded(&options, std::future::pending()).await;
        canceller.await.unwrap();
        assert_eq!(result, Err(RecipeApiError::Cancelled));
    }
}
