//! Shared utilities for use cases.
//!
//! Cancellation checking and cancellable awaits used by the task executor,
//! the conversational fallback, and the dispatcher.

use crate::use_cases::dispatch_chat::DispatchError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(DispatchError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), DispatchError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(DispatchError::Cancelled);
    }
    Ok(())
}

/// Await `future`, returning `Cancelled` as soon as the token fires.
pub(crate) async fn cancellable<T, E, F>(
    token: &Option<CancellationToken>,
    future: F,
) -> Result<T, DispatchError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<DispatchError>,
{
    check_cancelled(token)?;
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(DispatchError::Cancelled),
            result = future => result.map_err(Into::into),
        },
        None => future.await.map_err(Into::into),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_cancelled() {
        assert!(check_cancelled(&None).is_ok());

        let token = CancellationToken::new();
        assert!(check_cancelled(&Some(token.clone())).is_ok());
        token.cancel();
        assert!(matches!(
            check_cancelled(&Some(token)),
            Err(DispatchError::Cancelled)
        ));
    }

    #[tokio::test]
    async fn test_cancellable_returns_when_cancelled() {
        let token = CancellationToken::new();
        let trigger = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            trigger.cancel();
        });

        let result: Result<(), DispatchError> = cancellable(&Some(token), async {
            std::future::pending::<Result<(), DispatchError>>().await
        })
        .await;
        assert!(matches!(result, Err(DispatchError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancellable_passes_result_through() {
        let result = cancellable(&None, async { Ok::<_, DispatchError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }
}
