//! Transient user notifications (the shell's toast/snackbar seam).

use std::future::Future;

use client::ClientError;
use tracing::{error, info, warn};

/// Sink for transient user-facing notifications.
///
/// The console shell implements this with its toast bar; the headless
/// binary and tests use [`LogNotifier`].
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that routes messages through tracing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!(notification = message, "notification");
    }

    fn error(&self, message: &str) {
        warn!(notification = message, "notification");
    }
}

/// Runs a destructive action (delete, revoke, regenerate).
///
/// Failures are logged and surfaced as a transient notification rather
/// than a persistent form error; recovery is the user re-triggering the
/// action.
pub async fn run_destructive<T, N, Fut>(
    notifier: &N,
    description: &str,
    action: Fut,
) -> Option<T>
where
    N: Notifier,
    Fut: Future<Output = Result<T, ClientError>>,
{
    match action.await {
        Ok(value) => Some(value),
        Err(err) => {
            error!(action = description, error = %err, "destructive action failed");
            notifier.error(&format!("Failed to {}", description));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        errors: Mutex<Vec<String>>,
        successes: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.successes.lock().unwrap().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    #[tokio::test]
    async fn test_destructive_success_passes_value_through() {
        let notifier = RecordingNotifier::default();

        let result =
            run_destructive(&notifier, "revoke permission", async { Ok::<_, ClientError>(42) })
                .await;

        assert_eq!(result, Some(42));
        assert!(notifier.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_destructive_failure_notifies() {
        let notifier = RecordingNotifier::default();

        let result: Option<()> = run_destructive(&notifier, "revoke permission", async {
            Err(ClientError::MissingData)
        })
        .await;

        assert_eq!(result, None);
        let errors = notifier.errors.lock().unwrap();
        assert_eq!(errors.as_slice(), ["Failed to revoke permission"]);
    }
}
