//! Top-level failure handling for commands.

use std::future::Future;

use tracing::error;
use tutordesk_core::{AppError, ErrorKind};

use crate::ui::prompt::Prompter;

pub const RETRY_PROMPT: &str = "هل تريد إعادة المحاولة؟";

/// Process exit status for a failure of `kind`.
pub fn exit_status(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Validation => 2,
        ErrorKind::Network => 3,
        ErrorKind::Http | ErrorKind::Decode | ErrorKind::Internal => 1,
    }
}

/// Runs `command` until it succeeds or the user declines a retry, returning
/// the process exit status.
///
/// Each failure is printed as its user-facing message on stderr and logged
/// with its full chain. When `prompter` is `None` (not attached to a terminal)
/// the first failure is final.
pub async fn run_with_boundary<F, Fut>(
    mut prompter: Option<&mut dyn Prompter>,
    mut command: F,
) -> u8
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), AppError>>,
{
    loop {
        let err = match command().await {
            Ok(()) => return 0,
            Err(err) => err,
        };

        error!(
            kind = ?err.kind,
            status = ?err.status,
            error = %err,
            "Command failed"
        );
        eprintln!("❌ {}", err.user_message());

        // Re-submitting the same invalid input cannot succeed.
        if err.kind == ErrorKind::Validation {
            return exit_status(err.kind);
        }

        let retry = match prompter.as_deref_mut() {
            Some(p) => p.confirm(RETRY_PROMPT, false).unwrap_or(false),
            None => false,
        };
        if !retry {
            return exit_status(err.kind);
        }
    }
}
