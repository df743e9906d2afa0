//! Error handler for the polling update listener.

use futures::future::BoxFuture;
use teloxide::{error_handlers::ErrorHandler, ApiError, RequestError};
use tracing::error;

/// Logs polling errors. An invalid token terminates the process with exit code 1 so the
/// supervisor does not restart it into the same failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct PollingErrorHandler;

/// True for errors that polling can never recover from.
pub(crate) fn is_fatal(error: &RequestError) -> bool {
    matches!(error, RequestError::Api(ApiError::InvalidToken))
}

impl ErrorHandler<RequestError> for PollingErrorHandler {
    fn handle_error(self: std::sync::Arc<Self>, error: RequestError) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            if is_fatal(&error) {
                error!(error = %error, "Invalid bot token, shutting down");
                std::process::exit(1);
            }
            error!(error = %error, "Polling error");
        })
    }
}
