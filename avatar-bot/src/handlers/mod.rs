//! Chain handlers: logging and the dialog entry.

mod dialog_handler;
mod logging_handler;

pub use dialog_handler::DialogHandler;
pub use logging_handler::LoggingHandler;
