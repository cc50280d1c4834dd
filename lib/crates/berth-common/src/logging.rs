//! Error logging that follows the `source()` chain.
//!
//! One event for the error itself, then one `caused by` event per nested
//! cause, all at the same level.

use std::error::Error;

use tracing::Level;

/// Iterate over `err` and every nested cause, outermost first.
pub fn chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

pub fn error_chain(message: &str, err: &(dyn Error + 'static)) {
    log_chain(Level::ERROR, message, err);
}

pub fn warn_chain(message: &str, err: &(dyn Error + 'static)) {
    log_chain(Level::WARN, message, err);
}

pub fn info_chain(message: &str, err: &(dyn Error + 'static)) {
    log_chain(Level::INFO, message, err);
}

fn log_chain(level: Level, message: &str, err: &(dyn Error + 'static)) {
    emit(level, message, err);
    for cause in chain(err).skip(1) {
        emit(level, "caused by", cause);
    }
}

fn emit(level: Level, message: &str, err: &(dyn Error + 'static)) {
    if level == Level::ERROR {
        tracing::error!(error = %err, "{message}");
    } else if level == Level::WARN {
        tracing::warn!(error = %err, "{message}");
    } else if level == Level::INFO {
        tracing::info!(error = %err, "{message}");
    } else if level == Level::DEBUG {
        tracing::debug!(error = %err, "{message}");
    } else {
        tracing::trace!(error = %err, "{message}");
    }
}
