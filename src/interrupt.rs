//! Operator interrupt handling.
//!
//! Ctrl-C outside the confirmation prompt arrives as SIGINT. The installed
//! handler records the request on a shared flag instead of letting the
//! default disposition kill the process, so the workflow halts at the next
//! step boundary with the distinct interrupted exit. The prompt itself
//! surfaces Ctrl-C through dialoguer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::warn;

/// Shared flag tripped when the operator requests an interrupt.
pub type InterruptFlag = Arc<AtomicBool>;

/// Install the Ctrl-C handler and return the flag it trips.
///
/// Registration fails only if another handler is already installed; the run
/// then falls back to the platform default disposition.
pub fn install_handler() -> InterruptFlag {
    let flag: InterruptFlag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&flag);

    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        warn!("could not install Ctrl-C handler: {}", e);
    }

    flag
}
