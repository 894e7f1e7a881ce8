//! Cancellation flag shared between the Ctrl+C handler and the rename loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable flag that stops a run between two files.
///
/// Cancelling never interrupts a rename that is already in progress; each
/// rename is atomic on its own, so a cancelled run leaves a prefix of the
/// candidates renamed and the rest untouched.
///
/// # Examples
///
/// ```
/// use namescrub::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handler_side = token.clone();
/// assert!(!token.is_cancelled());
///
/// handler_side.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the token (and every clone of it) as cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether `cancel()` has been called on this token or any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
