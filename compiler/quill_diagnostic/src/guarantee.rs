//! Proof that an error was reported.

/// Zero-sized proof that at least one error diagnostic was emitted.
///
/// The only ways to obtain one are [`DiagnosticQueue::emit_error`] and
/// [`ErrorGuaranteed::from_error_count`] with a non-zero count, so a function
/// returning `Result<_, ErrorGuaranteed>` cannot fail silently.
///
/// [`DiagnosticQueue::emit_error`]: crate::queue::DiagnosticQueue::emit_error
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    /// Only the queue mints guarantees directly.
    pub(crate) fn new_unchecked() -> Self {
        ErrorGuaranteed(())
    }

    /// Produce a guarantee from an error count gathered elsewhere.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new_unchecked)
    }
}
