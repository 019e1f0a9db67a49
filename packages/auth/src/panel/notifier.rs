// ABOUTME: User notification seam for the token panel
// ABOUTME: Implementations must block until the user has seen the message

/// Shows a message to the user and returns once it has been acknowledged.
///
/// Callers rely on the user having read the message before the next step,
/// so implementations should behave like a modal dialog rather than a toast.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
