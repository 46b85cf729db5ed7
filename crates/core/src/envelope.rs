//! Behavior shared by both envelope designs.

/// Read access common to [`BasicResponse`](crate::BasicResponse) and
/// [`DetailedResponse`](crate::DetailedResponse).
pub trait Envelope {
    fn is_success(&self) -> bool;

    fn message(&self) -> &str;

    /// Machine-readable outcome code, if the design carries one.
    fn code(&self) -> Option<&str> {
        None
    }
}
