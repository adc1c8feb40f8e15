//! Toast notification records.

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation completed.
    Success,
    /// Operation failed; the message stays generic (causes are logged, not shown).
    Error,
}

/// One entry in the notification queue.
///
/// Entries are identified by a monotonically increasing id so that the
/// auto-dismiss timer removes exactly the entry it was started for, even if
/// the queue was reordered or partially dismissed in the meantime.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}
