//! # Transaction History
//!
//! The append-only record of submitted executions, newest first,
//! bounded to the 50 most recent entries. Insertion silently truncates
//! the tail — the history is a convenience view, not an audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use zka_core::TransactionId;

/// Maximum entries kept in any session history.
pub const HISTORY_LIMIT: usize = 50;

/// Status of a submitted transaction.
///
/// The stack never polls for confirmation — bounding and tracking
/// finality is the explorer's job — so `Submitted` is the only state a
/// history entry ever reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    /// Accepted by the wallet and broadcast.
    Submitted,
}

/// One submitted execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxRecord {
    /// Opaque transaction identifier, echoed verbatim.
    pub id: TransactionId,
    /// The transition function that was executed.
    pub function_name: String,
    /// When the wallet accepted the submission.
    pub submitted_at: DateTime<Utc>,
    /// Submission status.
    pub status: TxStatus,
}

impl TxRecord {
    /// A freshly-submitted entry.
    pub fn submitted(
        id: TransactionId,
        function_name: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            function_name: function_name.into(),
            submitted_at,
            status: TxStatus::Submitted,
        }
    }
}

/// Insert at the head and truncate to [`HISTORY_LIMIT`].
pub(crate) fn push_bounded<T>(history: &mut Vec<T>, entry: T) {
    history.insert(0, entry);
    history.truncate(HISTORY_LIMIT);
}
