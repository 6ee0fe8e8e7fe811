//! Memo domain model.
//!
//! # Invariants
//! - `id` is assigned by storage and never reused while the row exists.
//! - `updated_at_ms` is epoch milliseconds of the last insert or update.

use chrono::{Local, TimeZone};
use serde::Serialize;

/// Storage-assigned memo identifier.
pub type MemoId = i64;

/// Display format for memo update times.
pub const UPDATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Persisted memo row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Memo {
    pub id: MemoId,
    pub title: String,
    pub content: String,
    /// SQLite `CURRENT_TIMESTAMP` text recorded at insert (UTC).
    pub created_at: String,
    pub updated_at_ms: i64,
}

impl Memo {
    /// Formats the update time in local time as `yyyy-MM-dd HH:mm:ss`.
    ///
    /// Returns `None` when the stored value is outside chrono's range.
    pub fn formatted_update_time(&self) -> Option<String> {
        format_epoch_ms(self.updated_at_ms)
    }
}

/// Formats epoch milliseconds with [`UPDATE_TIME_FORMAT`] in local time.
pub fn format_epoch_ms(epoch_ms: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|time| time.format(UPDATE_TIME_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::format_epoch_ms;

    #[test]
    fn formatted_time_has_fixed_shape() {
        let text = format_epoch_ms(1_700_000_000_000).expect("valid timestamp");
        assert_eq!(text.len(), 19);
        assert_eq!(&text[4..5], "-");
        assert_eq!(&text[10..11], " ");
        assert_eq!(&text[13..14], ":");
    }
}
