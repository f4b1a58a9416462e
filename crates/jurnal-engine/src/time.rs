//! `id-ID` timestamp rendering at a fixed UTC offset.

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

use crate::label::PLACEHOLDER;

const BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Asia/Jakarta.
pub const DEFAULT_OFFSET_MINUTES: i32 = 7 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampFormat {
    offset: FixedOffset,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self::from_offset_minutes(DEFAULT_OFFSET_MINUTES)
    }
}

impl TimestampFormat {
    /// Offsets outside ±24h fall back to UTC.
    pub fn from_offset_minutes(minutes: i32) -> Self {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local wall-clock time for `at`.
    pub fn local(&self, at: DateTime<Utc>) -> DateTime<FixedOffset> {
        at.with_timezone(&self.offset)
    }

    /// "17 Agustus 2025 pukul 14.30"; absent timestamps render as the placeholder.
    pub fn format(&self, at: Option<DateTime<Utc>>) -> String {
        match at {
            None => PLACEHOLDER.to_string(),
            Some(at) => {
                let local = self.local(at);
                format!(
                    "{} pukul {:02}.{:02}",
                    self.date_of(&local),
                    local.hour(),
                    local.minute()
                )
            }
        }
    }

    /// "17 Agustus 2025".
    pub fn format_date(&self, at: Option<DateTime<Utc>>) -> String {
        match at {
            None => PLACEHOLDER.to_string(),
            Some(at) => self.date_of(&self.local(at)),
        }
    }

    fn date_of(&self, local: &DateTime<FixedOffset>) -> String {
        let month = BULAN[local.month0() as usize];
        format!("{} {} {}", local.day(), month, local.year())
    }
}
