use chrono::{NaiveDateTime, TimeDelta};

/// Timestamp format of the HOST_START / HOST_END host properties,
/// e.g. `Thu Feb 25 10:51:04 2021`
pub const HOST_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Parses a HOST_START / HOST_END value; unparsable values count as absent
pub fn parse_host_timestamp(raw: &str) -> Option<NaiveDateTime> {
    // Single-digit days are space padded by some producers ("Mar  3")
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDateTime::parse_from_str(&normalized, HOST_TIMESTAMP_FORMAT).ok()
}

/// Formats a duration as `H:MM:SS`; hours are not wrapped at 24
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Start and (optional) end of a scan, for one host or a whole file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
}

impl ScanWindow {
    pub fn new(start: NaiveDateTime, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    /// End minus start; `None` while the end is unknown
    pub fn elapsed(&self) -> Option<TimeDelta> {
        self.end.map(|end| end - self.start)
    }

    pub fn elapsed_display(&self) -> Option<String> {
        self.elapsed().map(format_elapsed)
    }

    /// Widens the window to cover `other` (earliest start, latest end)
    ///
    /// Commutative and associative, so host windows can be reduced in any order.
    pub fn merge(self, other: ScanWindow) -> ScanWindow {
        ScanWindow {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
