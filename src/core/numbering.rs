use chrono::Utc;

/// Timestamp-derived invoice identifier generator.
///
/// Identifiers have the form `{prefix}{digits}`, e.g. "INV-482913", where the
/// digits are the trailing `width` digits of a millisecond timestamp.
/// Stamps issued by one generator strictly increase: a timestamp that is not
/// later than the last issued stamp is bumped to `last + 1`.
///
/// Uniqueness holds for sequential use of one generator within one window
/// (10^6 ms at the default width). Concurrent generators may collide.
#[derive(Debug, Clone)]
pub struct InvoiceIdGenerator {
    prefix: String,
    width: u32,
    last_issued: Option<i64>,
}

impl Default for InvoiceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceIdGenerator {
    /// `INV-` prefix, six digits.
    pub fn new() -> Self {
        Self {
            prefix: "INV-".to_string(),
            width: 6,
            last_issued: None,
        }
    }

    /// Continue after a previously issued stamp (e.g. after a restart).
    pub fn resuming_after(last_issued: i64) -> Self {
        Self {
            last_issued: Some(last_issued),
            ..Self::new()
        }
    }

    /// Replace the `INV-` prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the number of timestamp digits kept (clamped to 1..=18).
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width.clamp(1, 18);
        self
    }

    /// Issue an identifier for the current time.
    pub fn next_id(&mut self) -> String {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Issue an identifier for the given millisecond timestamp.
    pub fn next_id_at(&mut self, millis: i64) -> String {
        let stamp = self.next_stamp(millis);
        self.last_issued = Some(stamp);
        self.format(stamp)
    }

    /// Preview the identifier `next_id_at(millis)` would issue.
    pub fn peek_at(&self, millis: i64) -> String {
        self.format(self.next_stamp(millis))
    }

    /// The last issued stamp, if any.
    pub fn last_issued(&self) -> Option<i64> {
        self.last_issued
    }

    fn next_stamp(&self, millis: i64) -> i64 {
        match self.last_issued {
            Some(last) if millis <= last => last.saturating_add(1),
            _ => millis,
        }
    }

    fn format(&self, stamp: i64) -> String {
        let window = 10_i64.pow(self.width);
        format!(
            "{}{:0>width$}",
            self.prefix,
            stamp.rem_euclid(window),
            width = self.width as usize
        )
    }
}
