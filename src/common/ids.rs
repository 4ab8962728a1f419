use std::time::{SystemTime, UNIX_EPOCH};

/// Issues the opaque time-based ids used by entries and parties: decimal
/// milliseconds since the Unix epoch.
///
/// Two creations can land on the same millisecond, so the generator remembers
/// the last value it handed out and bumps past it when the clock has not
/// advanced. Ids are unique and strictly increasing within one generator.
#[derive(Debug, Default)]
pub struct IdGen {
    last_ms: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_ms = if now_ms > self.last_ms {
            now_ms
        } else {
            self.last_ms + 1
        };
        self.last_ms.to_string()
    }
}
