use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

static LAST_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity attached to a [`Rectangle`](struct.Rectangle.html).
///
/// Packsearch never interprets IDs; they only exist so that callers can map
/// placements back onto their own objects. IDs can either be chosen by the
/// caller via `From<u64>` or generated from a process-wide counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u64);

impl Id {
    /// Generates an ID that has not been handed out by `Id::generate` before
    /// in this process.
    pub fn generate() -> Self {
        Id(LAST_ID.fetch_add(1, Ordering::SeqCst))
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
