use std::fmt;

use rand::Rng;

/// Five-digit document number embedded in ticket submissions for
/// traceability. Freshly randomized per submission, never persisted and
/// not guaranteed globally unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketDocId(u32);

impl TicketDocId {
    pub const MIN: u32 = 10_000;
    pub const MAX: u32 = 99_999;

    pub fn generate() -> Self {
        Self(rand::thread_rng().gen_range(Self::MIN..=Self::MAX))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TicketDocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
