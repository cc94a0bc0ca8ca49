use std::time::{SystemTime, UNIX_EPOCH};

/// Hands out todo ids derived from the creation time in milliseconds.
///
/// Two todos created in the same millisecond still get distinct ids: each
/// id is at least one greater than the previous one.
#[derive(Debug, Default)]
pub struct TodoIdGenerator {
    last: u64,
}

impl TodoIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.next_at(now)
    }

    fn next_at(&mut self, now_ms: u64) -> u64 {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_millisecond_still_distinct() {
        let mut ids = TodoIdGenerator::new();
        assert_eq!(ids.next_at(1000), 1000);
        assert_eq!(ids.next_at(1000), 1001);
        assert_eq!(ids.next_at(1000), 1002);
    }

    #[test]
    fn clock_going_backwards_never_reuses() {
        let mut ids = TodoIdGenerator::new();
        assert_eq!(ids.next_at(5000), 5000);
        assert_eq!(ids.next_at(10), 5001);
        assert_eq!(ids.next_at(9000), 9000);
    }

    #[test]
    fn wall_clock_ids_increase() {
        let mut ids = TodoIdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert!(second > first);
    }
}
