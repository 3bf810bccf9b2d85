//! Rule index allocation

/// Hands out rule-list slots in strictly increasing order.
///
/// Slots are never returned or reused, so the order in which entries
/// are first seen is the order of their rules in the managed sheet.
#[derive(Debug, Default)]
pub struct RuleIndexAllocator {
    next: usize,
}

impl RuleIndexAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next free index
    pub fn next_index(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        tracing::debug!("Allocated rule index {}", index);
        index
    }

    /// How many indices have been handed out
    pub fn allocated(&self) -> usize {
        self.next
    }
}
