/// Generator for model reference ids.
///
/// Ids start at 0, increase by one per call, and are never handed out twice,
/// so assignment order and id order always agree.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    /// Creates a new ID generator starting from ID 0.
    pub(crate) fn new() -> Self {
        Self { next: 0 }
    }

    /// Returns the next unused id.
    pub(crate) fn get(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub(crate) fn issued(&self) -> u32 {
        self.next
    }
}
