//! The dictionary built by the encoder.

/// Mapping from reference id to the literal substring it replaces.
///
/// Ids are dense and start at 0, so entries are stored by position. Entries
/// are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model<T> {
    entries: Vec<Vec<T>>,
}

impl<T> Model<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records the substring for `id`, which must be the next id in sequence.
    pub(crate) fn insert(&mut self, id: u32, substring: Vec<T>) {
        debug_assert_eq!(id as usize, self.entries.len(), "model ids must be dense");
        self.entries.push(substring);
    }

    /// Returns the substring replaced by `id`.
    pub fn get(&self, id: u32) -> Option<&[T]> {
        self.entries.get(id as usize).map(Vec::as_slice)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(id, substring)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[T])> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(id, entry)| (id as u32, entry.as_slice()))
    }

    /// Sum of the literal lengths of every entry.
    ///
    /// This is the model half of the sophistication estimate.
    pub fn literal_size(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }
}

impl<T> Default for Model<T> {
    fn default() -> Self {
        Self::new()
    }
}
