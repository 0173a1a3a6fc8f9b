/// Position within an ordered photo collection.
///
/// Only exists for non-empty collections, so `current_index < collection_size`
/// always holds. Operations that would empty the collection return `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationCursor {
    current_index: usize,
    collection_size: usize,
}

impl NavigationCursor {
    /// Cursor at `index`, clamped into the collection.
    pub fn new(index: usize, collection_size: usize) -> Option<Self> {
        if collection_size == 0 {
            return None;
        }
        Some(Self {
            current_index: index.min(collection_size - 1),
            collection_size,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn collection_size(&self) -> usize {
        self.collection_size
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.collection_size
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Move to the next (older) entry. Returns false at the end.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Move to the previous (newer) entry. Returns false at the start.
    pub fn retreat(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Re-resolve after the current entry was removed: the next entry if
    /// there is one, else the previous, else nothing.
    pub fn after_removal(&self) -> Option<Self> {
        let remaining = self.collection_size - 1;
        if remaining == 0 {
            return None;
        }
        let index = if self.current_index < remaining {
            self.current_index
        } else {
            self.current_index - 1
        };
        Self::new(index, remaining)
    }

    /// Adopt a new collection size, keeping the index when still valid.
    pub fn resized(&self, collection_size: usize) -> Option<Self> {
        Self::new(self.current_index, collection_size)
    }

    /// `"3 / 12"` style position label.
    pub fn label(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.collection_size)
    }
}
