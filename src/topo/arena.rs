//! Slot arena backing one entity kind.
//!
//! Allocation hands out slot indices; reclamation pushes the slot onto a
//! free list for reuse. A reclaimed slot reads back as vacant until it is
//! reused, so access through a stale id is detectable at the public
//! boundary rather than silently aliasing a freed entity.

/// A vector-backed arena with O(1) insert and O(1) remove.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<u32>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<T> Arena<T> {
    /// Insert a value, returning its slot index.
    pub fn insert(&mut self, value: T) -> usize {
        match self.free.pop() {
            Some(slot) => {
                let slot = slot as usize;
                self.slots[slot] = Some(value);
                slot
            }
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            }
        }
    }

    /// Remove the value at `slot`, returning it if the slot was occupied.
    pub fn remove(&mut self, slot: usize) -> Option<T> {
        let value = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot as u32);
        Some(value)
    }

    /// Get the value at `slot`, if it is live.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot)?.as_ref()
    }

    /// Get the value at `slot` mutably, if it is live.
    #[inline]
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_remove() {
        let mut arena: Arena<&str> = Arena::default();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(b), Some(&"b"));
    }

    #[test]
    fn test_slot_reuse() {
        let mut arena: Arena<u32> = Arena::default();
        let a = arena.insert(1);
        arena.remove(a);
        let b = arena.insert(2);
        assert_eq!(a, b);
        assert_eq!(arena.get(b), Some(&2));
    }

    #[test]
    fn test_double_remove_is_none() {
        let mut arena: Arena<u32> = Arena::default();
        let a = arena.insert(1);
        assert_eq!(arena.remove(a), Some(1));
        assert_eq!(arena.remove(a), None);
    }
}
