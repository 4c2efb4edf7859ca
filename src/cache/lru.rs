//! LRU Recency List Module
//!
//! Doubly linked list over an arena of slots, ordered by recency.

// == Slot ==
#[derive(Debug)]
struct Slot<T> {
    item: T,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// Items live in arena slots linked by index, where:
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
///
/// The handle returned by `push_front` stays valid until the item is
/// removed, so callers can keep it in a hash index for O(1) moves and
/// removals from the middle of the list.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Option<Slot<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an item as most recently used and returns its handle.
    pub fn push_front(&mut self, item: T) -> usize {
        let slot = Slot {
            item,
            prev: None,
            next: self.head,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(slot);
                idx
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        };

        match self.head {
            Some(old_head) => self.slot_mut(old_head).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the item at `idx` as most recently used.
    ///
    /// Unknown handles are ignored.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) || !self.is_live(idx) {
            return;
        }
        self.unlink(idx);

        let old_head = self.head;
        {
            let slot = self.slot_mut(idx);
            slot.prev = None;
            slot.next = old_head;
        }
        match old_head {
            Some(h) => self.slot_mut(h).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    // == Remove ==
    /// Removes the item at `idx` and returns it.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        if !self.is_live(idx) {
            return None;
        }
        self.unlink(idx);
        let slot = self.slots[idx].take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(slot.item)
    }

    // == Pop Back ==
    /// Returns and removes the least recently used item.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Peek Back ==
    /// Returns the least recently used item without removing it.
    #[cfg(test)]
    pub(crate) fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.get(idx))
    }

    // == Peek Front ==
    /// Returns the most recently used item without moving it.
    #[cfg(test)]
    pub(crate) fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.get(idx))
    }

    // == Accessors ==
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx)?.as_ref().map(|slot| &slot.item)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx)?.as_mut().map(|slot| &mut slot.item)
    }

    /// Iterates items from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Length ==
    /// Returns the number of tracked items.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every item and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn is_live(&self, idx: usize) -> bool {
        matches!(self.slots.get(idx), Some(Some(_)))
    }

    /// Detaches a live slot from its neighbours without freeing it.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let slot = self.slot_mut(idx);
            (slot.prev.take(), slot.next.take())
        };
        match prev {
            Some(p) => self.slot_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slot_mut(n).prev = prev,
            None => self.tail = prev,
        }
    }

    fn slot_mut(&mut self, idx: usize) -> &mut Slot<T> {
        self.slots[idx]
            .as_mut()
            .unwrap_or_else(|| unreachable!("linked slot {idx} is vacant"))
    }
}

// == Iterator ==
/// Front-to-back iterator over a `RecencyList`.
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let slot = self.list.slots.get(idx)?.as_ref()?;
        self.cursor = slot.next;
        Some(&slot.item)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order(list: &RecencyList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<&str> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.back().is_none());
    }

    #[test]
    fn test_push_front_orders_by_recency() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.len(), 3);
        assert_eq!(list.back(), Some(&"key1"));
        assert_eq!(list.front(), Some(&"key3"));
        assert_eq!(order(&list), vec!["key3", "key2", "key1"]);
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        list.move_to_front(a);

        assert_eq!(order(&list), vec!["a", "c", "b"]);
        assert_eq!(list.back(), Some(&"b"));
    }

    #[test]
    fn test_move_tail_and_middle() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");
        list.push_front("c");

        list.move_to_front(b);
        assert_eq!(order(&list), vec!["b", "c", "a"]);

        list.move_to_front(a);
        assert_eq!(order(&list), vec!["a", "b", "c"]);
        assert_eq!(list.back(), Some(&"c"));
    }

    #[test]
    fn test_pop_back() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.pop_back(), Some("key1"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_back(), Some("key2"));
        assert_eq!(list.pop_back(), Some("key3"));
        assert_eq!(list.pop_back(), None);
        assert!(list.front().is_none());
    }

    #[test]
    fn test_remove_middle() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        let k2 = list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.remove(k2), Some("key2"));
        assert_eq!(list.len(), 2);
        assert_eq!(order(&list), vec!["key3", "key1"]);

        // Stale handle is a no-op
        assert_eq!(list.remove(k2), None);
        list.move_to_front(k2);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.remove(a);
        let c = list.push_front("c");

        assert_eq!(c, a);
        assert_eq!(order(&list), vec!["c", "b"]);
        assert_eq!(list.get(c), Some(&"c"));
    }

    #[test]
    fn test_get_mut() {
        let mut list = RecencyList::new();
        let a = list.push_front(1);

        if let Some(item) = list.get_mut(a) {
            *item = 10;
        }

        assert_eq!(list.get(a), Some(&10));
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::new();
        list.push_front("a");
        list.push_front("b");

        list.clear();

        assert!(list.is_empty());
        assert!(list.back().is_none());
        assert_eq!(list.iter().count(), 0);
    }
}
