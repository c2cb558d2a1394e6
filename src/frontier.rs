//! A binary min-heap of Nodes that allows lowering the priority of queued Nodes.

use crate::Cost;
use std::cmp::Ordering;

/// A single queued Node together with its priority.
///
/// Entries are ordered by priority first and by the Node itself second, so that Nodes with
/// equal priority always leave the [`Frontier`] in the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry<Id> {
    /// the priority, usually `g + h` of the Node at the time it was queued
    pub priority: Cost,
    /// the queued Node
    pub id: Id,
}

impl<Id: Ord> PartialOrd for Entry<Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id: Ord> Ord for Entry<Id> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.priority
            .cmp(&rhs.priority)
            .then_with(|| self.id.cmp(&rhs.id))
    }
}

/// What [`Frontier::decrease_or_insert`] did with the Node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Update {
    /// the Node was not queued and has been inserted
    Inserted,
    /// the Node was queued and its priority has been lowered
    Decreased,
    /// the Node was already queued with a lower priority
    Unchanged,
}

/// A binary min-heap stored in a plain `Vec`.
///
/// Unlike [`BinaryHeap`](std::collections::BinaryHeap), the priority of a queued Node can be
/// lowered in place with [`decrease_or_insert`](Frontier::decrease_or_insert). There is no
/// index from Node to heap slot: the slot is found by scanning the heap array, which keeps the
/// structure to a single `Vec` whose only invariant is the heap property.
///
/// ## Examples
/// ```
/// use grid_shortest_paths::frontier::Frontier;
///
/// let mut frontier = Frontier::new();
/// frontier.insert(5, 'a');
/// frontier.insert(3, 'b');
/// frontier.decrease_or_insert('a', 1);
///
/// assert_eq!(frontier.extract_min(), Some((1, 'a')));
/// assert_eq!(frontier.extract_min(), Some((3, 'b')));
/// assert_eq!(frontier.extract_min(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Frontier<Id> {
    heap: Vec<Entry<Id>>,
}

impl<Id: Copy + Ord> Default for Frontier<Id> {
    fn default() -> Self {
        Frontier::new()
    }
}

impl<Id: Copy + Ord> Frontier<Id> {
    /// Creates an empty Frontier
    pub fn new() -> Frontier<Id> {
        Frontier { heap: Vec::new() }
    }

    /// Creates an empty Frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Frontier<Id> {
        Frontier {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// The number of queued entries, counting duplicates
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// The entry that [`extract_min`](Frontier::extract_min) would return
    pub fn peek(&self) -> Option<(Cost, Id)> {
        self.heap.first().map(|entry| (entry.priority, entry.id))
    }

    /// Queues `id` with the given priority.
    ///
    /// This does not check whether `id` is already queued. Duplicates are allowed; it is up to
    /// the caller to recognize and skip the stale ones when they are extracted.
    pub fn insert(&mut self, priority: Cost, id: Id) {
        self.heap.push(Entry { priority, id });
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the entry with the lowest priority.
    ///
    /// Returns `None` once the Frontier is empty, which is how a search knows it is done.
    pub fn extract_min(&mut self) -> Option<(Cost, Id)> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some((last.priority, last.id));
        }
        let min = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(0);
        Some((min.priority, min.id))
    }

    /// Lowers the priority of a queued `id` to `priority`, or queues it if it is absent.
    ///
    /// The heap array is scanned back to front to find `id`, since Nodes that were pushed
    /// recently are the most likely to be relaxed again. This makes the operation `O(n)` in
    /// the worst case, instead of the `O(log n)` an index map could offer; in exchange there
    /// is no second structure that has to follow every swap of the heap.
    ///
    /// If `id` is queued with a priority that is already lower than `priority`, nothing
    /// happens.
    pub fn decrease_or_insert(&mut self, id: Id, priority: Cost) -> Update {
        match self.heap.iter().rposition(|entry| entry.id == id) {
            Some(pos) if self.heap[pos].priority < priority => Update::Unchanged,
            Some(pos) => {
                self.heap[pos].priority = priority;
                self.sift_up(pos);
                Update::Decreased
            }
            None => {
                self.insert(priority, id);
                Update::Inserted
            }
        }
    }

    /// `true` if `id` is currently queued
    pub fn contains(&self, id: Id) -> bool {
        self.heap.iter().any(|entry| entry.id == id)
    }

    /// Checks the heap property of the whole array.
    ///
    /// Every public operation leaves the array as a valid heap, so this should always be `true`.
    pub fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|child| self.heap[(child - 1) / 2] <= self.heap[child])
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos] >= self.heap[parent] {
                break;
            }
            self.heap.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.heap[right] < self.heap[left] {
                right
            } else {
                left
            };
            if self.heap[pos] <= self.heap[child] {
                break;
            }
            self.heap.swap(pos, child);
            pos = child;
        }
    }
}
