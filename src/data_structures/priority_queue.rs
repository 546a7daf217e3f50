use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(vertex, tentative distance)` entries.
///
/// Entries are never decreased in place; a vertex may be pushed several times
/// and callers skip stale entries when they pop them. Ties on distance pop the
/// smaller vertex id first, which keeps runs reproducible.
#[derive(Debug)]
pub struct DistanceQueue<W>
where
    W: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(W, usize)>>,
}

impl<W> DistanceQueue<W>
where
    W: Ord + Copy + Debug,
{
    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        DistanceQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Pushes a vertex with its tentative distance
    pub fn push(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap.pop().map(|Reverse((distance, vertex))| (vertex, distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_distance_order() {
        let mut queue = DistanceQueue::with_capacity(4);
        queue.push(3, 10i64);
        queue.push(1, -2);
        queue.push(2, 10);
        queue.push(0, 4);

        assert_eq!(queue.pop(), Some((1, -2)));
        assert_eq!(queue.pop(), Some((0, 4)));
        assert_eq!(queue.pop(), Some((2, 10)));
        assert_eq!(queue.pop(), Some((3, 10)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_duplicate_vertex_entries() {
        let mut queue = DistanceQueue::with_capacity(0);
        queue.push(7, 5i32);
        queue.push(7, 2);
        assert_eq!(queue.pop(), Some((7, 2)));
        assert_eq!(queue.pop(), Some((7, 5)));
        assert_eq!(queue.pop(), None);
    }
}
