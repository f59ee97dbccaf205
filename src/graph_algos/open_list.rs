use std::{collections::BinaryHeap, cmp::Ordering};
use rustc_hash::FxHashMap;


/// Entry on the open list
/// - index points into the node map
/// - seq is the order in which the node first entered the list, used to break priority ties
#[derive(Debug)]
struct OpenEntry<P> {
    index: usize,
    priority: P,
    seq: usize,
}

// BinaryHeap pops the biggest entry, so both comparisons are reversed:
// lowest priority first, then earliest first insertion
impl<P: Ord> Ord for OpenEntry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<P: Ord> PartialOrd for OpenEntry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<P: Ord> PartialEq for OpenEntry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<P: Ord> Eq for OpenEntry<P> {}


/// Open set for the priority driven searches (Dijkstra, greedy, A*)
///
/// Extraction order matches a left-to-right linear scan over an unordered
/// list: the minimum priority wins and, among equal priorities, the node
/// that entered the list first. Duplicate entries for the same node are
/// allowed; callers discard stale ones on extraction.
///
/// A re-push of a node never raises its priority, so the newest entry
/// carries the node's current priority. Every entry of a node shares the
/// sequence number of its first push, which is the position a linear scan
/// would find it at.
#[derive(Debug)]
pub(crate) struct OpenList<P> {
    heap: BinaryHeap<OpenEntry<P>>,
    first_seq: FxHashMap<usize, usize>,
    next_seq: usize,
}

impl<P: Ord> OpenList<P> {

    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            first_seq: FxHashMap::default(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, index: usize, priority: P) {
        let seq = *self.first_seq.entry(index).or_insert(self.next_seq);
        self.next_seq += 1;
        self.heap.push(OpenEntry { index, priority, seq });
    }

    /// Remove and return (index, priority) of the best entry
    pub(crate) fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|entry| (entry.index, entry.priority))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
