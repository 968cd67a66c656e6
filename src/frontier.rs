//! Frontiers decide the order in which discovered nodes are expanded. The traversal in
//! [search](crate::search) only ever talks to a node through its index in the parent map, so a
//! frontier stores [FrontierEntry] values and nothing else.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A discovered node waiting to be expanded: the index of the node in the parent map and the
/// accumulated cost with which it was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry<C> {
    pub cost: C,
    pub index: usize,
}

pub trait Frontier<C> {
    fn push(&mut self, entry: FrontierEntry<C>);
    fn pop(&mut self) -> Option<FrontierEntry<C>>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cost-comparison rule. Returns [true] if a node already reached with cost `known` should be
    /// re-opened (new parent, pushed again) when it is reached once more with cost `candidate`.
    /// The default is first-visit-wins, so a node is pushed at most once.
    fn reopens(&self, _known: C, _candidate: C) -> bool {
        false
    }
}

/// Last-in-first-out frontier used by depth-first search.
#[derive(Clone, Debug)]
pub struct LifoFrontier<C> {
    stack: Vec<FrontierEntry<C>>,
}

impl<C> Default for LifoFrontier<C> {
    fn default() -> Self {
        LifoFrontier { stack: Vec::new() }
    }
}

impl<C> Frontier<C> for LifoFrontier<C> {
    fn push(&mut self, entry: FrontierEntry<C>) {
        self.stack.push(entry);
    }
    fn pop(&mut self) -> Option<FrontierEntry<C>> {
        self.stack.pop()
    }
    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First-in-first-out frontier used by breadth-first search.
#[derive(Clone, Debug)]
pub struct FifoFrontier<C> {
    queue: VecDeque<FrontierEntry<C>>,
}

impl<C> Default for FifoFrontier<C> {
    fn default() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<C> Frontier<C> for FifoFrontier<C> {
    fn push(&mut self, entry: FrontierEntry<C>) {
        self.queue.push_back(entry);
    }
    fn pop(&mut self) -> Option<FrontierEntry<C>> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

struct SmallestCostHolder<K> {
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest cost. Equal costs are left to the heap.
        other.cost.cmp(&self.cost)
    }
}

/// Min-priority frontier keyed on accumulated cost, used by Dijkstra's algorithm. Entries are
/// never decreased in place: a cheaper route pushes a second entry and the stale one is skipped
/// when popped.
pub struct CostOrderedFrontier<C> {
    heap: BinaryHeap<SmallestCostHolder<C>>,
}

impl<C: Ord> Default for CostOrderedFrontier<C> {
    fn default() -> Self {
        CostOrderedFrontier {
            heap: BinaryHeap::new(),
        }
    }
}

impl<C: Ord + Copy> Frontier<C> for CostOrderedFrontier<C> {
    fn push(&mut self, entry: FrontierEntry<C>) {
        self.heap.push(SmallestCostHolder {
            cost: entry.cost,
            index: entry.index,
        });
    }
    fn pop(&mut self) -> Option<FrontierEntry<C>> {
        self.heap
            .pop()
            .map(|SmallestCostHolder { cost, index }| FrontierEntry { cost, index })
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
    /// Relaxation: only a strictly cheaper route re-opens a node.
    fn reopens(&self, known: C, candidate: C) -> bool {
        candidate < known
    }
}
