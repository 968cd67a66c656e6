//! This module implements the traversal shared by every solver. It is a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! without a heuristic, where the order of expansion and the rule for re-opening a node are
//! delegated to a [Frontier].
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use crate::frontier::{Frontier, FrontierEntry};
use std::hash::Hash;
use std::iter;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Follows the parent links from `goal` back to the node without a parent and returns the
/// visited nodes reversed, i.e. ordered from start to goal.
fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, goal: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = goal;
    let mut path: Vec<N> = iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until `success` holds for a popped node or the frontier runs dry.
///
/// A node is recorded in the parent map the first time it is reached, which doubles as the
/// visited set: a recorded node is only pushed again if [Frontier::reopens] accepts the new cost.
/// The success check happens when a node is popped, so the returned path is the one the
/// frontier's ordering settles on. Returns the path from start to goal inclusive and its cost.
pub fn traverse<N, C, F, FN, IN, FS>(
    start: &N,
    mut frontier: F,
    mut successors: FN,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    F: Frontier<C>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FS: FnMut(&N) -> bool,
{
    frontier.push(FrontierEntry {
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    while let Some(FrontierEntry { cost, index }) = frontier.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            // Stale entry: the node was re-opened with a cheaper cost after this one was pushed.
            if cost > c {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if frontier.reopens(e.get().1, new_cost) {
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            frontier.push(FrontierEntry {
                cost: new_cost,
                index: n,
            });
        }
    }
    None
}
