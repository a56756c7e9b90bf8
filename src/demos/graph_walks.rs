// GRAPH WALKS ////////////////////////////////////////////////////////////////
// Directed graph over integer node ids with breadth-first and depth-first
// traversals implemented as standard iterators.

use itertools::Itertools;
use std::collections::{HashMap, HashSet, VecDeque};

/// Directed graph keyed by node id.
///
/// Edges keep their insertion order per node, so traversal orders are
/// reproducible for a fixed construction sequence.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    adj: HashMap<usize, Vec<usize>>,
}

impl DirectedGraph {
    pub fn new() -> DirectedGraph {
        DirectedGraph {
            adj: HashMap::new(),
        }
    }

    /// Adds a directed edge, registering the target node if it is new.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.adj.entry(from).or_default().push(to);
        self.adj.entry(to).or_default();
    }

    /// Outgoing neighbors in insertion order, empty for unknown nodes.
    pub fn neighbors(&self, id: usize) -> &[usize] {
        self.adj.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// All node ids in ascending order.
    pub fn node_ids(&self) -> Vec<usize> {
        self.adj.keys().copied().sorted().collect()
    }

    /// Breadth-first traversal from the start node.
    pub fn bfs(&self, start: usize) -> BfsIterator<'_> {
        BfsIterator::new(self, start)
    }

    /// Depth-first (preorder) traversal from the start node.
    pub fn dfs(&self, start: usize) -> DfsIterator<'_> {
        DfsIterator::new(self, start)
    }
}

/// Breadth-first walk. Nodes are marked visited when enqueued, so a node
/// reachable along several paths is yielded once.
pub struct BfsIterator<'a> {
    graph: &'a DirectedGraph,
    queue: VecDeque<usize>,
    visited: HashSet<usize>,
}

impl<'a> BfsIterator<'a> {
    fn new(graph: &'a DirectedGraph, start: usize) -> BfsIterator<'a> {
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        queue.push_back(start);
        visited.insert(start);
        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<'a> Iterator for BfsIterator<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let cur = self.queue.pop_front()?;
        for &nb in self.graph.neighbors(cur) {
            if self.visited.insert(nb) {
                self.queue.push_back(nb);
            }
        }
        Some(cur)
    }
}

/// Depth-first walk backed by an explicit stack.
pub struct DfsIterator<'a> {
    graph: &'a DirectedGraph,
    stack: Vec<usize>,
    visited: HashSet<usize>,
}

impl<'a> DfsIterator<'a> {
    fn new(graph: &'a DirectedGraph, start: usize) -> DfsIterator<'a> {
        DfsIterator {
            graph,
            stack: vec![start],
            visited: HashSet::new(),
        }
    }
}

impl<'a> Iterator for DfsIterator<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(cur) = self.stack.pop() {
            if !self.visited.insert(cur) {
                continue;
            }
            // neighbors are pushed reversed so the first inserted edge is walked first
            for &nb in self.graph.neighbors(cur).iter().rev() {
                if !self.visited.contains(&nb) {
                    self.stack.push(nb);
                }
            }
            return Some(cur);
        }
        None
    }
}

//___________________________________TESTS____________________________________
