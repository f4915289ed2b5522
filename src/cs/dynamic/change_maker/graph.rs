use log::debug;

use super::reachability::ReachabilityTable;
use super::Combination;

/// Handle to a node stored in a [`CombinationGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A coin chosen as the largest coin of some combination of `sum`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: usize,
    sum: usize,
    children: Vec<NodeId>,
}

impl Node {
    pub fn value(&self) -> usize {
        self.value
    }

    /// Running amount this node completes.
    pub fn sum(&self) -> usize {
        self.sum
    }

    /// Nodes for `sum - value` whose coin is at most `value`, largest first.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// A terminal node is a single coin equal to its sum.
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }
}

/// Shared DAG of every combination recorded in a [`ReachabilityTable`].
///
/// Exactly one node exists per `(sum, coin)` pair of the table, and children
/// are referenced by [`NodeId`]. A suffix shared by many combinations is
/// therefore built once and reached from every parent that uses it.
#[derive(Debug, Clone, Default)]
pub struct CombinationGraph {
    nodes: Vec<Node>,
    /// Node ids per sum (index `sum - 1`), largest coin first.
    cells: Vec<Vec<NodeId>>,
}

impl CombinationGraph {
    /// Builds the graph cell by cell, reusing nodes from smaller sums.
    ///
    /// # Complexity
    /// * Time: O(N·C²) for N = amount and C = denominations
    /// * Space: O(N·C) nodes and O(N·C²) edges
    pub fn build(table: &ReachabilityTable) -> Self {
        let mut nodes: Vec<Node> = Vec::new();
        let mut cells: Vec<Vec<NodeId>> = Vec::with_capacity(table.amount());

        for sum in 1..=table.amount() {
            let values: Vec<usize> = table.cell(sum).collect();
            let mut ids = Vec::with_capacity(values.len());

            for &value in values.iter().rev() {
                let children = if value == sum {
                    Vec::new()
                } else {
                    cells[sum - value - 1]
                        .iter()
                        .copied()
                        .filter(|child: &NodeId| nodes[child.index()].value <= value)
                        .collect()
                };
                let id = NodeId(nodes.len());
                nodes.push(Node {
                    value,
                    sum,
                    children,
                });
                ids.push(id);
            }
            cells.push(ids);
        }

        let graph = Self { nodes, cells };
        debug!(
            "built combination graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Nodes completing the full amount, largest coin first.
    pub fn roots(&self) -> &[NodeId] {
        self.cells.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// # Panics
    ///
    /// Panics if `id` was not produced by this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.children.len()).sum()
    }

    /// Every combination reachable from the roots, each sorted non-increasing.
    ///
    /// Combinations come out in descending lexicographic order. The output can
    /// be combinatorially large; use
    /// [`count_combinations`](super::count_combinations) when only the number
    /// is needed.
    ///
    /// The walk keeps its own stack, so a combination of many small coins does
    /// not grow the call stack.
    pub fn enumerate(&self) -> Vec<Combination> {
        let mut results = Vec::new();
        let mut path = Vec::new();
        // (node on the current path, index of its next child to visit)
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        for &root in self.roots() {
            path.push(self.node(root).value);
            stack.push((root, 0));

            while let Some((id, cursor)) = stack.last_mut() {
                let node = &self.nodes[id.index()];
                if node.is_terminal() {
                    results.push(path.clone());
                } else if let Some(&child) = node.children.get(*cursor) {
                    *cursor += 1;
                    path.push(self.node(child).value);
                    stack.push((child, 0));
                    continue;
                }
                stack.pop();
                path.pop();
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::super::denominations::Denominations;
    use super::*;

    fn graph_for(coins: &[i64], amount: usize) -> CombinationGraph {
        let denoms = Denominations::new(coins).unwrap();
        CombinationGraph::build(&ReachabilityTable::build(&denoms, amount))
    }

    #[test]
    fn test_one_node_per_table_entry() {
        let denoms = Denominations::new(&[25, 10, 5, 1]).unwrap();
        let table = ReachabilityTable::build(&denoms, 30);
        let graph = CombinationGraph::build(&table);
        let entries: usize = (1..=30).map(|sum| table.cell(sum).count()).sum();
        assert_eq!(graph.node_count(), entries);
    }

    #[test]
    fn test_children_respect_ceiling() {
        let graph = graph_for(&[3, 4, 5, 7], 10);
        for index in 0..graph.node_count() {
            let node = graph.node(NodeId(index));
            for &child in node.children() {
                let child = graph.node(child);
                assert!(child.value() <= node.value());
                assert_eq!(child.sum(), node.sum() - node.value());
            }
        }
    }

    #[test]
    fn test_roots_largest_first() {
        let graph = graph_for(&[3, 4, 5, 7], 10);
        let roots: Vec<usize> = graph
            .roots()
            .iter()
            .map(|&id| graph.node(id).value())
            .collect();
        assert_eq!(roots, vec![7, 5, 4]);
    }

    #[test]
    fn test_enumerate() {
        let graph = graph_for(&[3, 4, 5, 7], 10);
        assert_eq!(
            graph.enumerate(),
            vec![vec![7, 3], vec![5, 5], vec![4, 3, 3]]
        );
    }

    #[test]
    fn test_enumerate_us_coins() {
        let graph = graph_for(&[25, 10, 5, 1], 8);
        assert_eq!(
            graph.enumerate(),
            vec![vec![5, 1, 1, 1], vec![1, 1, 1, 1, 1, 1, 1, 1]]
        );
    }

    #[test]
    fn test_shared_suffix_is_built_once() {
        // Both [5, 1, 1, 1, 1, 1] and [1; 10] reach the node (5, 1).
        let graph = graph_for(&[5, 1], 10);
        let denoms = Denominations::new(&[5, 1]).unwrap();
        let table = ReachabilityTable::build(&denoms, 10);
        let entries: usize = (1..=10).map(|sum| table.cell(sum).count()).sum();
        assert_eq!(graph.node_count(), entries);
        assert_eq!(graph.enumerate().len(), 3);
    }

    #[test]
    fn test_enumerate_long_combination() {
        let graph = graph_for(&[1], 200_000);
        let combos = graph.enumerate();
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].len(), 200_000);
        assert!(combos[0].iter().all(|&coin| coin == 1));
    }

    #[test]
    fn test_node_ids_index_the_arena() {
        let graph = graph_for(&[2, 1], 4);
        for (index, &root) in graph.roots().iter().enumerate() {
            assert!(root.index() < graph.node_count());
            assert_eq!(graph.node(root).sum(), 4, "root {}", index);
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph = graph_for(&[5], 0);
        assert!(graph.roots().is_empty());
        assert!(graph.enumerate().is_empty());

        let graph = graph_for(&[5], 3);
        assert!(graph.roots().is_empty());
        assert_eq!(graph.node_count(), 0);
    }
}
