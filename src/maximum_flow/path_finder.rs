use crate::maximum_flow::residual_network::{ArcId, ResidualNetwork};
use num_traits::{NumAssign, Signed};
use std::collections::VecDeque;

#[derive(Default, Debug)]
pub struct PathFinder {
    // arc used to reach each node
    parent: Vec<Option<ArcId>>,
    visited: Vec<bool>,
    que: VecDeque<usize>,
    stack: Vec<usize>,
}

impl PathFinder {
    fn reset(&mut self, num_nodes: usize, source: usize) {
        self.parent.clear();
        self.parent.resize(num_nodes, None);
        self.visited.clear();
        self.visited.resize(num_nodes, false);
        self.visited[source] = true;
    }

    // breadth first: the path found has the fewest arcs
    pub fn bfs<Flow>(&mut self, network: &ResidualNetwork<Flow>, source: usize, sink: usize) -> bool
    where
        Flow: NumAssign + Signed + Ord + Copy,
    {
        self.reset(network.num_nodes(), source);
        self.que.clear();
        self.que.push_back(source);

        while let Some(u) = self.que.pop_front() {
            for (index, arc) in network.arcs(u).iter().enumerate() {
                if self.visited[arc.to] || arc.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.visited[arc.to] = true;
                self.parent[arc.to] = Some(ArcId { node: u, index });
                if arc.to == sink {
                    return true;
                }
                self.que.push_back(arc.to);
            }
        }
        false
    }

    // depth first with an explicit stack, no guarantee on path length
    pub fn dfs<Flow>(&mut self, network: &ResidualNetwork<Flow>, source: usize, sink: usize) -> bool
    where
        Flow: NumAssign + Signed + Ord + Copy,
    {
        self.reset(network.num_nodes(), source);
        self.stack.clear();
        self.stack.push(source);

        while let Some(u) = self.stack.pop() {
            if u == sink {
                return true;
            }
            for (index, arc) in network.arcs(u).iter().enumerate().rev() {
                if self.visited[arc.to] || arc.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.visited[arc.to] = true;
                self.parent[arc.to] = Some(ArcId { node: u, index });
                self.stack.push(arc.to);
            }
        }
        false
    }

    // sink to source
    pub fn path(&self, source: usize, sink: usize) -> Vec<ArcId> {
        let mut path = Vec::new();
        let mut v = sink;
        while v != source {
            match self.parent.get(v).copied().flatten() {
                Some(id) => {
                    path.push(id);
                    v = id.node;
                }
                None => return Vec::new(),
            }
        }
        path
    }

    pub fn augment<Flow>(&self, network: &mut ResidualNetwork<Flow>, source: usize, sink: usize) -> Flow
    where
        Flow: NumAssign + Signed + Ord + Copy,
    {
        let path = self.path(source, sink);
        let Some((&first, rest)) = path.split_first() else {
            return Flow::zero();
        };

        // calculate delta
        let delta = rest.iter().fold(network.residual_capacity(first), |delta, &id| delta.min(network.residual_capacity(id)));

        // update flow
        for &id in path.iter() {
            network.push_flow(id, delta);
        }
        delta
    }
}

// unreached nodes keep level num_nodes
pub fn build_levels<Flow>(network: &ResidualNetwork<Flow>, source: usize, sink: usize, levels: &mut Vec<usize>, que: &mut VecDeque<usize>) -> bool
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    let n = network.num_nodes();
    levels.clear();
    levels.resize(n, n);
    levels[source] = 0;
    que.clear();
    que.push_back(source);

    while let Some(u) = que.pop_front() {
        for arc in network.arcs(u).iter() {
            if levels[arc.to] == n && arc.residual_capacity() > Flow::zero() {
                levels[arc.to] = levels[u] + 1;
                que.push_back(arc.to);
            }
        }
    }

    levels[sink] < n
}
