use crate::maximum_flow::path_finder::build_levels;
use crate::maximum_flow::residual_network::{ArcId, ResidualNetwork};
use crate::maximum_flow::strategy::{Augmentation, AugmentingStrategy, Traversal};
use log::trace;
use num_traits::{Bounded, NumAssign, Signed};
use std::collections::VecDeque;

#[derive(Default, Debug)]
pub struct Dinic {
    traversal: Traversal,
    // bfs distance from source, num_nodes if unreached
    levels: Vec<usize>,
    current_arc: Vec<usize>,
    que: VecDeque<usize>,
    stack: Vec<ArcId>,
}

impl Dinic {
    pub fn new(traversal: Traversal) -> Self {
        Self { traversal, ..Default::default() }
    }

    #[inline]
    fn is_admissible<Flow>(&self, network: &ResidualNetwork<Flow>, id: ArcId) -> bool
    where
        Flow: NumAssign + Signed + Ord + Copy,
    {
        let arc = network.arc_at(id);
        arc.residual_capacity() > Flow::zero() && self.levels[arc.to] < network.num_nodes() && self.levels[arc.to] == self.levels[id.node] + 1
    }

    fn dfs_recursive<Flow>(&mut self, network: &mut ResidualNetwork<Flow>, u: usize, sink: usize, upper: Flow) -> Flow
    where
        Flow: NumAssign + Signed + Ord + Copy,
    {
        if u == sink {
            return upper;
        }

        while self.current_arc[u] < network.arcs(u).len() {
            let id = ArcId { node: u, index: self.current_arc[u] };
            if self.is_admissible(network, id) {
                let arc = network.arc_at(id);
                let (v, residual_capacity) = (arc.to, arc.residual_capacity());
                let delta = self.dfs_recursive(network, v, sink, upper.min(residual_capacity));
                if delta > Flow::zero() {
                    network.push_flow(id, delta);
                    return delta;
                }
            }
            self.current_arc[u] += 1;
        }

        Flow::zero()
    }

    // same search as dfs_recursive, the recursion stack kept as the arcs of the current path
    fn dfs_iterative<Flow>(&mut self, network: &mut ResidualNetwork<Flow>, source: usize, sink: usize, upper: Flow) -> Flow
    where
        Flow: NumAssign + Signed + Ord + Copy,
    {
        self.stack.clear();
        let mut u = source;
        loop {
            if u == sink {
                let delta = self.stack.iter().fold(upper, |delta, &id| delta.min(network.residual_capacity(id)));
                for &id in self.stack.iter() {
                    network.push_flow(id, delta);
                }
                return delta;
            }

            // advance
            let num_arcs = network.arcs(u).len();
            while self.current_arc[u] < num_arcs && !self.is_admissible(network, ArcId { node: u, index: self.current_arc[u] }) {
                self.current_arc[u] += 1;
            }
            if self.current_arc[u] < num_arcs {
                let id = ArcId { node: u, index: self.current_arc[u] };
                self.stack.push(id);
                u = network.arc_at(id).to;
                continue;
            }

            // retreat: u is a dead end for the rest of this phase
            match self.stack.pop() {
                Some(id) => {
                    self.current_arc[id.node] += 1;
                    u = id.node;
                }
                None => return Flow::zero(),
            }
        }
    }
}

impl<Flow> AugmentingStrategy<Flow> for Dinic
where
    Flow: NumAssign + Signed + Bounded + Ord + Copy,
{
    fn search(&mut self, network: &ResidualNetwork<Flow>, source: usize, sink: usize) -> bool {
        build_levels(network, source, sink, &mut self.levels, &mut self.que)
    }

    fn augment(&mut self, network: &mut ResidualNetwork<Flow>, source: usize, sink: usize) -> Augmentation<Flow> {
        self.current_arc.clear();
        self.current_arc.resize(network.num_nodes(), 0);

        let upper = Flow::max_value();
        let mut blocking = Augmentation::none();
        loop {
            let delta = match self.traversal {
                Traversal::Iterative => self.dfs_iterative(network, source, sink, upper),
                Traversal::Recursive => self.dfs_recursive(network, source, sink, upper),
            };
            if delta == Flow::zero() {
                break;
            }
            blocking.flow += delta;
            blocking.paths += 1;
        }

        trace!("blocking flow: {} paths, sink level {}", blocking.paths, self.levels[sink]);
        blocking
    }
}
