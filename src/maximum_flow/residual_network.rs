use crate::error::FlowError;
use num_traits::{NumAssign, Signed};
use std::collections::VecDeque;
use std::ops::Sub;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArcId {
    pub node: usize,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResidualArc<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub capacity: Flow,
    // index of the paired arc inside arcs[to]
    pub(crate) rev: usize,
}

impl<Flow> ResidualArc<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.capacity - self.flow
    }
}

// reverse arcs have capacity 0 and hold the negated flow of their pair
#[derive(Debug, Clone, Default)]
pub struct ResidualNetwork<Flow> {
    arcs: Vec<Vec<ResidualArc<Flow>>>,
    num_arc_pairs: usize,
}

impl<Flow> ResidualNetwork<Flow>
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { arcs: (0..num_nodes).map(|_| Vec::new()).collect(), num_arc_pairs: 0 }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn num_arc_pairs(&self) -> usize {
        self.num_arc_pairs
    }

    pub fn add_node(&mut self) -> usize {
        self.arcs.push(Vec::new());
        self.arcs.len() - 1
    }

    // return the id of the forward arc
    pub fn add_arc_pair(&mut self, from: usize, to: usize, capacity: Flow) -> Result<ArcId, FlowError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if capacity < Flow::zero() {
            return Err(FlowError::InvalidCapacity { from, to });
        }

        let forward_index = self.arcs[from].len();
        // a self loop stores both arcs in the same list
        let reverse_index = self.arcs[to].len() + usize::from(from == to);

        self.arcs[from].push(ResidualArc { to, flow: Flow::zero(), capacity, rev: reverse_index });
        self.arcs[to].push(ResidualArc { to: from, flow: Flow::zero(), capacity: Flow::zero(), rev: forward_index });
        self.num_arc_pairs += 1;

        Ok(ArcId { node: from, index: forward_index })
    }

    pub fn check_node(&self, node: usize) -> Result<(), FlowError> {
        if node >= self.num_nodes() {
            return Err(FlowError::NodeIndexOutOfRange { node, num_nodes: self.num_nodes() });
        }
        Ok(())
    }

    #[inline]
    pub fn arcs(&self, u: usize) -> &[ResidualArc<Flow>] {
        &self.arcs[u]
    }

    pub fn arc(&self, id: ArcId) -> Option<&ResidualArc<Flow>> {
        self.arcs.get(id.node)?.get(id.index)
    }

    #[inline]
    pub(crate) fn arc_at(&self, id: ArcId) -> &ResidualArc<Flow> {
        &self.arcs[id.node][id.index]
    }

    #[inline]
    pub fn reverse(&self, id: ArcId) -> ArcId {
        let arc = self.arc_at(id);
        ArcId { node: arc.to, index: arc.rev }
    }

    #[inline]
    pub fn residual_capacity(&self, id: ArcId) -> Flow {
        self.arc_at(id).residual_capacity()
    }

    #[inline]
    pub fn push_flow(&mut self, id: ArcId, flow: Flow) {
        let rev = self.reverse(id);

        // update flow
        self.arcs[id.node][id.index].flow += flow;
        self.arcs[rev.node][rev.index].flow -= flow;
    }

    // net flow leaving u
    pub fn flow_value(&self, u: usize) -> Flow {
        self.arcs[u].iter().fold(Flow::zero(), |sum, arc| sum + arc.flow)
    }

    pub fn excess(&self, u: usize) -> Flow {
        -self.flow_value(u)
    }

    pub fn saturated_arcs(&self) -> Vec<ArcId> {
        let mut saturated = Vec::new();
        for (node, arcs) in self.arcs.iter().enumerate() {
            for (index, arc) in arcs.iter().enumerate() {
                if arc.capacity > Flow::zero() && arc.flow == arc.capacity {
                    saturated.push(ArcId { node, index });
                }
            }
        }
        saturated
    }

    // O(n + m)
    // nodes reachable from source in the residual network, in discovery order
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_nodes()];
        if source >= self.num_nodes() {
            return cut;
        }

        visited[source] = true;
        let mut que = VecDeque::from([source]);
        while let Some(u) = que.pop_front() {
            cut.push(u);
            for arc in self.arcs[u].iter() {
                if !visited[arc.to] && arc.residual_capacity() > Flow::zero() {
                    visited[arc.to] = true;
                    que.push_back(arc.to);
                }
            }
        }

        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_pair_is_linked() {
        let mut network = ResidualNetwork::<i32>::new(3);
        let a = network.add_arc_pair(0, 1, 5).unwrap();
        let b = network.add_arc_pair(1, 2, 3).unwrap();

        assert_eq!(a, ArcId { node: 0, index: 0 });
        assert_eq!(b, ArcId { node: 1, index: 1 });
        assert_eq!(network.num_arc_pairs(), 2);

        let rev = network.reverse(a);
        assert_eq!(rev, ArcId { node: 1, index: 0 });
        assert_eq!(network.reverse(rev), a);
        assert_eq!(network.arc(rev).unwrap().capacity, 0);
        assert_eq!(network.residual_capacity(rev), 0);
    }

    #[test]
    fn push_flow_debits_reverse() {
        let mut network = ResidualNetwork::<i64>::new(2);
        let a = network.add_arc_pair(0, 1, 7).unwrap();
        network.push_flow(a, 4);

        let rev = network.reverse(a);
        assert_eq!(network.arc(a).unwrap().flow, 4);
        assert_eq!(network.arc(rev).unwrap().flow, -4);
        assert_eq!(network.residual_capacity(a), 3);
        assert_eq!(network.residual_capacity(rev), 4);
        assert_eq!(network.flow_value(0), 4);
        assert_eq!(network.excess(1), 4);
    }

    #[test]
    fn self_loop_reverse_points_at_partner() {
        let mut network = ResidualNetwork::<i32>::new(1);
        let a = network.add_arc_pair(0, 0, 2).unwrap();
        let rev = network.reverse(a);

        assert_eq!(rev, ArcId { node: 0, index: 1 });
        assert_eq!(network.reverse(rev), a);
    }

    #[test]
    fn rejects_bad_arcs() {
        let mut network = ResidualNetwork::<i32>::new(2);
        assert_eq!(network.add_arc_pair(0, 1, -1), Err(FlowError::InvalidCapacity { from: 0, to: 1 }));
        assert_eq!(network.add_arc_pair(0, 2, 1), Err(FlowError::NodeIndexOutOfRange { node: 2, num_nodes: 2 }));
        assert_eq!(network.add_arc_pair(5, 1, 1), Err(FlowError::NodeIndexOutOfRange { node: 5, num_nodes: 2 }));
        assert_eq!(network.num_arc_pairs(), 0);
        assert!(network.arcs(0).is_empty());
    }

    #[test]
    fn added_node_accepts_arcs() {
        let mut network = ResidualNetwork::<i32>::new(1);
        let u = network.add_node();
        assert_eq!(u, 1);
        assert!(network.add_arc_pair(0, u, 3).is_ok());
        assert_eq!(network.minimum_cut(0), vec![0, 1]);
    }

    #[test]
    fn zero_capacity_arc_is_allowed() {
        let mut network = ResidualNetwork::<i32>::new(2);
        let a = network.add_arc_pair(0, 1, 0).unwrap();
        assert_eq!(network.residual_capacity(a), 0);
        assert!(network.saturated_arcs().is_empty());
        assert_eq!(network.minimum_cut(0), vec![0]);
    }
}
