use crate::maximum_flow::path_finder::PathFinder;
use crate::maximum_flow::residual_network::ResidualNetwork;
use crate::maximum_flow::strategy::{Augmentation, AugmentingStrategy};
use num_traits::{NumAssign, Signed};

#[derive(Default, Debug)]
pub struct FordFulkerson {
    finder: PathFinder,
}

impl<Flow> AugmentingStrategy<Flow> for FordFulkerson
where
    Flow: NumAssign + Signed + Ord + Copy,
{
    fn search(&mut self, network: &ResidualNetwork<Flow>, source: usize, sink: usize) -> bool {
        self.finder.dfs(network, source, sink)
    }

    fn augment(&mut self, network: &mut ResidualNetwork<Flow>, source: usize, sink: usize) -> Augmentation<Flow> {
        Augmentation::single(self.finder.augment(network, source, sink))
    }
}
