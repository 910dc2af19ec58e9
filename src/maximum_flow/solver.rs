use crate::error::FlowError;
use crate::maximum_flow::residual_network::ResidualNetwork;
use crate::maximum_flow::status::{MaxFlowStatus, Phase};
use crate::maximum_flow::strategy::{AugmentingStrategy, Strategy};
use log::{debug, trace};
use num_traits::{Bounded, NumAssign, Signed};
use std::fmt::Debug;

#[derive(Default, Debug, Clone, Copy)]
pub struct MaxFlowSolver {
    strategy: Strategy,
}

impl MaxFlowSolver {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn solve<Flow>(&self, network: &mut ResidualNetwork<Flow>, source: usize, sink: usize) -> Result<MaxFlowStatus<Flow>, FlowError>
    where
        Flow: NumAssign + Signed + Bounded + Ord + Copy + Debug,
    {
        network.check_node(source)?;
        network.check_node(sink)?;
        if source == sink {
            return Err(FlowError::SourceEqualsSink { node: source });
        }

        let mut searcher = self.strategy.searcher();
        let mut status = MaxFlowStatus { strategy: self.strategy, value: Flow::zero(), augmentations: 0, phases: 0 };
        let mut phase = Phase::Ready;

        loop {
            phase = match phase {
                Phase::Ready => {
                    debug!("{}: {} nodes, {} arc pairs, source {}, sink {}", self.strategy, network.num_nodes(), network.num_arc_pairs(), source, sink);
                    Phase::Searching
                }
                Phase::Searching => {
                    if searcher.search(&*network, source, sink) {
                        Phase::Augmenting
                    } else {
                        Phase::Done
                    }
                }
                Phase::Augmenting => {
                    let augmentation = searcher.augment(network, source, sink);
                    status.value += augmentation.flow;
                    status.augmentations += augmentation.paths;
                    status.phases += 1;
                    trace!("phase {}: pushed {:?} along {} paths", status.phases, augmentation.flow, augmentation.paths);
                    Phase::Searching
                }
                Phase::Done => break,
            };
        }

        debug!("{}: max flow {:?} after {} phases, {} augmentations", self.strategy, status.value, status.phases, status.augmentations);
        Ok(status)
    }
}
