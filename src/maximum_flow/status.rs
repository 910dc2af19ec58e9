use crate::maximum_flow::strategy::Strategy;

// Ready -> Searching -> {Augmenting -> Searching | Done}
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Phase {
    #[default]
    Ready,
    Searching,
    Augmenting,
    Done,
}

#[derive(PartialEq, Debug, Clone)]
pub struct MaxFlowStatus<Flow> {
    pub strategy: Strategy,
    pub value: Flow,
    // augmenting paths applied
    pub augmentations: usize,
    // successful searches, i.e. level graphs for dinic
    pub phases: usize,
}
