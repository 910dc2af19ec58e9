use crate::maximum_flow::dinic::Dinic;
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use crate::maximum_flow::ford_fulkerson::FordFulkerson;
use crate::maximum_flow::residual_network::ResidualNetwork;
use num_traits::{Bounded, NumAssign, Signed};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Augmentation<Flow> {
    pub flow: Flow,
    pub paths: usize,
}

impl<Flow> Augmentation<Flow>
where
    Flow: NumAssign + Copy,
{
    pub fn none() -> Self {
        Self { flow: Flow::zero(), paths: 0 }
    }

    pub fn single(flow: Flow) -> Self {
        Self { flow, paths: 1 }
    }
}

pub trait AugmentingStrategy<Flow> {
    // false if the sink is unreachable
    fn search(&mut self, network: &ResidualNetwork<Flow>, source: usize, sink: usize) -> bool;

    fn augment(&mut self, network: &mut ResidualNetwork<Flow>, source: usize, sink: usize) -> Augmentation<Flow>;
}

#[derive(Default, PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Traversal {
    // explicit stack
    #[default]
    Iterative,
    Recursive,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Strategy {
    FordFulkerson,
    EdmondsKarp,
    Dinic(Traversal),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Dinic(Traversal::Iterative)
    }
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::FordFulkerson, Strategy::EdmondsKarp, Strategy::Dinic(Traversal::Iterative), Strategy::Dinic(Traversal::Recursive)];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FordFulkerson => "ford-fulkerson",
            Strategy::EdmondsKarp => "edmonds-karp",
            Strategy::Dinic(Traversal::Iterative) => "dinic",
            Strategy::Dinic(Traversal::Recursive) => "dinic-recursive",
        }
    }

    pub fn searcher(&self) -> Searcher {
        match self {
            Strategy::FordFulkerson => Searcher::FordFulkerson(FordFulkerson::default()),
            Strategy::EdmondsKarp => Searcher::EdmondsKarp(EdmondsKarp::default()),
            Strategy::Dinic(traversal) => Searcher::Dinic(Dinic::new(*traversal)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown max flow strategy '{0}'")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ford-fulkerson" | "naive" => Ok(Strategy::FordFulkerson),
            "edmonds-karp" | "bfs" => Ok(Strategy::EdmondsKarp),
            "dinic" => Ok(Strategy::Dinic(Traversal::Iterative)),
            "dinic-recursive" => Ok(Strategy::Dinic(Traversal::Recursive)),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum Searcher {
    FordFulkerson(FordFulkerson),
    EdmondsKarp(EdmondsKarp),
    Dinic(Dinic),
}

impl<Flow> AugmentingStrategy<Flow> for Searcher
where
    Flow: NumAssign + Signed + Bounded + Ord + Copy,
{
    fn search(&mut self, network: &ResidualNetwork<Flow>, source: usize, sink: usize) -> bool {
        match self {
            Searcher::FordFulkerson(s) => s.search(network, source, sink),
            Searcher::EdmondsKarp(s) => s.search(network, source, sink),
            Searcher::Dinic(s) => s.search(network, source, sink),
        }
    }

    fn augment(&mut self, network: &mut ResidualNetwork<Flow>, source: usize, sink: usize) -> Augmentation<Flow> {
        match self {
            Searcher::FordFulkerson(s) => s.augment(network, source, sink),
            Searcher::EdmondsKarp(s) => s.augment(network, source, sink),
            Searcher::Dinic(s) => s.augment(network, source, sink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("BFS".parse::<Strategy>(), Ok(Strategy::EdmondsKarp));
        assert_eq!(" naive ".parse::<Strategy>(), Ok(Strategy::FordFulkerson));
        assert_eq!("push-relabel".parse::<Strategy>().unwrap_err().to_string(), "unknown max flow strategy 'push-relabel'");
    }
}
