pub mod dinic;
pub mod edmonds_karp;
pub mod ford_fulkerson;
pub mod path_finder;
pub mod residual_network;
pub mod solver;
pub mod status;
pub mod strategy;

pub use residual_network::{ArcId, ResidualArc, ResidualNetwork};
pub use solver::MaxFlowSolver;
pub use status::{MaxFlowStatus, Phase};
pub use strategy::{Strategy, Traversal};
