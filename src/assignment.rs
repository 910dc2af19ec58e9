pub mod builder;
pub mod extractor;
pub mod input;

pub use builder::{AssignmentNetwork, Capacity};
pub use extractor::{Match, MatchedRow, HEADER};
pub use input::{AssignmentInput, AssignmentSource};

use crate::error::FlowError;
use crate::maximum_flow::solver::MaxFlowSolver;
use crate::maximum_flow::status::MaxFlowStatus;
use crate::maximum_flow::strategy::Strategy;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub total_flow: Capacity,
    pub matches: Vec<Match>,
    pub status: MaxFlowStatus<Capacity>,
}

impl Assignment {
    pub fn rows<'a, S>(&self, source: &'a S) -> Vec<MatchedRow<'a>>
    where
        S: AssignmentSource + ?Sized,
    {
        self.matches.iter().filter_map(|m| m.row(source)).collect()
    }
}

pub fn assign<S>(source: &S, strategy: Strategy) -> Result<Assignment, FlowError>
where
    S: AssignmentSource + ?Sized,
{
    let mut assignment = AssignmentNetwork::build(source)?;
    let (s, t) = (assignment.source(), assignment.sink());
    let status = MaxFlowSolver::new(strategy).solve(&mut assignment.network, s, t)?;
    let matches = assignment.matches();

    debug!("{}: {} applicants, {} jobs, {} matched", strategy, assignment.num_applicants(), assignment.num_jobs(), matches.len());
    Ok(Assignment { total_flow: status.value, matches, status })
}
