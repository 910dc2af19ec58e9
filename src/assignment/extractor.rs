use crate::assignment::builder::AssignmentNetwork;
use crate::assignment::input::AssignmentSource;

pub const HEADER: [&str; 4] = ["name", "degree", "JobId", "Qualification"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Match {
    pub applicant: usize,
    pub job: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedRow<'a> {
    pub name: &'a str,
    pub degree: &'a str,
    pub job_id: &'a str,
    pub qualification: &'a str,
}

impl<'a> MatchedRow<'a> {
    pub fn fields(&self) -> [&'a str; 4] {
        [self.name, self.degree, self.job_id, self.qualification]
    }
}

impl Match {
    pub fn row<'a, S>(&self, source: &'a S) -> Option<MatchedRow<'a>>
    where
        S: AssignmentSource + ?Sized,
    {
        Some(MatchedRow {
            name: source.applicant_names().get(self.applicant)?,
            degree: source.applicant_degrees().get(self.applicant)?,
            job_id: source.job_ids().get(self.job)?,
            qualification: source.job_qualifications().get(self.job)?,
        })
    }
}

impl AssignmentNetwork {
    // unit capacities: at most one job arc per applicant carries flow
    pub fn matches(&self) -> Vec<Match> {
        let mut matches = Vec::new();
        for applicant in 0..self.num_applicants() {
            for arc in self.network.arcs(self.applicant_node(applicant)).iter() {
                if arc.flow <= 0 {
                    continue;
                }
                if let Some(job) = self.job_of_node(arc.to) {
                    matches.push(Match { applicant, job });
                }
            }
        }
        matches
    }
}
