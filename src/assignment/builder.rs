use crate::assignment::input::AssignmentSource;
use crate::error::FlowError;
use crate::maximum_flow::residual_network::ResidualNetwork;

pub type Capacity = i64;

// 0: source, 1..=A: applicants, A+1..=A+J: jobs, A+J+1: sink
#[derive(Debug, Clone)]
pub struct AssignmentNetwork {
    pub network: ResidualNetwork<Capacity>,
    num_applicants: usize,
    num_jobs: usize,
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), FlowError> {
    if expected != actual {
        return Err(FlowError::DimensionMismatch { what, expected, actual });
    }
    Ok(())
}

impl AssignmentNetwork {
    pub fn build<S>(source: &S) -> Result<Self, FlowError>
    where
        S: AssignmentSource + ?Sized,
    {
        let matrix = source.feasibility();
        let num_applicants = matrix.len();
        // with no rows the job count can only come from the labels
        let num_jobs = matrix.first().map_or(source.job_ids().len(), |row| row.len());

        check_len("applicant names", num_applicants, source.applicant_names().len())?;
        check_len("applicant degrees", num_applicants, source.applicant_degrees().len())?;
        check_len("job ids", num_jobs, source.job_ids().len())?;
        check_len("job qualifications", num_jobs, source.job_qualifications().len())?;

        Self::with_jobs(matrix, num_jobs)
    }

    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Self, FlowError> {
        Self::with_jobs(matrix, matrix.first().map_or(0, |row| row.len()))
    }

    fn with_jobs(matrix: &[Vec<u8>], num_jobs: usize) -> Result<Self, FlowError> {
        for row in matrix.iter() {
            check_len("matrix row", num_jobs, row.len())?;
        }

        let num_applicants = matrix.len();
        let mut assignment = Self { network: ResidualNetwork::new(num_applicants + num_jobs + 2), num_applicants, num_jobs };
        if num_applicants == 0 || num_jobs == 0 {
            return Ok(assignment);
        }

        let (source, sink) = (assignment.source(), assignment.sink());
        let applicants: Vec<usize> = (0..num_applicants).map(|i| assignment.applicant_node(i)).collect();
        let jobs: Vec<usize> = (0..num_jobs).map(|j| assignment.job_node(j)).collect();

        for &u in applicants.iter() {
            assignment.network.add_arc_pair(source, u, 1)?;
        }
        for &v in jobs.iter() {
            assignment.network.add_arc_pair(v, sink, 1)?;
        }
        for (row, &u) in matrix.iter().zip(applicants.iter()) {
            for (&feasible, &v) in row.iter().zip(jobs.iter()) {
                if feasible == 1 {
                    assignment.network.add_arc_pair(u, v, 1)?;
                }
            }
        }

        Ok(assignment)
    }

    #[inline]
    pub fn num_applicants(&self) -> usize {
        self.num_applicants
    }

    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    #[inline]
    pub fn source(&self) -> usize {
        0
    }

    #[inline]
    pub fn sink(&self) -> usize {
        self.num_applicants + self.num_jobs + 1
    }

    #[inline]
    pub fn applicant_node(&self, applicant: usize) -> usize {
        applicant + 1
    }

    #[inline]
    pub fn job_node(&self, job: usize) -> usize {
        self.num_applicants + 1 + job
    }

    pub fn job_of_node(&self, node: usize) -> Option<usize> {
        (self.num_applicants + 1..=self.num_applicants + self.num_jobs).contains(&node).then(|| node - self.num_applicants - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::input::AssignmentInput;

    #[test]
    fn layout() {
        let assignment = AssignmentNetwork::from_matrix(&[vec![1, 0, 0], vec![1, 1, 0]]).unwrap();
        assert_eq!(assignment.network.num_nodes(), 7);
        assert_eq!(assignment.source(), 0);
        assert_eq!(assignment.sink(), 6);
        assert_eq!(assignment.applicant_node(1), 2);
        assert_eq!(assignment.job_node(0), 3);
        assert_eq!(assignment.job_of_node(5), Some(2));
        assert_eq!(assignment.job_of_node(2), None);
        assert_eq!(assignment.job_of_node(6), None);
        // 2 source arcs, 3 sink arcs, 3 feasible pairs
        assert_eq!(assignment.network.num_arc_pairs(), 8);

        let applicant = assignment.network.arcs(assignment.applicant_node(1));
        let jobs: Vec<usize> = applicant.iter().filter(|arc| arc.capacity > 0).map(|arc| arc.to).collect();
        assert_eq!(jobs, vec![3, 4]);
    }

    #[test]
    fn label_length_must_match() {
        let mut input = AssignmentInput::unlabelled(vec![vec![1, 0], vec![0, 1]]);
        input.job_qualifications.pop();
        let err = AssignmentNetwork::build(&input).unwrap_err();
        assert_eq!(err, FlowError::DimensionMismatch { what: "job qualifications", expected: 2, actual: 1 });

        let mut input = AssignmentInput::unlabelled(vec![vec![1, 0], vec![0, 1]]);
        input.applicant_names.push("extra".to_string());
        let err = AssignmentNetwork::build(&input).unwrap_err();
        assert_eq!(err, FlowError::DimensionMismatch { what: "applicant names", expected: 2, actual: 3 });
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let err = AssignmentNetwork::from_matrix(&[vec![1, 0], vec![1]]).unwrap_err();
        assert_eq!(err, FlowError::DimensionMismatch { what: "matrix row", expected: 2, actual: 1 });
    }

    #[test]
    fn empty_sides_have_no_arcs() {
        let mut input = AssignmentInput::unlabelled(Vec::new());
        input.job_ids = vec!["j0".to_string(), "j1".to_string()];
        input.job_qualifications = vec![String::new(), String::new()];
        let assignment = AssignmentNetwork::build(&input).unwrap();
        assert_eq!(assignment.num_jobs(), 2);
        assert_eq!(assignment.network.num_arc_pairs(), 0);

        let assignment = AssignmentNetwork::from_matrix(&[vec![], vec![]]).unwrap();
        assert_eq!(assignment.num_applicants(), 2);
        assert_eq!(assignment.network.num_arc_pairs(), 0);
    }
}
