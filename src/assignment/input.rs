// row i = applicant i, column j = job j, 1 = feasible
pub trait AssignmentSource {
    fn feasibility(&self) -> &[Vec<u8>];
    fn applicant_names(&self) -> &[String];
    fn applicant_degrees(&self) -> &[String];
    fn job_ids(&self) -> &[String];
    fn job_qualifications(&self) -> &[String];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentInput {
    pub feasibility: Vec<Vec<u8>>,
    pub applicant_names: Vec<String>,
    pub applicant_degrees: Vec<String>,
    pub job_ids: Vec<String>,
    pub job_qualifications: Vec<String>,
}

impl AssignmentInput {
    pub fn unlabelled(feasibility: Vec<Vec<u8>>) -> Self {
        let num_applicants = feasibility.len();
        let num_jobs = feasibility.first().map_or(0, |row| row.len());
        Self {
            feasibility,
            applicant_names: (0..num_applicants).map(|i| format!("applicant{}", i)).collect(),
            applicant_degrees: vec![String::new(); num_applicants],
            job_ids: (0..num_jobs).map(|j| format!("job{}", j)).collect(),
            job_qualifications: vec![String::new(); num_jobs],
        }
    }
}

impl AssignmentSource for AssignmentInput {
    fn feasibility(&self) -> &[Vec<u8>] {
        &self.feasibility
    }

    fn applicant_names(&self) -> &[String] {
        &self.applicant_names
    }

    fn applicant_degrees(&self) -> &[String] {
        &self.applicant_degrees
    }

    fn job_ids(&self) -> &[String] {
        &self.job_ids
    }

    fn job_qualifications(&self) -> &[String] {
        &self.job_qualifications
    }
}
