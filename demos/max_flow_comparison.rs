use flow_assignment::assignment::{assign, AssignmentInput, HEADER};
use flow_assignment::maximum_flow::{MaxFlowSolver, ResidualNetwork, Strategy};
use log::info;
use std::env;
use std::process;
use std::time::Instant;

fn water_network() -> ResidualNetwork<i32> {
    let mut network = ResidualNetwork::new(6);
    for &(from, to, capacity) in [(0, 1, 10), (0, 2, 10), (1, 2, 2), (1, 3, 4), (1, 4, 8), (2, 4, 9), (3, 5, 10), (4, 3, 6), (4, 5, 10)].iter() {
        network.add_arc_pair(from, to, capacity).expect("static arcs are valid");
    }
    network
}

fn job_board() -> AssignmentInput {
    let names = ["Ada", "Brook", "Casey", "Devon"];
    let degrees = ["BSc", "MSc", "PhD", "BSc"];
    let job_ids = ["J-100", "J-200", "J-300"];
    let qualifications = ["BSc or MSc", "MSc or PhD", "PhD"];
    AssignmentInput {
        feasibility: degrees.iter().map(|d| qualifications.iter().map(|q| u8::from(q.contains(*d))).collect()).collect(),
        applicant_names: names.iter().map(|s| s.to_string()).collect(),
        applicant_degrees: degrees.iter().map(|s| s.to_string()).collect(),
        job_ids: job_ids.iter().map(|s| s.to_string()).collect(),
        job_qualifications: qualifications.iter().map(|s| s.to_string()).collect(),
    }
}

fn main() {
    env_logger::init();

    let strategies: Vec<Strategy> = match env::args().skip(1).map(|arg| arg.parse()).collect::<Result<Vec<_>, _>>() {
        Ok(strategies) if strategies.is_empty() => Strategy::ALL.to_vec(),
        Ok(strategies) => strategies,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    println!("water distribution network");
    for &strategy in strategies.iter() {
        let mut network = water_network();
        let start = Instant::now();
        let status = MaxFlowSolver::new(strategy).solve(&mut network, 0, 5).expect("terminals are in range");
        println!("{:>16}: max flow {} ({} phases, {} augmentations) in {:?}", strategy, status.value, status.phases, status.augmentations, start.elapsed());
    }

    println!();
    println!("job matching");
    let input = job_board();
    for &strategy in strategies.iter() {
        let start = Instant::now();
        match assign(&input, strategy) {
            Ok(assignment) => {
                println!("{:>16}: {} matched in {:?}", strategy, assignment.total_flow, start.elapsed());
                info!("{}", HEADER.join(","));
                for row in assignment.rows(&input) {
                    info!("{}", row.fields().join(","));
                }
            }
            Err(e) => {
                eprintln!("{}: {}", strategy, e);
                process::exit(1);
            }
        }
    }
}
