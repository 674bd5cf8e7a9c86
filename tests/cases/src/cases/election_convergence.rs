use bully::NodeName;

use crate::steps;

pub fn run() {
    let running = steps::names(&["4@d", "1@a", "5@e", "3@c", "2@b"]);
    let mut all_nodes = running.clone();
    all_nodes.push(NodeName::from("0@gone"));

    // the initial leader never started
    let mut cluster = steps::cluster::start_initial_cluster(all_nodes, running, NodeName::from("0@gone"));
    cluster.kill("0@gone");

    assert!(cluster.wait_for_leader("5@e"));
    assert_eq!(vec![NodeName::from("5@e")], cluster.leaders());

    steps::sleep_ms(500);

    assert!(cluster.wait_for_leader("5@e"));
    assert_eq!(vec![NodeName::from("5@e")], cluster.leaders());

    cluster.terminate();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_election_convergence() {
        crate::cases::election_convergence::run()
    }
}
