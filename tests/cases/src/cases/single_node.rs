use bully::{ElectionPhase, NodeName};

use crate::steps;

pub fn run() {
    let all_nodes = steps::names(&["1@solo", "2@gone"]);
    let running = steps::names(&["1@solo"]);

    let mut cluster = steps::cluster::start_initial_cluster(all_nodes, running, NodeName::from("2@gone"));
    cluster.kill("2@gone");

    // lower node takes over once the configured leader stays silent
    assert!(cluster.wait_for_leader("1@solo"));
    assert_eq!(ElectionPhase::Leading, cluster.state("1@solo").phase());
    assert_eq!(&NodeName::from("1@solo"), cluster.state("1@solo").believed_leader());

    cluster.terminate();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_single_node() {
        crate::cases::single_node::run()
    }
}
