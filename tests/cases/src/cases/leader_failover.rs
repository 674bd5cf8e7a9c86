use bully::{ElectionPhase, NodeName};

use crate::steps;

pub fn run() {
    let node_names = steps::names(&["1@host-a", "2@host-b", "3@host-c"]);
    let mut cluster = steps::cluster::start_initial_cluster(
        node_names.clone(),
        node_names,
        NodeName::from("3@host-c"),
    );

    // initial leader answers the pings
    steps::sleep_ms(300);
    assert!(cluster.wait_for_leader("3@host-c"));
    assert_eq!(ElectionPhase::Leading, cluster.state("3@host-c").phase());

    cluster.kill("3@host-c");

    // node 2 has no higher peers left, node 1 defers to node 2
    assert!(cluster.wait_for_leader("2@host-b"));
    assert_eq!(vec![NodeName::from("2@host-b")], cluster.leaders());
    assert_eq!(&NodeName::from("2@host-b"), cluster.state("1@host-a").believed_leader());

    cluster.terminate();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_leader_failover() {
        crate::cases::leader_failover::run()
    }
}
