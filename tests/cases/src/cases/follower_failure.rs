use bully::{ElectionPhase, NodeName};

use crate::steps;

pub fn run() {
    let node_names = steps::names(&["1@host-a", "2@host-b", "3@host-c"]);
    let mut cluster = steps::cluster::start_initial_cluster(
        node_names.clone(),
        node_names,
        NodeName::from("3@host-c"),
    );

    steps::sleep_ms(300);
    assert!(cluster.wait_for_leader("3@host-c"));

    cluster.kill("1@host-a");

    // a lost follower does not trigger an election
    steps::sleep_ms(1000);

    assert!(cluster.wait_for_leader("3@host-c"));
    assert_eq!(ElectionPhase::Leading, cluster.state("3@host-c").phase());

    cluster.terminate();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_follower_failure() {
        crate::cases::follower_failure::run()
    }
}
