#[macro_use]
extern crate log;
extern crate chrono;
extern crate env_logger;

use std::io::Write;
use std::thread;
use std::time::Duration;

use chrono::prelude::{DateTime, Local};

extern crate bully;
extern crate bully_modules;

use bully::{ElectionNode, NodeConfiguration, NodeName, NodeTimings};
use bully_modules::{ClusterConfiguration, InProcPeerCommunicator, NumericPrefixOrdering};

fn init_logger() {
    env_logger::builder()
        .format(|buf, record| {
            let now: DateTime<Local> = Local::now();
            writeln!(buf, "{:5}: {} - {}", record.level(), now.format("%H:%M:%S.%3f").to_string(), record.args())
        })
        .init();
}

fn main() {
    init_logger();

    let all_nodes: Vec<NodeName> = vec!["1@host-a".into(), "2@host-b".into(), "3@host-c".into()];
    let initial_leader = all_nodes[2].clone();

    let cluster_configuration = ClusterConfiguration::new(all_nodes.clone());
    let peer_communicator = InProcPeerCommunicator::new(all_nodes.clone());

    info!("Cluster started. Initial leader: {}", initial_leader);

    let mut nodes: Vec<ElectionNode> = Vec::new();
    for node_name in all_nodes.iter() {
        let node_config = NodeConfiguration {
            node_name: node_name.clone(),
            initial_leader: initial_leader.clone(),
            cluster_configuration: cluster_configuration.clone(),
            peer_communicator: peer_communicator.clone(),
            node_ordering: NumericPrefixOrdering,
            timings: get_node_timings(),
        };

        match bully::start_node(node_config) {
            Ok(node) => nodes.push(node),
            Err(err) => {
                error!("Cannot start node {}: {}", node_name, err);
                return;
            }
        }
    }

    thread::sleep(Duration::from_secs(2));
    print_cluster_state(&nodes);

    let stopped_leader = nodes.pop().expect("cluster has nodes");
    let stopped_leader_name = stopped_leader.node_name().clone();
    info!("Stopping the leader {}", stopped_leader_name);
    peer_communicator.disconnect(&stopped_leader_name);
    cluster_configuration.disconnect(&stopped_leader_name);
    stopped_leader.stop();

    thread::sleep(Duration::from_secs(3));
    print_cluster_state(&nodes);

    for node in nodes {
        node.stop();
    }
}

fn print_cluster_state(nodes: &[ElectionNode]) {
    for node in nodes {
        info!("Node {}: {}", node.node_name(), node.current_state());
    }
}

fn get_node_timings() -> NodeTimings {
    NodeTimings {
        timeout_duration: Duration::from_millis(100),
        initial_ping_delay: Duration::from_millis(0),
    }
}
