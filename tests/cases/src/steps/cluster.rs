use bully::{ElectionNode, ElectionPhase, ElectionState, NodeConfiguration, NodeName};
use bully_modules::{ClusterConfiguration, InProcPeerCommunicator, NumericPrefixOrdering};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::steps;

pub struct CaseCluster {
    pub cluster_configuration: ClusterConfiguration,
    pub peer_communicator: InProcPeerCommunicator,
    pub nodes: BTreeMap<NodeName, ElectionNode>,
}

/// Starts a worker for every node in `running`. Nodes listed only in `all_nodes` are cluster
/// members that never answer.
pub fn start_initial_cluster(all_nodes: Vec<NodeName>, running: Vec<NodeName>, initial_leader: NodeName) -> CaseCluster {
    let cluster_configuration = ClusterConfiguration::new(all_nodes.clone());
    let peer_communicator = InProcPeerCommunicator::new(all_nodes);

    let mut nodes = BTreeMap::new();
    for node_name in running {
        let node_config = NodeConfiguration {
            node_name: node_name.clone(),
            initial_leader: initial_leader.clone(),
            cluster_configuration: cluster_configuration.clone(),
            peer_communicator: peer_communicator.clone(),
            node_ordering: NumericPrefixOrdering,
            timings: steps::node_timings(),
        };

        let node = bully::start_node(node_config).expect("node started");
        nodes.insert(node_name, node);
    }

    CaseCluster {
        cluster_configuration,
        peer_communicator,
        nodes,
    }
}

impl CaseCluster {
    pub fn state(&self, node_name: &str) -> ElectionState {
        self.nodes[&NodeName::from(node_name)].current_state()
    }

    pub fn leaders(&self) -> Vec<NodeName> {
        self.nodes
            .values()
            .filter(|node| node.current_state().is_leader())
            .map(|node| node.node_name().clone())
            .collect()
    }

    /// Stops the node worker and makes the node silent and unreachable for the others.
    pub fn kill(&mut self, node_name: &str) {
        let node_name = NodeName::from(node_name);
        info!("--Killing node {}", node_name);

        self.peer_communicator.disconnect(&node_name);
        self.cluster_configuration.disconnect(&node_name);
        if let Some(node) = self.nodes.remove(&node_name) {
            node.stop();
        }
    }

    /// True when exactly the expected node leads and every other running node follows it.
    pub fn is_settled_on(&self, leader: &str) -> bool {
        let leader = NodeName::from(leader);

        self.nodes.values().all(|node| {
            let state = node.current_state();
            if *node.node_name() == leader {
                state.is_leader()
            } else {
                *state.believed_leader() == leader
                    && (state.phase() == ElectionPhase::Pinged || state.phase() == ElectionPhase::Pinging)
            }
        })
    }

    pub fn wait_for_leader(&self, leader: &str) -> bool {
        let settled = steps::wait_for(Duration::from_secs(5), || self.is_settled_on(leader));
        if !settled {
            for node in self.nodes.values() {
                error!("Node {}: {}", node.node_name(), node.current_state());
            }
        }

        settled
    }

    pub fn terminate(self) {
        for (_, node) in self.nodes {
            node.stop();
        }
    }
}
