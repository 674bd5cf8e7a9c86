use bully::{Cluster, NodeName};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Basic in-memory implementation of the Cluster trait. Keeps the cluster members and their
/// reachability. Clones share the same membership view.
#[derive(Clone, Debug)]
pub struct ClusterConfiguration {
    cluster: Arc<Mutex<ClusterConfigurationInternal>>,
}

impl Cluster for ClusterConfiguration {
    fn reachable_peers(&self, node_name: &NodeName) -> Vec<NodeName> {
        let cluster = self.cluster.lock();

        cluster.reachable_peers(node_name)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct ClusterConfigurationInternal {
    nodes: BTreeMap<NodeName, bool>,
}

impl ClusterConfigurationInternal {
    fn new(nodes: Vec<NodeName>) -> ClusterConfigurationInternal {
        let mut cluster_config = ClusterConfigurationInternal {
            nodes: BTreeMap::new(),
        };

        for node in nodes {
            cluster_config.add_peer(node);
        }

        cluster_config
    }

    fn add_peer(&mut self, peer: NodeName) {
        if self.nodes.contains_key(&peer) {
            warn!("Cluster configuration - add duplicate peer:{}", peer)
        }
        self.nodes.insert(peer, true);
    }

    fn set_reachable(&mut self, peer: &NodeName, reachable: bool) {
        match self.nodes.get_mut(peer) {
            Some(peer_reachable) => *peer_reachable = reachable,
            None => warn!("Cluster configuration - unknown peer:{}", peer),
        }
    }

    fn all_nodes(&self) -> Vec<NodeName> {
        self.nodes.keys().cloned().collect()
    }

    fn reachable_peers(&self, node_name: &NodeName) -> Vec<NodeName> {
        self.nodes
            .iter()
            .filter(|(peer, reachable)| **reachable && *peer != node_name)
            .map(|(peer, _)| peer.clone())
            .collect()
    }
}

impl ClusterConfiguration {
    /// Creates an instance of ClusterConfiguration with all provided nodes reachable.
    pub fn new(nodes: Vec<NodeName>) -> ClusterConfiguration {
        let cluster_config = ClusterConfigurationInternal::new(nodes);

        ClusterConfiguration {
            cluster: Arc::new(Mutex::new(cluster_config)),
        }
    }

    /// Adds a reachable node to the cluster configuration.
    pub fn add_peer(&self, peer: NodeName) {
        self.cluster.lock().add_peer(peer);
    }

    /// Marks the node as unreachable. It stays a member and can be reconnected.
    pub fn disconnect(&self, peer: &NodeName) {
        info!("Cluster configuration - node {} disconnected", peer);
        self.cluster.lock().set_reachable(peer, false);
    }

    pub fn reconnect(&self, peer: &NodeName) {
        info!("Cluster configuration - node {} reconnected", peer);
        self.cluster.lock().set_reachable(peer, true);
    }

    pub fn all_nodes(&self) -> Vec<NodeName> {
        self.cluster.lock().all_nodes()
    }
}
