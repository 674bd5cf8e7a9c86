use std::cmp::Ordering;
use std::time::Duration;

use crate::communication::peers::{PeerRequestChannels, PeerRequestHandler};
use crate::errors::BullyError;
use crate::node::state::NodeName;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeTimings {
    /// Base interval of the leader ping timeout.
    pub timeout_duration: Duration,

    /// Delay before the first leader ping of a non-leader node.
    pub initial_ping_delay: Duration,
}

impl Default for NodeTimings {
    fn default() -> Self {
        NodeTimings {
            timeout_duration: Duration::from_millis(500),
            initial_ping_delay: Duration::from_millis(0),
        }
    }
}

/// Membership provider.
pub trait Cluster: Send + Sync + Clone + 'static {
    /// Currently reachable peers of the node, the node itself excluded.
    fn reachable_peers(&self, node_name: &NodeName) -> Vec<NodeName>;
}

/// Total order over the node identities. Fails for names that carry no valid identity.
pub trait NodeOrdering: Send + 'static {
    fn compare(&self, left: &NodeName, right: &NodeName) -> Result<Ordering, BullyError>;
}

#[derive(Clone, Debug)]
pub struct NodeConfiguration<Pc, Cl, No>
where
    Pc: PeerRequestHandler + PeerRequestChannels,
    Cl: Cluster,
    No: NodeOrdering,
{
    pub node_name: NodeName,
    pub initial_leader: NodeName,
    pub cluster_configuration: Cl,
    pub peer_communicator: Pc,
    pub node_ordering: No,
    pub timings: NodeTimings,
}
