use std::cmp::Ordering;

use crate::common::peer_notifier::notify_peers;
use crate::communication::peers::PeerRequestHandler;
use crate::leadership::ElectionEvent;
use crate::node::configuration::NodeOrdering;
use crate::node::state::NodeName;

pub struct StartElectionParams<'a, Pc, No>
where
    Pc: PeerRequestHandler,
    No: NodeOrdering,
{
    pub node_name: &'a NodeName,
    pub peers: Vec<NodeName>,
    pub peer_communicator: &'a Pc,
    pub node_ordering: &'a No,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElectionOutcome {
    /// No reachable peer has a higher identity: the node takes the leadership.
    Won,

    /// The election was announced to the higher-identity peers.
    Announced,
}

/// Reachable peers with an identity strictly greater than the node's identity. Peers that cannot
/// be compared are skipped.
pub fn higher_identity_peers<No: NodeOrdering>(
    node_name: &NodeName,
    peers: &[NodeName],
    node_ordering: &No,
) -> Vec<NodeName> {
    peers
        .iter()
        .filter(|peer| match node_ordering.compare(peer, node_name) {
            Ok(ordering) => ordering == Ordering::Greater,
            Err(err) => {
                warn!("Node {} skips peer {} in election: {}", node_name, peer, err);
                false
            }
        })
        .cloned()
        .collect()
}

pub fn start_election<Pc, No>(params: StartElectionParams<Pc, No>) -> ElectionOutcome
where
    Pc: PeerRequestHandler,
    No: NodeOrdering,
{
    let higher_peers = higher_identity_peers(params.node_name, &params.peers, params.node_ordering);

    if higher_peers.is_empty() {
        info!("Node {} has no higher peers. Announcing itself as the leader", params.node_name);

        let notify_result = notify_peers(
            ElectionEvent::NewLeader(params.node_name.clone()),
            params.node_name,
            params.peers,
            params.peer_communicator,
        );
        if let Err(err) = notify_result {
            warn!("New leader announcement incomplete: {}", err);
        }

        return ElectionOutcome::Won;
    }

    info!(
        "Node {} announces election to higher peers: {:?}",
        params.node_name, higher_peers
    );

    let notify_result = notify_peers(
        ElectionEvent::AnnounceElection(params.node_name.clone()),
        params.node_name,
        higher_peers,
        params.peer_communicator,
    );
    if let Err(err) = notify_result {
        warn!("Election announcement incomplete: {}", err);
    }

    ElectionOutcome::Announced
}
