use rayon::prelude::*;

use crate::communication::peers::PeerRequestHandler;
use crate::errors::{new_multiple_err, BullyError};
use crate::leadership::ElectionEvent;
use crate::node::state::NodeName;

/// Sends the event to every peer in parallel. Failed deliveries are collected into one error;
/// successful ones are not affected by them.
pub fn notify_peers<Pc>(
    event: ElectionEvent,
    node_name: &NodeName,
    peers: Vec<NodeName>,
    peer_communicator: &Pc,
) -> Result<(), BullyError>
where
    Pc: PeerRequestHandler,
{
    if peers.is_empty() {
        return Ok(());
    }

    let errors: Vec<BullyError> = peers
        .into_par_iter()
        .map(|peer| {
            trace!("Node {} sending {} to {}", node_name, event, peer);
            peer_communicator.send_event(&peer, event.clone())
        })
        .filter_map(|result| result.err())
        .collect();

    if !errors.is_empty() {
        return new_multiple_err(format!("Node {} cannot notify peers", node_name), errors);
    }

    Ok(())
}
