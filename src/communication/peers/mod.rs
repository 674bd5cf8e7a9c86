use crossbeam_channel::Receiver;

use crate::errors::BullyError;
use crate::leadership::ElectionEvent;
use crate::node::state::NodeName;

/// Outbound side of the peer transport. Delivery is fire-and-forget: an error only reports that
/// the event was dropped, the sender never waits for an answer.
pub trait PeerRequestHandler: Send + Sync + Clone + 'static {
    fn send_event(&self, destination_node: &NodeName, event: ElectionEvent) -> Result<(), BullyError>;
}

/// Inbound side of the peer transport.
pub trait PeerRequestChannels {
    fn event_rx(&self, node_name: &NodeName) -> Receiver<ElectionEvent>;
}
