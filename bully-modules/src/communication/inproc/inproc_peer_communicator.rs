use crossbeam_channel::{Receiver, Sender};
use parking_lot::RwLock;

use bully::{new_err, BullyError, ElectionEvent, NodeName, PeerRequestChannels, PeerRequestHandler};

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Basic in-memory implementation of the PeerRequestHandler and PeerRequestChannels traits.
/// Events to or from a disconnected node are dropped, the same way a lost network message is.
#[derive(Clone, Debug)]
pub struct InProcPeerCommunicator {
    event_channels: HashMap<NodeName, (Sender<ElectionEvent>, Receiver<ElectionEvent>)>,
    disconnected: Arc<RwLock<HashSet<NodeName>>>,
}

impl InProcPeerCommunicator {
    /// Create new instance of the InProcPeerCommunicator with a channel per node.
    pub fn new(nodes: Vec<NodeName>) -> InProcPeerCommunicator {
        let mut communicator = InProcPeerCommunicator {
            event_channels: HashMap::new(),
            disconnected: Arc::new(RwLock::new(HashSet::new())),
        };

        for node_name in nodes {
            communicator.add_node_communication(node_name);
        }

        communicator
    }

    fn add_node_communication(&mut self, node_name: NodeName) {
        self.event_channels
            .insert(node_name, crossbeam_channel::unbounded());
    }

    /// Drops all events sent to or by the node until it is reconnected.
    pub fn disconnect(&self, node_name: &NodeName) {
        self.disconnected.write().insert(node_name.clone());
    }

    pub fn reconnect(&self, node_name: &NodeName) {
        self.disconnected.write().remove(node_name);
    }

    fn is_disconnected(&self, node_name: &NodeName) -> bool {
        self.disconnected.read().contains(node_name)
    }
}

impl PeerRequestHandler for InProcPeerCommunicator {
    fn send_event(&self, destination_node: &NodeName, event: ElectionEvent) -> Result<(), BullyError> {
        if self.is_disconnected(destination_node) {
            return new_err(
                format!("Destination Node {} disconnected", destination_node),
                String::new(),
            );
        }
        if let Some(origin) = event.origin() {
            if self.is_disconnected(origin) {
                return new_err(format!("Source Node {} disconnected", origin), String::new());
            }
        }

        let channel = match self.event_channels.get(destination_node) {
            Some(channel) => channel,
            None => {
                return new_err(
                    format!("Destination Node {} unknown", destination_node),
                    String::new(),
                )
            }
        };

        trace!("Destination Node {} Sending event {}", destination_node, event);

        if let Err(err) = channel.0.send(event) {
            return new_err(
                format!("Cannot send event. Destination Node {}", destination_node),
                err.to_string(),
            );
        }

        Ok(())
    }
}

impl PeerRequestChannels for InProcPeerCommunicator {
    fn event_rx(&self, node_name: &NodeName) -> Receiver<ElectionEvent> {
        match self.event_channels.get(node_name) {
            Some(channel) => channel.1.clone(),
            None => {
                warn!("No channel for Node {}. Inbound events disabled", node_name);
                crossbeam_channel::never()
            }
        }
    }
}
