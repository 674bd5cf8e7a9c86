#![warn(missing_debug_implementations, unsafe_code)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate crossbeam_channel;
#[macro_use]
extern crate derive_more;

mod common;
mod communication;
mod errors;
mod leadership;
mod node;

pub use communication::peers::{PeerRequestChannels, PeerRequestHandler};
pub use errors::{new_err, BullyError};
pub use leadership::election::higher_identity_peers;
pub use leadership::status::node_leadership_fsm::NodeLeadershipFsm;
pub use leadership::status::FsmStatus;
pub use leadership::watchdog::event_scheduler::ChannelEventScheduler;
pub use leadership::{ping_leader_timeout, ElectionEvent, EventScheduler, PING_LEADER_TIMEOUT_FACTOR};
pub use node::configuration::{Cluster, NodeConfiguration, NodeOrdering, NodeTimings};
pub use node::state::{ElectionPhase, ElectionState, NodeName};
pub use node::ElectionNode;

/// Starts the election worker of the node. Fails when the node name carries no valid identity.
pub fn start_node<Pc, Cl, No>(node_config: NodeConfiguration<Pc, Cl, No>) -> Result<ElectionNode, BullyError>
where
    Pc: PeerRequestHandler + PeerRequestChannels,
    Cl: Cluster,
    No: NodeOrdering,
{
    node::start(node_config)
}
