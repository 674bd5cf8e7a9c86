#[macro_use]
extern crate log;
extern crate bully;
extern crate crossbeam_channel;

mod cluster;
mod communication;
mod ordering;

pub use cluster::ClusterConfiguration;
pub use communication::inproc::inproc_peer_communicator::InProcPeerCommunicator;
pub use ordering::{LexicographicOrdering, NumericPrefixOrdering};
