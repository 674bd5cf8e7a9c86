use std::fmt;
use std::time::Duration;

use crate::node::state::NodeName;

pub mod election;
pub mod status;
pub mod watchdog;

/// The leader ping timeout is armed for this many base timeout durations.
pub const PING_LEADER_TIMEOUT_FACTOR: u32 = 4;

/// Leader election event. The first four variants travel between peers, the timeout is produced
/// by the node's own timer.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElectionEvent {
    Ping(NodeName),
    Pong(NodeName),
    AnnounceElection(NodeName),
    NewLeader(NodeName),
    PingLeaderTimeout,
    Stop,
}

impl ElectionEvent {
    /// Node that produced the event. None for the local events.
    pub fn origin(&self) -> Option<&NodeName> {
        match self {
            ElectionEvent::Ping(from)
            | ElectionEvent::Pong(from)
            | ElectionEvent::AnnounceElection(from)
            | ElectionEvent::NewLeader(from) => Some(from),
            ElectionEvent::PingLeaderTimeout | ElectionEvent::Stop => None,
        }
    }
}

impl fmt::Display for ElectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ElectionEvent::Ping(from) => write!(f, "Ping from {}", from),
            ElectionEvent::Pong(from) => write!(f, "Pong from {}", from),
            ElectionEvent::AnnounceElection(from) => write!(f, "AnnounceElection from {}", from),
            ElectionEvent::NewLeader(leader) => write!(f, "NewLeader {}", leader),
            ElectionEvent::PingLeaderTimeout => write!(f, "PingLeaderTimeout"),
            ElectionEvent::Stop => write!(f, "Stop"),
        }
    }
}

/// One-shot delivery of an event back to the node's own queue after the delay.
pub trait EventScheduler: Send + 'static {
    fn schedule(&self, delay: Duration, event: ElectionEvent);
}

/// Delay before the ping leader timeout fires.
pub fn ping_leader_timeout(timeout_duration: Duration) -> Duration {
    timeout_duration * PING_LEADER_TIMEOUT_FACTOR
}
