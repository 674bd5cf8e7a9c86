use std::time::Duration;

/// Node name. Carries the node identity used for the leader election ordering.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Display, From)]
pub struct NodeName(String);

impl NodeName {
    pub fn new<S: Into<String>>(name: S) -> NodeName {
        NodeName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeName {
    fn from(name: &str) -> Self {
        NodeName(name.to_string())
    }
}

/// Leader election phase of the node.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
pub enum ElectionPhase {
    /// Waits for the next leader ping.
    Pinged,

    /// Ping sent to the believed leader. Waits for the Pong or for the timeout.
    Pinging,

    /// Election announced to the higher-identity peers.
    Electing,

    /// The node is the leader.
    Leading,
}

/// Election state of the node. Mutated only by the node's own event processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Display)]
#[display(
    fmt = "phase {} leader {} timeout {:?}",
    phase,
    believed_leader,
    timeout_duration
)]
pub struct ElectionState {
    pub(crate) phase: ElectionPhase,
    pub(crate) believed_leader: NodeName,
    pub(crate) timeout_duration: Duration,
}

impl ElectionState {
    /// Creates the initial state: Leading when the node is the initial leader, Pinged otherwise.
    pub fn new(node_name: &NodeName, initial_leader: NodeName, timeout_duration: Duration) -> ElectionState {
        let phase = if *node_name == initial_leader {
            ElectionPhase::Leading
        } else {
            ElectionPhase::Pinged
        };

        ElectionState {
            phase,
            believed_leader: initial_leader,
            timeout_duration,
        }
    }

    pub fn phase(&self) -> ElectionPhase {
        self.phase
    }

    /// Node currently considered the leader (may be the node itself).
    pub fn believed_leader(&self) -> &NodeName {
        &self.believed_leader
    }

    pub fn timeout_duration(&self) -> Duration {
        self.timeout_duration
    }

    pub fn is_leader(&self) -> bool {
        self.phase == ElectionPhase::Leading
    }

    /// Leader confirmed from the node's point of view: self when leading, the believed leader
    /// while following. None during the election.
    pub fn leader(&self) -> Option<&NodeName> {
        match self.phase {
            ElectionPhase::Electing => None,
            _ => Some(&self.believed_leader),
        }
    }
}
