pub mod node_leadership_fsm;


/// Result of a processed event for the node worker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FsmStatus {
    Running,
    Stopped,
}
