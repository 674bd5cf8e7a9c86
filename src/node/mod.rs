use std::cmp::Ordering;
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use parking_lot::RwLock;

use crate::common::Worker;
use crate::communication::peers::{PeerRequestChannels, PeerRequestHandler};
use crate::errors::{new_err, BullyError};
use crate::leadership::status::node_leadership_fsm::NodeLeadershipFsm;
use crate::leadership::status::FsmStatus;
use crate::leadership::watchdog::event_scheduler::ChannelEventScheduler;
use crate::leadership::ElectionEvent;
use crate::node::configuration::{Cluster, NodeConfiguration, NodeOrdering};
use crate::node::state::{ElectionState, NodeName};

pub mod configuration;
pub mod state;

/// Handle of the running election node.
#[derive(Debug)]
pub struct ElectionNode {
    node_name: NodeName,
    event_tx: Sender<ElectionEvent>,
    state: Arc<RwLock<ElectionState>>,
    worker: Worker,
}

impl ElectionNode {
    pub fn node_name(&self) -> &NodeName {
        &self.node_name
    }

    /// Enqueues the event for the node worker. Events submitted after the stop are dropped.
    pub fn submit_event(&self, event: ElectionEvent) {
        if self.event_tx.send(event).is_err() {
            trace!("Node {} is stopped. Event dropped", self.node_name);
        }
    }

    /// Snapshot of the election state after the last processed event.
    pub fn current_state(&self) -> ElectionState {
        self.state.read().clone()
    }

    /// Sender for the node queue. Used to route events from an external dispatcher.
    pub fn event_sender(&self) -> Sender<ElectionEvent> {
        self.event_tx.clone()
    }

    /// Stops the node after the already queued local events and waits for the worker.
    pub fn stop(self) {
        info!("Node {} termination requested", self.node_name);

        self.submit_event(ElectionEvent::Stop);
        self.worker.join();

        info!("Node {} shutting down", self.node_name);
    }
}

struct NodeProcessParams<Pc, Cl, No>
where
    Pc: PeerRequestHandler,
    Cl: Cluster,
    No: NodeOrdering,
{
    fsm: NodeLeadershipFsm<Pc, Cl, No, ChannelEventScheduler>,
    state: Arc<RwLock<ElectionState>>,
    local_event_rx: Receiver<ElectionEvent>,
    peer_event_rx: Receiver<ElectionEvent>,
}

pub fn start<Pc, Cl, No>(config: NodeConfiguration<Pc, Cl, No>) -> Result<ElectionNode, BullyError>
where
    Pc: PeerRequestHandler + PeerRequestChannels,
    Cl: Cluster,
    No: NodeOrdering,
{
    let node_name = config.node_name.clone();

    match config.node_ordering.compare(&node_name, &node_name) {
        Ok(Ordering::Equal) => {}
        Ok(ordering) => {
            return new_err(
                format!("Node {} identity is not comparable to itself", node_name),
                format!("{:?}", ordering),
            )
        }
        Err(err) => {
            return new_err(
                format!("Node {} has no valid identity", node_name),
                err.to_string(),
            )
        }
    }

    let (local_event_tx, local_event_rx): (Sender<ElectionEvent>, Receiver<ElectionEvent>) =
        crossbeam_channel::unbounded();
    let peer_event_rx = config.peer_communicator.event_rx(&node_name);

    let initial_state = ElectionState::new(
        &node_name,
        config.initial_leader,
        config.timings.timeout_duration,
    );
    let state = Arc::new(RwLock::new(initial_state.clone()));

    let fsm = NodeLeadershipFsm::new(
        node_name.clone(),
        initial_state,
        config.peer_communicator,
        config.cluster_configuration,
        config.node_ordering,
        ChannelEventScheduler::new(node_name.clone(), local_event_tx.clone()),
    );
    fsm.start(config.timings.initial_ping_delay);

    let worker = Worker::run(
        format!("Node {}", node_name),
        run_node_process,
        NodeProcessParams {
            fsm,
            state: state.clone(),
            local_event_rx,
            peer_event_rx,
        },
    );

    info!("Node {} started", node_name);

    Ok(ElectionNode {
        node_name,
        event_tx: local_event_tx,
        state,
        worker,
    })
}

fn run_node_process<Pc, Cl, No>(mut params: NodeProcessParams<Pc, Cl, No>)
where
    Pc: PeerRequestHandler,
    Cl: Cluster,
    No: NodeOrdering,
{
    let node_name = params.fsm.node_name().clone();
    info!("Node {} election worker started", node_name);

    loop {
        let event = select!(
            recv(params.local_event_rx) -> res => res,
            recv(params.peer_event_rx) -> res => res,
        );

        let event = match event {
            Ok(event) => event,
            Err(err) => {
                error!("Abnormal exit for node {} election worker: {}", node_name, err);
                break;
            }
        };

        let status = params.fsm.process_event(event);
        *params.state.write() = params.fsm.state().clone();

        if status == FsmStatus::Stopped {
            break;
        }
    }

    info!("Node {} election worker stopped", node_name);
}
