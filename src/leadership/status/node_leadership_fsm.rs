use std::fmt;
use std::time::Duration;

use crate::communication::peers::PeerRequestHandler;
use crate::leadership::election::{start_election, ElectionOutcome, StartElectionParams};
use crate::leadership::status::FsmStatus;
use crate::leadership::{ping_leader_timeout, ElectionEvent, EventScheduler};
use crate::node::configuration::{Cluster, NodeOrdering};
use crate::node::state::{ElectionPhase, ElectionState, NodeName};

/// Per-node Bully election state machine. Owns the election state and applies one event at a
/// time; the caller serializes the events.
pub struct NodeLeadershipFsm<Pc, Cl, No, Sc>
where
    Pc: PeerRequestHandler,
    Cl: Cluster,
    No: NodeOrdering,
    Sc: EventScheduler,
{
    node_name: NodeName,
    state: ElectionState,
    peer_communicator: Pc,
    cluster_configuration: Cl,
    node_ordering: No,
    scheduler: Sc,
}

impl<Pc, Cl, No, Sc> fmt::Debug for NodeLeadershipFsm<Pc, Cl, No, Sc>
where
    Pc: PeerRequestHandler,
    Cl: Cluster,
    No: NodeOrdering,
    Sc: EventScheduler,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeLeadershipFsm")
            .field("node_name", &self.node_name)
            .field("state", &self.state)
            .finish()
    }
}

impl<Pc, Cl, No, Sc> NodeLeadershipFsm<Pc, Cl, No, Sc>
where
    Pc: PeerRequestHandler,
    Cl: Cluster,
    No: NodeOrdering,
    Sc: EventScheduler,
{
    pub fn new(
        node_name: NodeName,
        state: ElectionState,
        peer_communicator: Pc,
        cluster_configuration: Cl,
        node_ordering: No,
        scheduler: Sc,
    ) -> NodeLeadershipFsm<Pc, Cl, No, Sc> {
        NodeLeadershipFsm {
            node_name,
            state,
            peer_communicator,
            cluster_configuration,
            node_ordering,
            scheduler,
        }
    }

    pub fn node_name(&self) -> &NodeName {
        &self.node_name
    }

    pub fn state(&self) -> &ElectionState {
        &self.state
    }

    pub fn process_event(&mut self, event: ElectionEvent) -> FsmStatus {
        trace!("Node {} ({}) processing {}", self.node_name, self.state.phase, event);

        match (self.state.phase, event) {
            (_, ElectionEvent::Stop) => {
                info!("Node {} election stopped", self.node_name);
                return FsmStatus::Stopped;
            }
            (ElectionPhase::Pinged, ElectionEvent::PingLeaderTimeout) => {
                self.ping_leader();
            }
            (ElectionPhase::Pinging, ElectionEvent::PingLeaderTimeout) => {
                info!(
                    "Node {} got no Pong from leader {}. Starting new election",
                    self.node_name, self.state.believed_leader
                );
                self.elect();
            }
            (ElectionPhase::Leading, ElectionEvent::Ping(from)) => {
                self.send(&from, ElectionEvent::Pong(self.node_name.clone()));
            }
            (ElectionPhase::Pinging, ElectionEvent::Pong(ref from))
                if *from == self.state.believed_leader =>
            {
                trace!("Node {} leader {} is alive", self.node_name, from);
                self.state.phase = ElectionPhase::Pinged;
            }
            (_, ElectionEvent::AnnounceElection(from)) => {
                info!("Node {} received election announcement from {}", self.node_name, from);
                self.elect();
            }
            (_, ElectionEvent::NewLeader(leader)) => {
                self.follow(leader);
            }
            (phase, event) => {
                warn!("Node {} unexpected event {} in phase {}", self.node_name, event, phase);
            }
        }

        FsmStatus::Running
    }

    /// Arms the first leader ping of a node that starts as a follower.
    pub fn start(&self, initial_ping_delay: Duration) {
        if self.state.phase == ElectionPhase::Pinged {
            self.scheduler
                .schedule(initial_ping_delay, ElectionEvent::PingLeaderTimeout);
        }
    }

    fn ping_leader(&mut self) {
        self.state.phase = ElectionPhase::Pinging;

        let leader = self.state.believed_leader.clone();
        self.send(&leader, ElectionEvent::Ping(self.node_name.clone()));
        self.arm_ping_leader_timeout();
    }

    fn follow(&mut self, leader: NodeName) {
        if leader == self.node_name {
            info!("Node {} announced as the leader", self.node_name);
            self.state.believed_leader = leader;
            self.state.phase = ElectionPhase::Leading;
            return;
        }

        info!("Node {} follows the new leader {}", self.node_name, leader);
        self.state.believed_leader = leader;
        self.ping_leader();
    }

    fn elect(&mut self) {
        let outcome = start_election(StartElectionParams {
            node_name: &self.node_name,
            peers: self.cluster_configuration.reachable_peers(&self.node_name),
            peer_communicator: &self.peer_communicator,
            node_ordering: &self.node_ordering,
        });

        match outcome {
            ElectionOutcome::Won => {
                self.state.believed_leader = self.node_name.clone();
                self.state.phase = ElectionPhase::Leading;
                info!("Node {} status changed to Leading", self.node_name);
            }
            ElectionOutcome::Announced => {
                self.state.phase = ElectionPhase::Electing;
                info!("Node {} status changed to Electing", self.node_name);
            }
        }
    }

    fn arm_ping_leader_timeout(&self) {
        self.scheduler.schedule(
            ping_leader_timeout(self.state.timeout_duration),
            ElectionEvent::PingLeaderTimeout,
        );
    }

    fn send(&self, destination: &NodeName, event: ElectionEvent) {
        if let Err(err) = self.peer_communicator.send_event(destination, event) {
            warn!("Node {} event dropped: {}", self.node_name, err);
        }
    }
}
