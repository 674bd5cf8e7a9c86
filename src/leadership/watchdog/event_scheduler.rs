use crossbeam_channel::Sender;
use std::time::Duration;

use crate::common;
use crate::leadership::{ElectionEvent, EventScheduler};
use crate::node::state::NodeName;

/// Timer backed by the node's own event queue. Every scheduled event gets a one-shot timer
/// thread; armed timers are never cancelled.
#[derive(Clone, Debug)]
pub struct ChannelEventScheduler {
    node_name: NodeName,
    event_tx: Sender<ElectionEvent>,
}

impl ChannelEventScheduler {
    pub fn new(node_name: NodeName, event_tx: Sender<ElectionEvent>) -> ChannelEventScheduler {
        ChannelEventScheduler { node_name, event_tx }
    }
}

struct ScheduledEvent {
    node_name: NodeName,
    delay: Duration,
    event: ElectionEvent,
    event_tx: Sender<ElectionEvent>,
}

impl EventScheduler for ChannelEventScheduler {
    fn schedule(&self, delay: Duration, event: ElectionEvent) {
        trace!("Node {} scheduling {} after {:?}", self.node_name, event, delay);

        common::run_worker_thread(
            fire_scheduled_event,
            ScheduledEvent {
                node_name: self.node_name.clone(),
                delay,
                event,
                event_tx: self.event_tx.clone(),
            },
        );
    }
}

fn fire_scheduled_event(scheduled: ScheduledEvent) {
    let timeout = crossbeam_channel::after(scheduled.delay);
    if timeout.recv().is_err() {
        error!("Node {} timer channel disconnected", scheduled.node_name);
        return;
    }

    if scheduled.event_tx.send(scheduled.event).is_err() {
        trace!("Node {} stopped before the timer fired", scheduled.node_name);
    }
}
