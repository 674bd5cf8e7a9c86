use bully::{NodeName, NodeTimings};
use std::thread;
use std::time::{Duration, Instant};

pub mod cluster;

pub fn sleep_ms(milliseconds: u64) {
    thread::sleep(Duration::from_millis(milliseconds));
}

pub fn node_timings() -> NodeTimings {
    NodeTimings {
        timeout_duration: Duration::from_millis(50),
        initial_ping_delay: Duration::from_millis(0),
    }
}

pub fn names(nodes: &[&str]) -> Vec<NodeName> {
    nodes.iter().map(|node| NodeName::from(*node)).collect()
}

/// Polls the condition until it holds or the wait time elapses.
pub fn wait_for<F: Fn() -> bool>(max_wait: Duration, condition: F) -> bool {
    let started = Instant::now();
    while started.elapsed() < max_wait {
        if condition() {
            return true;
        }
        sleep_ms(10);
    }

    condition()
}
