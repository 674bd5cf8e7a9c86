#[macro_use]
extern crate log;
extern crate chrono;
extern crate env_logger;

pub mod cases;
mod steps;

use chrono::prelude::{DateTime, Local};
use std::io::Write;

extern crate bully;
extern crate bully_modules;

fn init_logger() {
    env_logger::builder()
        .format(|buf, record| {
            let now: DateTime<Local> = Local::now();
            let now_str = now.format("%H:%M:%S.%3f").to_string();
            writeln!(buf, "{:5}: {} - {}", record.level(), now_str, record.args())
        })
        .init();
}

fn main() {
    init_logger();

    cases::leader_failover::run();
    cases::election_convergence::run();
    cases::follower_failure::run();
    cases::single_node::run();

    info!("All cases passed");
}
