//! # Bully election test cases
//!
//! This subproject runs election scenarios against real node workers connected by the
//! in-process communicator.

#[macro_use]
extern crate log;
pub mod cases;
mod steps;
