//! Transit distance server.
//!
//! Answers "how many stops away is that ticket inspector?" by counting
//! station hops between two points of a rail network.

pub mod catalog;
pub mod config;
pub mod distance;
pub mod domain;
pub mod graph;
pub mod locate;
pub mod web;
