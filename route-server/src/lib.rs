//! Town route query service.
//!
//! Builds a small weighted directed graph from an edge list such as
//! `"AB5, BC4"` and answers route questions about it: fixed-route
//! distances, shortest routes, and counts of trips within stop or distance
//! bounds. Served over HTTP or from an interactive console.

pub mod cache;
pub mod config;
pub mod console;
pub mod domain;
pub mod graph;
pub mod logging;
pub mod planner;
pub mod queue;
pub mod report;
pub mod source;
pub mod web;
