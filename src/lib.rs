//! moodscope - a terminal wellness dashboard
//!
//! Loads mood observations and pre-aggregated wellness data, renders the
//! mood distribution as one of five chart views, scores wellness metrics,
//! and lists the mood log. The library exposes every layer for the binary,
//! the integration tests and the benchmarks.

pub mod analytics;
pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod table;
pub mod terminal;
pub mod ui;
