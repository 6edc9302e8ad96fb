//! linkint library: application logic for the big-integer calculator.

pub mod app;
pub mod config;
pub mod errors;
