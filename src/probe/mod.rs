//! Single-flag launches with captured output

pub mod command;

pub use command::{execute_probe, ProbeRecord};
