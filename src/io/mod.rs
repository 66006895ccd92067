//! File I/O for scenarios and estimates.

pub mod scenario;

pub use scenario::{
    Scenario, from_scenario_str, read_scenario, to_estimate_string, to_scenario_string,
    write_estimate, write_scenario,
};
