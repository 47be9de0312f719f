//! CLI command implementations.

mod common;
mod fetch;
mod robots;

pub use common::{ConfigArgs, Operation, SelectionArgs};
pub use fetch::{fetch, run_fetch};
pub use robots::{RobotsArgs, completeness_report, robots_txt, run_robots_txt};
