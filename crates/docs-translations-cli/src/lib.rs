#![doc = include_str!("../README.md")]

pub mod commands;
pub mod core;
pub mod stats;
pub mod tools;
pub mod utils;
pub mod version;
