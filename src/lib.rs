pub mod ansi;
pub mod arch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod container;
pub mod params;

pub use anyhow::Result;
