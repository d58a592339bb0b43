//! Command implementations

pub mod bench;
pub mod generate;
pub mod simple;

pub use bench::{BenchResult, run_bench};
pub use generate::{GenerateResult, generate_puzzle};
pub use simple::run_simple;
