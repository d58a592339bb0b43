//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    ConsolePresenter, print_banner, print_bench_result, print_notice, print_puzzle,
    print_snapshot,
};
