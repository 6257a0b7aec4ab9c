pub mod odd_independent_set;
pub mod signal_handling;

pub use odd_independent_set::*;
