//! Command implementations

pub mod check;
pub mod simple;
pub mod wordlist;

pub use check::{CheckResult, check_guess, print_check_result};
pub use simple::run_simple;
pub use wordlist::convert_wordlist;
