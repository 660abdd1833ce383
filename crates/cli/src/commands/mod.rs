//! CLI commands for the CS2 price checker.

pub mod check;
pub mod fees;
pub mod parse;
pub mod search;

pub use check::{run_check, CheckArgs};
pub use fees::{run_fees, FeesArgs};
pub use parse::{run_parse, ParseArgs};
pub use search::{run_search, SearchArgs};
