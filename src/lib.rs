//! Integer list scans: maximum value and two-sum pairing.
//!
//! The computations are pure functions over slices ([`find_max`],
//! [`find_pair`]). [`Problem`] ties them to the count-prefixed stdin format,
//! and [`judge`] runs a problem over a directory of test cases.

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod judge;
pub mod logging;
pub mod max;
pub mod pair;
pub mod problem;
pub mod utils;

pub use config::Settings;
pub use error::{ScanError, ScanResult};
pub use io::{ExitCode, OutputFormat, ProblemInput, decode_input, parse_input};
pub use judge::{JudgeError, JudgeReport, JudgeStatus, run_judge};
pub use max::find_max;
pub use pair::{IndexPair, find_pair};
pub use problem::{Answer, Problem};
