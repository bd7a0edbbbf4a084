//! Sample file input, report output, and test-signal generation

pub mod input;
pub mod output;
pub mod generate;

pub use input::{parse_samples, read_samples};
pub use output::{report_line, write_report, write_report_file};
pub use generate::{sine_cycle, write_sine_file};
