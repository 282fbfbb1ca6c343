//! Counts word frequencies by reading the whole input file into memory.
use std::process::ExitCode;

use wordfreq_app::{main_with, CounterKind};

fn main() -> ExitCode {
    main_with("wordcount", CounterKind::Batch, std::env::args_os().skip(1))
}
