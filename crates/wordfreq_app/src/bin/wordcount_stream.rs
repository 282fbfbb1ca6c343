//! Counts word frequencies line by line without holding the whole input.
use std::process::ExitCode;

use wordfreq_app::{main_with, CounterKind};

fn main() -> ExitCode {
    main_with(
        "wordcount-stream",
        CounterKind::Streaming,
        std::env::args_os().skip(1),
    )
}
