//! Command-line front end shared by the `wordcount` and `wordcount-stream`
//! binaries.
mod args;

use std::ffi::OsString;
use std::process::ExitCode;

use wordfreq_engine::{run_pipeline, LogReporter, PipelineConfig, Reporter};
use wordfreq_logging::{wf_debug, wf_error, LogDestination, LogSettings};

pub use args::{parse_args, usage, ArgsError, CliArgs, Command};
pub use wordfreq_engine::CounterKind;

/// Exit status when reading the input or writing the output failed.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for malformed command lines.
pub const EXIT_USAGE: u8 = 2;

/// Entry point for a binary: parse `argv`, set up logging and run.
pub fn main_with<I, S>(program: &str, counter: CounterKind, argv: I) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let args = match parse_args(argv) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            print!("{}", usage(program));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{program}: {err}\n");
            eprint!("{}", usage(program));
            return ExitCode::from(EXIT_USAGE);
        }
    };

    wordfreq_logging::initialize(&log_settings(&args));
    run(&args, counter, &LogReporter)
}

/// Run one count with already parsed arguments. Failures are logged, not raised.
pub fn run(args: &CliArgs, counter: CounterKind, reporter: &dyn Reporter) -> ExitCode {
    let config = pipeline_config(args, counter);
    wf_debug!(
        "Counting with {} strategy, {} order",
        config.counter.strategy().name(),
        config.sort
    );

    match run_pipeline(&config, reporter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            wf_error!("{err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

pub fn pipeline_config(args: &CliArgs, counter: CounterKind) -> PipelineConfig {
    PipelineConfig {
        output: args.output.clone(),
        counter,
        sort: args.sort_policy(),
        ..PipelineConfig::new(args.input.clone())
    }
}

fn log_settings(args: &CliArgs) -> LogSettings {
    let mut settings = LogSettings::with_verbosity(args.verbose);
    if let Some(path) = &args.log_file {
        settings.destination = LogDestination::TerminalAndFile(path.clone());
    }
    settings
}
