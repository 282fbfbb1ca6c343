use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;
use wordfreq_core::SortPolicy;
use wordfreq_engine::DEFAULT_OUTPUT;

/// Options shared by both counting commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sort_by_frequency: bool,
    pub sort_by_length: bool,
    pub verbose: bool,
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    pub fn sort_policy(&self) -> SortPolicy {
        SortPolicy::from_flags(self.sort_by_frequency, self.sort_by_length)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing required argument INPUT_FILE")]
    MissingInput,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' requires a value")]
    MissingValue(String),
}

pub fn usage(program: &str) -> String {
    format!(
        "Count word frequencies in a UTF-8 text file.\n\
         \n\
         Usage: {program} INPUT_FILE [-o OUTPUT_FILE] [--sort-by-frequency] [--sort-by-length]\n\
         \n\
         Options:\n\
         \x20 -o, --output PATH      output file (default: {DEFAULT_OUTPUT})\n\
         \x20     --sort-by-frequency  sort by frequency, descending\n\
         \x20     --sort-by-length     sort by word length, ascending\n\
         \x20 -v, --verbose          log per-line details\n\
         \x20     --log-file PATH      also write the log to PATH\n\
         \x20 -h, --help             print this help\n"
    )
}

/// Parse everything after the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut input: Option<PathBuf> = None;
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    let mut sort_by_frequency = false;
    let mut sort_by_length = false;
    let mut verbose = false;
    let mut log_file = None;
    let mut options_done = false;

    while let Some(arg) = args.next() {
        let text = arg.to_string_lossy().into_owned();
        if options_done || !text.starts_with('-') || text == "-" {
            if input.is_some() {
                return Err(ArgsError::UnexpectedArgument(text));
            }
            input = Some(PathBuf::from(arg));
            continue;
        }

        match text.as_str() {
            "--" => options_done = true,
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--verbose" => verbose = true,
            "--sort-by-frequency" => sort_by_frequency = true,
            "--sort-by-length" => sort_by_length = true,
            "-o" | "--output" => output = required_value(&text, args.next())?,
            "--log-file" => log_file = Some(required_value(&text, args.next())?),
            other => {
                if let Some(value) = other.strip_prefix("--output=") {
                    output = non_empty(other, value)?;
                } else if let Some(value) = other.strip_prefix("--log-file=") {
                    log_file = Some(non_empty(other, value)?);
                } else if let Some(value) = other.strip_prefix("-o").filter(|v| !v.is_empty()) {
                    output = PathBuf::from(value);
                } else {
                    return Err(ArgsError::UnknownOption(other.to_string()));
                }
            }
        }
    }

    let input = input.ok_or(ArgsError::MissingInput)?;
    Ok(Command::Run(CliArgs {
        input,
        output,
        sort_by_frequency,
        sort_by_length,
        verbose,
        log_file,
    }))
}

fn required_value(option: &str, value: Option<OsString>) -> Result<PathBuf, ArgsError> {
    value
        .map(PathBuf::from)
        .ok_or_else(|| ArgsError::MissingValue(option.to_string()))
}

fn non_empty(option: &str, value: &str) -> Result<PathBuf, ArgsError> {
    if value.is_empty() {
        let name = option.split('=').next().unwrap_or(option);
        return Err(ArgsError::MissingValue(name.to_string()));
    }
    Ok(PathBuf::from(value))
}
