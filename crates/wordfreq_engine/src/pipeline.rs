use std::path::PathBuf;

use wordfreq_core::SortPolicy;

use crate::count::{CountError, CounterKind};
use crate::persist::{write_counts, PersistError};
use crate::{PipelineEvent, Reporter, RunSummary};

pub const DEFAULT_OUTPUT: &str = "word_counts.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub counter: CounterKind,
    pub sort: SortPolicy,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            counter: CounterKind::default(),
            sort: SortPolicy::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Read(#[from] CountError),
    #[error("error writing output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
}

/// Read, count, sort and write one input file.
///
/// A read failure leaves the output untouched. A write failure leaves any
/// previous output file as it was.
pub fn run_pipeline(
    config: &PipelineConfig,
    reporter: &dyn Reporter,
) -> Result<RunSummary, PipelineError> {
    let strategy = config.counter.strategy();
    let table = strategy.count(&config.input, reporter)?;

    let total_words = table.total();
    let unique_words = table.len();
    reporter.emit(PipelineEvent::UniqueWords {
        unique: unique_words,
    });

    reporter.emit(PipelineEvent::Sorting {
        policy: config.sort,
    });
    let entries = table.into_sorted(config.sort);

    reporter.emit(PipelineEvent::WritingResults {
        output: config.output.clone(),
    });
    let output_path =
        write_counts(&config.output, &entries).map_err(|source| PipelineError::Write {
            path: config.output.clone(),
            source,
        })?;

    let summary = RunSummary {
        total_words,
        unique_words,
        output_path,
    };
    reporter.emit(PipelineEvent::Completed(summary.clone()));
    Ok(summary)
}
