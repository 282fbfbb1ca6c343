use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use wordfreq_core::{tokenize, FrequencyTable};

use crate::{PipelineEvent, Reporter};

#[derive(Debug, thiserror::Error)]
#[error("error reading file {}: {source}", .path.display())]
pub struct CountError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl CountError {
    fn new(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// One way of turning an input file into a frequency table.
pub trait CountStrategy {
    fn name(&self) -> &'static str;
    fn count(&self, path: &Path, reporter: &dyn Reporter) -> Result<FrequencyTable, CountError>;
}

/// Reads the whole file into memory and tokenizes it in one pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchCounter;

impl CountStrategy for BatchCounter {
    fn name(&self) -> &'static str {
        "batch"
    }

    fn count(&self, path: &Path, reporter: &dyn Reporter) -> Result<FrequencyTable, CountError> {
        reporter.emit(PipelineEvent::ReadingFile {
            input: path.to_path_buf(),
        });
        let text = fs::read_to_string(path).map_err(|e| CountError::new(path, e))?;

        let tokens = tokenize(&text);
        reporter.emit(PipelineEvent::WordsFound {
            total: tokens.len() as u64,
        });
        Ok(tokens.into_iter().collect())
    }
}

/// Reads the file line by line, counting each line as it arrives.
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamingCounter;

impl StreamingCounter {
    /// Count every line of `reader`. Lines without tokens are reported and skipped.
    pub fn count_reader<R: BufRead>(
        &self,
        reader: R,
        reporter: &dyn Reporter,
    ) -> io::Result<FrequencyTable> {
        let mut table = FrequencyTable::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let lineno = index + 1;
            let words = tokenize(&line);
            if words.is_empty() {
                reporter.emit(PipelineEvent::LineSkipped { line: lineno });
                continue;
            }
            reporter.emit(PipelineEvent::LineCounted {
                line: lineno,
                words: words.len(),
            });
            table.extend(words);
        }
        Ok(table)
    }
}

impl CountStrategy for StreamingCounter {
    fn name(&self) -> &'static str {
        "streaming"
    }

    fn count(&self, path: &Path, reporter: &dyn Reporter) -> Result<FrequencyTable, CountError> {
        reporter.emit(PipelineEvent::StreamingStarted {
            input: path.to_path_buf(),
        });
        let file = File::open(path).map_err(|e| CountError::new(path, e))?;
        let table = self
            .count_reader(BufReader::new(file), reporter)
            .map_err(|e| CountError::new(path, e))?;

        reporter.emit(PipelineEvent::WordsFound {
            total: table.total(),
        });
        Ok(table)
    }
}

/// Selects the counting strategy for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CounterKind {
    #[default]
    Batch,
    Streaming,
}

impl CounterKind {
    pub fn strategy(self) -> Box<dyn CountStrategy> {
        match self {
            CounterKind::Batch => Box::new(BatchCounter),
            CounterKind::Streaming => Box::new(StreamingCounter),
        }
    }
}
