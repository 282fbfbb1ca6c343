use std::path::PathBuf;

use wordfreq_core::SortPolicy;

/// Progress of one run, in the order the pipeline emits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Whole-file read is about to start.
    ReadingFile { input: PathBuf },
    /// Line-by-line read is about to start.
    StreamingStarted { input: PathBuf },
    /// A line produced tokens (1-based line number).
    LineCounted { line: usize, words: usize },
    /// A line produced no tokens and was skipped.
    LineSkipped { line: usize },
    WordsFound { total: u64 },
    UniqueWords { unique: usize },
    Sorting { policy: SortPolicy },
    WritingResults { output: PathBuf },
    Completed(RunSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_words: u64,
    pub unique_words: usize,
    pub output_path: PathBuf,
}
