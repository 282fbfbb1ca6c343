//! Wordfreq engine: file IO, counting strategies and the run pipeline.
mod count;
mod persist;
mod pipeline;
mod report;
mod types;

pub use count::{BatchCounter, CountError, CountStrategy, CounterKind, StreamingCounter};
pub use persist::{write_counts, AtomicFileWriter, PersistError};
pub use pipeline::{run_pipeline, PipelineConfig, PipelineError, DEFAULT_OUTPUT};
pub use report::{LogReporter, RecordingReporter, Reporter};
pub use types::{PipelineEvent, RunSummary};
