use std::sync::Mutex;

use wordfreq_logging::{wf_debug, wf_info};

use crate::PipelineEvent;

/// Receives progress from a run. The pipeline never logs directly.
pub trait Reporter {
    fn emit(&self, event: PipelineEvent);
}

/// Forwards events to the global `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn emit(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::ReadingFile { input } => {
                wf_info!("Reading file: {}", input.display())
            }
            PipelineEvent::StreamingStarted { input } => {
                wf_info!("Starting streaming count for {}", input.display())
            }
            PipelineEvent::LineCounted { line, words } => {
                wf_debug!("Line {line}: {words} words")
            }
            PipelineEvent::LineSkipped { line } => wf_debug!("Line {line}: no words, skipped"),
            PipelineEvent::WordsFound { total } => wf_info!("Total words found: {total}"),
            PipelineEvent::UniqueWords { unique } => wf_info!("Unique words: {unique}"),
            PipelineEvent::Sorting { policy } => wf_info!("{}", policy.describe()),
            PipelineEvent::WritingResults { output } => {
                wf_info!("Writing results to: {}", output.display())
            }
            PipelineEvent::Completed(_) => wf_info!("Process completed."),
        }
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl Reporter for RecordingReporter {
    fn emit(&self, event: PipelineEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
