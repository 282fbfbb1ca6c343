use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wordfreq_core::SortPolicy;
use wordfreq_engine::{
    run_pipeline, BatchCounter, CountStrategy, CounterKind, PipelineConfig, PipelineError,
    PipelineEvent, RecordingReporter, StreamingCounter,
};

const CAT_TEXT: &str = "The cat sat on the mat. The cat ran.";

fn init_logging() {
    wordfreq_logging::initialize_for_tests();
}

fn config(dir: &Path, input: &str, counter: CounterKind, sort: SortPolicy) -> PipelineConfig {
    let input_path = dir.join("input.txt");
    fs::write(&input_path, input).unwrap();
    PipelineConfig {
        output: dir.join("word_counts.txt"),
        counter,
        sort,
        ..PipelineConfig::new(input_path)
    }
}

fn run_to_string(input: &str, counter: CounterKind, sort: SortPolicy) -> String {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path(), input, counter, sort);
    let summary = run_pipeline(&config, &RecordingReporter::new()).unwrap();
    fs::read_to_string(summary.output_path).unwrap()
}

#[test]
fn default_config_writes_word_counts_txt() {
    let config = PipelineConfig::new("book.txt");
    assert_eq!(config.output, Path::new("word_counts.txt"));
    assert_eq!(config.counter, CounterKind::Batch);
    assert_eq!(config.sort, SortPolicy::Alphabetical);
}

#[test]
fn both_strategies_write_the_same_file() {
    init_logging();
    let text = "The cat sat on the mat.\nThe cat ran.\n\n!!!\r\nÄrger über die Straße -- isn't it?\n";
    for sort in [
        SortPolicy::Alphabetical,
        SortPolicy::Frequency,
        SortPolicy::Length,
    ] {
        assert_eq!(
            run_to_string(text, CounterKind::Batch, sort),
            run_to_string(text, CounterKind::Streaming, sort),
            "{sort}"
        );
    }
}

#[test]
fn strategies_agree_on_tables() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("input.txt");
    fs::write(&path, "one\ntwo two\n\nthree three three").unwrap();

    let reporter = RecordingReporter::new();
    let batch = BatchCounter.count(&path, &reporter).unwrap();
    let streaming = StreamingCounter.count(&path, &reporter).unwrap();
    assert_eq!(batch, streaming);
    assert_eq!(batch.total(), 6);
}

#[test]
fn cat_scenarios() {
    assert_eq!(
        run_to_string(CAT_TEXT, CounterKind::Batch, SortPolicy::Alphabetical),
        "cat: 2\nmat: 1\non: 1\nran: 1\nsat: 1\nthe: 3\n"
    );
    assert_eq!(
        run_to_string(CAT_TEXT, CounterKind::Streaming, SortPolicy::Frequency),
        "the: 3\ncat: 2\nmat: 1\non: 1\nran: 1\nsat: 1\n"
    );
}

#[test]
fn empty_and_punctuation_inputs_write_empty_files() {
    for counter in [CounterKind::Batch, CounterKind::Streaming] {
        assert_eq!(run_to_string("", counter, SortPolicy::Alphabetical), "");
        assert_eq!(
            run_to_string("!!! ??? ...", counter, SortPolicy::Alphabetical),
            ""
        );
    }
}

#[test]
fn rerun_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path(), CAT_TEXT, CounterKind::Batch, SortPolicy::Length);

    run_pipeline(&config, &RecordingReporter::new()).unwrap();
    let first = fs::read(&config.output).unwrap();
    run_pipeline(&config, &RecordingReporter::new()).unwrap();
    let second = fs::read(&config.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn batch_run_emits_events_in_order() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path(), CAT_TEXT, CounterKind::Batch, SortPolicy::Frequency);
    let reporter = RecordingReporter::new();

    let summary = run_pipeline(&config, &reporter).unwrap();
    assert_eq!(summary.total_words, 9);
    assert_eq!(summary.unique_words, 6);

    assert_eq!(
        reporter.events(),
        vec![
            PipelineEvent::ReadingFile {
                input: config.input.clone()
            },
            PipelineEvent::WordsFound { total: 9 },
            PipelineEvent::UniqueWords { unique: 6 },
            PipelineEvent::Sorting {
                policy: SortPolicy::Frequency
            },
            PipelineEvent::WritingResults {
                output: config.output.clone()
            },
            PipelineEvent::Completed(summary),
        ]
    );
}

#[test]
fn streaming_run_reports_lines() {
    let temp = TempDir::new().unwrap();
    let config = config(
        temp.path(),
        "The cat\n...\nran",
        CounterKind::Streaming,
        SortPolicy::Alphabetical,
    );
    let reporter = RecordingReporter::new();
    run_pipeline(&config, &reporter).unwrap();

    let events = reporter.events();
    assert_eq!(
        events[0],
        PipelineEvent::StreamingStarted {
            input: config.input.clone()
        }
    );
    assert!(events.contains(&PipelineEvent::LineCounted { line: 1, words: 2 }));
    assert!(events.contains(&PipelineEvent::LineSkipped { line: 2 }));
    assert!(events.contains(&PipelineEvent::LineCounted { line: 3, words: 1 }));
}

#[test]
fn missing_input_is_a_read_error_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    for counter in [CounterKind::Batch, CounterKind::Streaming] {
        let config = PipelineConfig {
            output: temp.path().join("out.txt"),
            counter,
            ..PipelineConfig::new(temp.path().join("nope.txt"))
        };
        let reporter = RecordingReporter::new();

        let err = run_pipeline(&config, &reporter).unwrap_err();
        assert!(matches!(err, PipelineError::Read(_)));
        assert!(err.to_string().starts_with("error reading file"));
        assert!(!config.output.exists());
        assert!(!reporter
            .events()
            .iter()
            .any(|e| matches!(e, PipelineEvent::WritingResults { .. })));
    }
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("latin1.txt");
    fs::write(&input, b"caf\xe9\n").unwrap();

    for counter in [CounterKind::Batch, CounterKind::Streaming] {
        let config = PipelineConfig {
            output: temp.path().join("out.txt"),
            counter,
            ..PipelineConfig::new(&input)
        };
        let err = run_pipeline(&config, &RecordingReporter::new()).unwrap_err();
        assert!(matches!(err, PipelineError::Read(_)), "{counter:?}");
    }
}

#[test]
fn unwritable_output_is_a_write_error_after_counting() {
    let temp = TempDir::new().unwrap();
    let mut config = config(temp.path(), CAT_TEXT, CounterKind::Batch, SortPolicy::Alphabetical);
    config.output = temp.path().join("no_such_dir").join("out.txt");
    let reporter = RecordingReporter::new();

    let err = run_pipeline(&config, &reporter).unwrap_err();
    assert!(matches!(err, PipelineError::Write { .. }));
    assert!(err.to_string().starts_with("error writing output file"));
    assert!(reporter
        .events()
        .contains(&PipelineEvent::UniqueWords { unique: 6 }));
    assert!(!reporter
        .events()
        .iter()
        .any(|e| matches!(e, PipelineEvent::Completed(_))));
}
