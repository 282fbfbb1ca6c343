use std::cmp::Ordering;
use std::fmt;

use crate::table::WordCount;

/// Order of the written result.
///
/// Ties under `Frequency` and `Length` fall back to alphabetical order so the
/// output is reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortPolicy {
    /// Ascending by word, code-point order.
    #[default]
    Alphabetical,
    /// Descending by count.
    Frequency,
    /// Ascending by word length in characters.
    Length,
}

impl SortPolicy {
    /// Frequency wins when both flags are set.
    pub fn from_flags(by_frequency: bool, by_length: bool) -> Self {
        if by_frequency {
            SortPolicy::Frequency
        } else if by_length {
            SortPolicy::Length
        } else {
            SortPolicy::Alphabetical
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            SortPolicy::Alphabetical => "Sorting alphabetically",
            SortPolicy::Frequency => "Sorting by frequency (descending)",
            SortPolicy::Length => "Sorting by word length (ascending)",
        }
    }

    pub fn compare(&self, a: &WordCount, b: &WordCount) -> Ordering {
        let primary = match self {
            SortPolicy::Alphabetical => Ordering::Equal,
            SortPolicy::Frequency => b.count.cmp(&a.count),
            SortPolicy::Length => a.word.chars().count().cmp(&b.word.chars().count()),
        };
        primary.then_with(|| a.word.cmp(&b.word))
    }

    pub fn sort(&self, entries: &mut [WordCount]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortPolicy::Alphabetical => write!(f, "alphabetical"),
            SortPolicy::Frequency => write!(f, "frequency"),
            SortPolicy::Length => write!(f, "length"),
        }
    }
}
