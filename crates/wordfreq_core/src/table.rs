use std::collections::HashMap;

use crate::sort::SortPolicy;
use crate::tokenize::tokenize;

/// One line of the ordered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Token -> occurrence count for one input. Every stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of `text` in one pass.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        table.extend(tokenize(text));
        table
    }

    /// Count `lines` one at a time, tokenizing each on its own.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut table = Self::new();
        for line in lines {
            table.extend(tokenize(line));
        }
        table
    }

    pub fn add(&mut self, token: impl Into<String>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens seen.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Consume the table into entries ordered by `policy`.
    pub fn into_sorted(self, policy: SortPolicy) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect();
        policy.sort(&mut entries);
        entries
    }
}

impl<S: Into<String>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, tokens: I) {
        for token in tokens {
            self.add(token);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(tokens: I) -> Self {
        let mut table = Self::new();
        table.extend(tokens);
        table
    }
}
