use std::fmt::Write;

use crate::table::WordCount;

/// Serialize entries as `word: count` lines, in the given order.
pub fn render_counts(entries: &[WordCount]) -> String {
    let mut out = String::with_capacity(entries.len() * 12);
    for entry in entries {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}: {}", entry.word, entry.count);
    }
    out
}
