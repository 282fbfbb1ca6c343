//! Wordfreq core: pure tokenizing, counting and ordering.
mod render;
mod sort;
mod table;
mod tokenize;

pub use render::render_counts;
pub use sort::SortPolicy;
pub use table::{FrequencyTable, WordCount};
pub use tokenize::{is_allowed, tokenize};
