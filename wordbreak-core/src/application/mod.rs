//! Consumers of the segmentation core
//!
//! Word frequency aggregation on top of [`WordBreaker`](crate::domain::WordBreaker)
//! and the bounded selection structure it ranks with.

pub mod counter;
pub mod topk;

pub use counter::{DefaultWordFilter, KeepAll, WordCount, WordCounter, WordFilter, WordTally};
pub use topk::BoundedHeap;
