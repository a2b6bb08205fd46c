//! Running median of an integer stream, kept with a max-heap of the lower half
//! and a min-heap of the upper half.

pub mod config;
pub mod error;
pub mod heap;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::MedianError;
pub use heap::{Heap, HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder};
pub use tracker::MedianTracker;
